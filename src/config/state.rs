// src/config/state.rs
use super::options::AppOptions;
use crate::analysis::Column;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Free-text filter over course id and both names
    pub search: String,

    /// Column the table is sorted by; None keeps course-id order
    pub sort_by: Option<Column>,
    pub sort_desc: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            search: s!(),
            sort_by: None,
            sort_desc: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::from_env(),
            gui: GuiState::default(),
        }
    }
}
