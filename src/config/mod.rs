// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod state;

pub use options::{AppOptions, OutputOptions, PathOptions};
pub use state::{AppState, GuiState};
