// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{Column, MetricsTable},
    config::state::AppState,
    log, store,
    validate::ValidationSummary,
};

use super::table_model;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "DTU Course Analyzer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // path fields; mapped into state.options before each action
    pub input_text: String,
    pub extension_text: String,

    // analyzed data and the rows currently shown
    pub table: Option<MetricsTable>,
    pub validation: Option<ValidationSummary>,
    pub row_ix: Vec<String>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        log::init(state.options.log_level, state.options.paths.log_file(), false);

        let input_text = state.options.paths.course_data_file().to_string_lossy().into_owned();
        let extension_text = state.options.output.extension_dir.to_string_lossy().into_owned();

        // Last analyzed dump, if any
        let json_out = &state.options.output.json_out;
        let (table, status) = match store::load_metrics(json_out) {
            Ok(t) => {
                logf!("Cache: Loaded {} courses from {}", t.len(), json_out.display());
                let msg = format!("Loaded {} analyzed courses from {}", t.len(), json_out.display());
                (Some(t), msg)
            }
            Err(e) => {
                logd!("Cache: No analyzed data ({})", e);
                (None, s!("Idle"))
            }
        };

        let mut app = Self {
            state,
            input_text,
            extension_text,
            table,
            validation: None,
            row_ix: Vec::new(),
            status: Arc::new(Mutex::new(status)),
        };
        app.rebuild_view();
        app
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Mirror the path fields into the options.
    pub fn sync_paths(&mut self) {
        let input = self.input_text.trim();
        self.state.options.paths.input = (!input.is_empty()).then(|| PathBuf::from(input));

        let ext = self.extension_text.trim();
        if !ext.is_empty() {
            self.state.options.output.extension_dir = PathBuf::from(ext);
        }
    }

    /// Recompute the visible rows from search text and sort column.
    pub fn rebuild_view(&mut self) {
        let gui = &self.state.gui;
        self.row_ix = match &self.table {
            Some(t) => table_model::row_order(t, &gui.search, gui.sort_by, gui.sort_desc),
            None => Vec::new(),
        };
    }

    /// Header click: a new column sorts descending, the same column flips,
    /// None returns to course-number order.
    pub fn toggle_sort(&mut self, col: Option<Column>) {
        let gui = &mut self.state.gui;
        match col {
            Some(c) if gui.sort_by == Some(c) => gui.sort_desc = !gui.sort_desc,
            Some(c) => {
                gui.sort_by = Some(c);
                gui.sort_desc = true;
            }
            None => gui.sort_by = None,
        }
        logd!("UI: sort → {:?} desc={}", gui.sort_by, gui.sort_desc);
        self.rebuild_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            crate::gui::components::action_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
