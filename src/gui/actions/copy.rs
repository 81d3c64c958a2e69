// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::{app::App, table_model};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.table.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };
    if app.row_ix.is_empty() {
        app.status("Nothing to copy (no matching rows)");
        return;
    }

    let visible = table_model::subset(table, &app.row_ix);
    match serde_json::to_string_pretty(&visible) {
        Ok(txt) => {
            logf!("Copy: rows={}", visible.len());
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} courses to clipboard", visible.len()));
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
