// src/gui/components/action_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Paths ---
    ui.horizontal(|ui| {
        ui.label("Input:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.input_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            logd!("UI: input → {}", app.input_text);
        }

        ui.label("Extension folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.extension_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(200.0))
            .changed()
        {
            logd!("UI: extension folder → {}", app.extension_text);
        }
    });

    // --- Actions: Analyze / Export / Copy JSON ---
    ui.horizontal(|ui| {
        if ui.button("Analyze").clicked() {
            actions::analyze(app);
        }

        let has_data = app.table.is_some();
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui
            .add_enabled(has_data, egui::Button::new("Copy JSON"))
            .on_hover_text("Copy the visible rows as JSON")
            .clicked()
        {
            actions::copy(app, ui.ctx());
        }

        ui.separator();

        ui.label("Search:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.search)
                .hint_text("course, name or English name")
                .desired_width(220.0))
            .changed()
        {
            app.rebuild_view();
        }

        ui.separator();
        ui.label(app.status_text());
    });

    if let Some(v) = &app.validation {
        if !v.passed {
            ui.colored_label(
                egui::Color32::from_rgb(0xDC, 0x61, 0x49),
                format!("Validation: {} errors, {} warnings (see log)", v.error_count, v.warning_count),
            );
        }
    }
}
