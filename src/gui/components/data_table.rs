// src/gui/components/data_table.rs
//
// Draws the course table. Purely a view; header clicks are handed back to
// App once the table is done borrowing it.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::analysis::Column;
use crate::config::consts::COURSE_BASE_URL;
use crate::gui::{app::App, table_model};

enum HeaderClick {
    Course,
    Col(Column),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label("No analyzed data yet. Click Analyze.");
        });
        return;
    };

    let sort_by = app.state.gui.sort_by;
    let desc = app.state.gui.sort_desc;
    let arrow = |active: bool| match (active, desc) {
        (false, _) => "",
        (true, true) => " ⏷",
        (true, false) => " ⏶",
    };

    let mut clicked: Option<HeaderClick> = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .column(TableColumn::initial(70.0).at_least(50.0));
    for col in Column::ALL {
        let w = if col.is_text() { 220.0 } else { 90.0 };
        builder = builder.column(TableColumn::initial(w).at_least(40.0).clip(true));
    }

    builder
        .header(24.0, |mut header| {
            header.col(|ui| {
                let text = format!("Course{}", arrow(sort_by.is_none()));
                let resp = ui.add(egui::Label::new(RichText::new(text).strong()).sense(Sense::click()).selectable(false));
                if resp.clicked() {
                    clicked = Some(HeaderClick::Course);
                }
            });
            for col in Column::ALL {
                header.col(|ui| {
                    let text = format!("{}{}", col.title(), arrow(sort_by == Some(col)));
                    let resp = ui
                        .add(egui::Label::new(RichText::new(text).strong()).sense(Sense::click()).selectable(false))
                        .on_hover_text(col.key());
                    if resp.clicked() {
                        clicked = Some(HeaderClick::Col(col));
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.row_ix.len(), |mut row| {
                let Some(id) = app.row_ix.get(row.index()) else { return };
                let Some(m) = table.get(id) else { return };

                row.col(|ui| {
                    ui.hyperlink_to(id.as_str(), format!("{COURSE_BASE_URL}{id}"));
                });
                for col in Column::ALL {
                    row.col(|ui| {
                        ui.label(table_model::cell_text(m, col));
                    });
                }
            });
        });

    match clicked {
        Some(HeaderClick::Course) => app.toggle_sort(None),
        Some(HeaderClick::Col(col)) => app.toggle_sort(Some(col)),
        None => {}
    }
}
