// src/gui/actions/analyze.rs
use crate::{gui::app::App, gui::progress::GuiProgress, runner};

pub fn analyze(app: &mut App) {
    app.sync_paths();
    let input = app.state.options.paths.course_data_file();
    logf!("Analyze: Begin input={}", input.display());

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the analysis happens ←
    match runner::analyze(&app.state.options, Some(&mut prog)) {
        Ok(a) => {
            logf!(
                "Analyze: OK loaded={} analyzed={} errors={} warnings={}",
                a.courses_loaded,
                a.table.len(),
                a.validation.error_count,
                a.validation.warning_count
            );
            let msg = format!(
                "Analyzed {} of {} courses ({} validation warnings)",
                a.table.len(),
                a.courses_loaded,
                a.validation.warning_count
            );
            app.table = Some(a.table);
            app.validation = Some(a.validation);
            app.rebuild_view();
            app.status(msg);
        }
        Err(e) => {
            loge!("Analyze: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
