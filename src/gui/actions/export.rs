// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    app.sync_paths();

    let status_msg = match app.table.as_ref() {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(table) => {
            let out = &app.state.options.output;
            logf!("Export: Begin courses={} folder={}", table.len(), out.extension_dir.display());
            match file::write_extension(table, out) {
                Ok(written) => {
                    logf!("Export: OK count={}", written.len());
                    format!("Exported {} files to {}", written.len(), out.extension_dir.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the table borrow is gone
    app.status(status_msg);
}
