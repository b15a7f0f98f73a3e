use crate::db::log::audit_or_warn;
use crate::db::store::StudyStore;
use crate::errors::AppResult;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, RecordExport, ensure_writable};
use crate::models::User;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the signed-in user's session history, newest first.
    pub fn export<S: StudyStore + ?Sized>(
        store: &S,
        user: &User,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let rows: Vec<RecordExport> = store
            .list_records(user)?
            .iter()
            .map(RecordExport::from)
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        audit_or_warn(
            store,
            "export",
            &file.to_string_lossy(),
            &format!("Exported {} records as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
