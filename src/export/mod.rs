mod csv;
mod json;
mod model;

pub use model::EventExport;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write the rows in the requested format, refusing to clobber an
/// existing file unless `force` is set.
pub fn write(format: &ExportFormat, path: &str, rows: &[EventExport], force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "{path} already exists (use --force to overwrite)"
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, rows)?,
        ExportFormat::Json => json::write_json(path, rows)?,
    }

    success(format!(
        "{} export completed: {path} ({} rows)",
        format.as_str().to_uppercase(),
        rows.len()
    ));
    Ok(())
}
