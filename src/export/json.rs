use super::model::EventExport;
use std::fs::File;
use std::io::BufWriter;

/// Write the export rows as pretty-printed JSON to the given path.
pub fn write_json(path: &str, rows: &[EventExport]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rows)
        .map_err(|e| std::io::Error::other(format!("JSON export failed: {e}")))?;
    Ok(())
}
