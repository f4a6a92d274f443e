use super::model::EventExport;
use csv::Writer;

/// Write the export rows as CSV to the given path.
pub fn write_csv(path: &str, rows: &[EventExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
