use crate::error::{AuditError, Result};
use crate::types::record::{ResultSet, COLUMNS};
use csv::WriterBuilder;

/// Comma-separated export with a header row, even when there are no records.
pub fn to_csv(results: &ResultSet) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for record in results {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AuditError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AuditError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
