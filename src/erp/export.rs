use std::path::Path;
use csv::WriterBuilder;
use crate::erp::average::ErpMatrix;
use crate::erp::error::ErpError;
/// Writes one line per finger, no header and no index column.
pub fn write_matrix_csv(matrix: &ErpMatrix, path: &Path) -> Result<(), ErpError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    for row in matrix.as_array().rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
