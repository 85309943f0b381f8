//! Headerless delimited-text readers for the event table and the signal column.
use std::path::Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use crate::erp::error::ErpError;
use crate::erp::trial::{RawTrial, TrialValue};
const TRIAL_FIELDS: [&str; 3] = ["start", "peak", "finger"];
fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, ErpError> {
    if !path.exists() {
        return Err(ErpError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?)
}
/// A line with nothing but whitespace. Rows with delimiters are never blank.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}
/// 1-based file line of a record, or `fallback` when the reader has no position.
fn line_of(record: &StringRecord, fallback: usize) -> usize {
    record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(fallback)
}
fn parse_trial_cell(cell: &str) -> Option<TrialValue> {
    if let Ok(v) = cell.parse::<i64>() {
        return Some(TrialValue::Int(v));
    }
    cell.parse::<f64>().ok().map(TrialValue::Real)
}
/// Reads `start, peak, finger` rows. Extra columns are ignored.
pub fn read_trials_csv(path: &Path) -> Result<Vec<RawTrial>, ErpError> {
    let mut reader = open_reader(path)?;
    let mut trials = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let row = line_of(&record, trials.len() + 1);
        let mut values = [TrialValue::Int(0); 3];
        for (slot, (idx, field)) in values.iter_mut().zip(TRIAL_FIELDS.into_iter().enumerate()) {
            let cell = record.get(idx).unwrap_or("");
            *slot = parse_trial_cell(cell).ok_or_else(|| ErpError::InvalidTrialData {
                row,
                field,
                value: cell.to_owned(),
            })?;
        }
        trials.push(RawTrial::new(values[0], values[1], values[2]));
    }
    log::debug!("read {} trial rows from {}", trials.len(), path.display());
    Ok(trials)
}
/// Reads the first column of a possibly multi-column table as signal samples.
pub fn read_signal_csv(path: &Path) -> Result<Vec<f64>, ErpError> {
    let mut reader = open_reader(path)?;
    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        let cell = record.get(0).unwrap_or("");
        let value = cell
            .parse::<f64>()
            .map_err(|_| ErpError::InvalidSignalData {
                row: line_of(&record, samples.len() + 1),
                value: cell.to_owned(),
            })?;
        samples.push(value);
    }
    log::debug!("read {} signal samples from {}", samples.len(), path.display());
    Ok(samples)
}
