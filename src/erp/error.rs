use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ErpError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("invalid trial data at row {row}: field `{field}` is not an integer: {value:?}")]
    InvalidTrialData {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("invalid finger label at row {row}: {finger} (expected 1..=5)")]
    InvalidFinger { row: usize, finger: i64 },
    #[error("invalid signal sample at row {row}: {value:?}")]
    InvalidSignalData { row: usize, value: String },
    #[error("missing input: provide either {what} data or a path to a {what} file")]
    MissingInput { what: &'static str },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
// Drawing and encoding failures both surface as `Plot`.
impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for ErpError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Plot(format!("drawing: {err}"))
    }
}
impl From<image::ImageError> for ErpError {
    fn from(err: image::ImageError) -> Self {
        Self::Plot(format!("png encoding: {err}"))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn messages_name_the_offending_input() {
        let err = ErpError::FileNotFound {
            path: PathBuf::from("events_file_ordered.csv"),
        };
        assert!(err.to_string().contains("events_file_ordered.csv"));
        let err = ErpError::InvalidTrialData {
            row: 3,
            field: "peak",
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("peak"));
        let err = ErpError::MissingInput { what: "signal" };
        assert!(err.to_string().contains("signal"));
    }
}
