use std::path::{Path, PathBuf};
use crate::erp::error::ErpError;
use crate::erp::loader::{read_signal_csv, read_trials_csv};
use crate::erp::trial::RawTrial;
/// Where the event table comes from.
#[derive(Clone, Debug)]
pub enum TrialInput {
    Records(Vec<RawTrial>),
    File(PathBuf),
}
/// Where the signal samples come from.
#[derive(Clone, Debug)]
pub enum SignalInput {
    Samples(Vec<f64>),
    File(PathBuf),
}
/// Both inputs of an averaging run; either may still be missing.
#[derive(Clone, Debug, Default)]
pub struct ErpInputs {
    pub trials: Option<TrialInput>,
    pub signal: Option<SignalInput>,
}
impl ErpInputs {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_files(trials: impl Into<PathBuf>, signal: impl Into<PathBuf>) -> Self {
        Self {
            trials: Some(TrialInput::File(trials.into())),
            signal: Some(SignalInput::File(signal.into())),
        }
    }
    pub fn from_memory(trials: Vec<RawTrial>, signal: Vec<f64>) -> Self {
        Self {
            trials: Some(TrialInput::Records(trials)),
            signal: Some(SignalInput::Samples(signal)),
        }
    }
    pub fn with_trials(mut self, trials: TrialInput) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn with_signal(mut self, signal: SignalInput) -> Self {
        self.signal = Some(signal);
        self
    }
    /// Loads whatever is file-backed.
    ///
    /// Presence of both inputs is checked before any file is touched, and
    /// every referenced path is checked for existence before parsing starts.
    pub fn resolve(self) -> Result<(Vec<RawTrial>, Vec<f64>), ErpError> {
        let trials = self.trials.ok_or(ErpError::MissingInput { what: "trial" })?;
        let signal = self.signal.ok_or(ErpError::MissingInput { what: "signal" })?;
        if let TrialInput::File(path) = &trials {
            ensure_exists(path)?;
        }
        if let SignalInput::File(path) = &signal {
            ensure_exists(path)?;
        }
        let trials = match trials {
            TrialInput::Records(records) => records,
            TrialInput::File(path) => {
                log::info!("loading trials from {}", path.display());
                read_trials_csv(&path)?
            }
        };
        let signal = match signal {
            SignalInput::Samples(samples) => samples,
            SignalInput::File(path) => {
                log::info!("loading signal from {}", path.display());
                read_signal_csv(&path)?
            }
        };
        Ok((trials, signal))
    }
}
fn ensure_exists(path: &Path) -> Result<(), ErpError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ErpError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
