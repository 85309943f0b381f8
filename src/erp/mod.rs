// src/erp/mod.rs
pub mod average;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod loader;
pub mod pipeline;
pub mod plot;
pub mod trial;
pub mod viewer;
pub use average::{compute_mean_erp, window_bounds, ErpAverage, ErpMatrix, FingerGroups};
pub use config::ErpConfig;
pub use error::ErpError;
pub use export::write_matrix_csv;
pub use input::{ErpInputs, SignalInput, TrialInput};
pub use loader::{read_signal_csv, read_trials_csv};
pub use pipeline::{calc_mean_erp, run};
pub use plot::{render_erp_png, save_erp_plot, PlotStyle};
pub use trial::{validate_trials, Finger, RawTrial, Trial, TrialValue};
pub use viewer::{NoViewer, SystemViewer, ViewerHook};
