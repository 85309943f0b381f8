//! Per-finger event-related potential averaging for single-channel ECoG.
//!
//! ```no_run
//! use finger_erp::{calc_mean_erp, ErpConfig, ErpInputs, SystemViewer};
//!
//! let inputs = ErpInputs::from_files("events_file_ordered.csv", "brain_data_channel_one.csv");
//! let matrix = calc_mean_erp(inputs, &ErpConfig::default(), &SystemViewer).unwrap();
//! assert_eq!(matrix.shape(), (5, 1201));
//! ```
pub mod erp;
pub use erp::*;
