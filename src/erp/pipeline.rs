use crate::erp::average::{compute_mean_erp, ErpAverage, ErpMatrix};
use crate::erp::config::ErpConfig;
use crate::erp::error::ErpError;
use crate::erp::export::write_matrix_csv;
use crate::erp::input::ErpInputs;
use crate::erp::plot::save_erp_plot;
use crate::erp::trial::validate_trials;
use crate::erp::viewer::ViewerHook;
/// Full averaging run: load, validate, average, then write the plot and the matrix.
///
/// Input errors abort before any output is written. Out-of-bounds trials are
/// only counted and reported.
pub fn calc_mean_erp(
    inputs: ErpInputs,
    config: &ErpConfig,
    viewer: &dyn ViewerHook,
) -> Result<ErpMatrix, ErpError> {
    Ok(run(inputs, config, viewer)?.matrix)
}
/// Same as [`calc_mean_erp`] but keeps the skip count and group sizes.
pub fn run(
    inputs: ErpInputs,
    config: &ErpConfig,
    viewer: &dyn ViewerHook,
) -> Result<ErpAverage, ErpError> {
    let (raw_trials, signal) = inputs.resolve()?;
    let trials = validate_trials(&raw_trials)?;
    log::info!(
        "averaging {} trials over {} signal samples",
        trials.len(),
        signal.len()
    );
    let average = compute_mean_erp(&trials, &signal);
    if average.skipped > 0 {
        println!(
            "Skipped {} trials due to out-of-bounds time windows.",
            average.skipped
        );
    }
    if let Some(path) = &config.plot_path {
        save_erp_plot(&average.matrix, &config.plot_style, path)?;
        println!("Graph saved as '{}'", path.display());
        if config.open_viewer {
            if let Err(err) = viewer.open(path) {
                log::warn!("could not open {}: {err}", path.display());
            }
        }
    }
    if let Some(path) = &config.matrix_path {
        write_matrix_csv(&average.matrix, path)?;
        println!("ERP matrix saved to {}", path.display());
    }
    Ok(average)
}
