// src/main.rs
use anyhow::{Context, Result};
use finger_erp::erp::config::{DEFAULT_SIGNAL_FILE, DEFAULT_TRIALS_FILE};
use finger_erp::{calc_mean_erp, ErpConfig, ErpInputs, SystemViewer};
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    let inputs = ErpInputs::from_files(DEFAULT_TRIALS_FILE, DEFAULT_SIGNAL_FILE);
    let matrix = calc_mean_erp(inputs, &ErpConfig::default(), &SystemViewer)
        .context("computing mean ERP")?;
    println!("Shape of the ERP matrix: {:?}", matrix.shape());
    println!("ERP matrix:\n{}", matrix.as_array());
    Ok(())
}
