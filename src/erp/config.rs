use std::path::PathBuf;
use crate::erp::plot::PlotStyle;
/// Samples kept before each event onset.
pub const PRE_EVENT_SAMPLES: usize = 200;
/// Samples kept after each event onset (the onset sample itself excluded).
pub const POST_EVENT_SAMPLES: usize = 1000;
/// Length of every extracted window, onset included.
pub const WINDOW_LEN: usize = PRE_EVENT_SAMPLES + POST_EVENT_SAMPLES + 1;
pub const FINGER_COUNT: usize = 5;
pub const DEFAULT_TRIALS_FILE: &str = "events_file_ordered.csv";
pub const DEFAULT_SIGNAL_FILE: &str = "brain_data_channel_one.csv";
pub const DEFAULT_PLOT_FILE: &str = "output_graph.png";
pub const DEFAULT_MATRIX_FILE: &str = "fingers_erp_mean_output.csv";
/// Where the averaging run writes its artifacts.
///
/// Set `plot_path` or `matrix_path` to `None` to skip that output, e.g. when
/// the matrix is only consumed in memory.
#[derive(Clone, Debug)]
pub struct ErpConfig {
    pub plot_path: Option<PathBuf>,
    pub matrix_path: Option<PathBuf>,
    pub plot_style: PlotStyle,
    /// Hand the saved plot to a viewer once written.
    pub open_viewer: bool,
}
impl Default for ErpConfig {
    fn default() -> Self {
        Self {
            plot_path: Some(PathBuf::from(DEFAULT_PLOT_FILE)),
            matrix_path: Some(PathBuf::from(DEFAULT_MATRIX_FILE)),
            plot_style: PlotStyle::default(),
            open_viewer: true,
        }
    }
}
impl ErpConfig {
    /// Configuration that computes the matrix without touching the filesystem.
    pub fn in_memory() -> Self {
        Self {
            plot_path: None,
            matrix_path: None,
            open_viewer: false,
            ..Self::default()
        }
    }
}
