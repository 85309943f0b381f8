//! Event-locked windowing and per-finger averaging.
//!
//! Every trial contributes the window `[start - 200, start + 1000]` of the
//! signal to the group of its finger. Windows that would leave the signal are
//! skipped and counted; they never abort the run.
use ndarray::{s, Array1, Array2, ArrayView1};
use crate::erp::config::{FINGER_COUNT, POST_EVENT_SAMPLES, PRE_EVENT_SAMPLES, WINDOW_LEN};
use crate::erp::trial::{Finger, Trial};
/// 5 x 1201 matrix of averaged waveforms, row `f - 1` for finger `f`.
#[derive(Clone, Debug, PartialEq)]
pub struct ErpMatrix {
    data: Array2<f64>,
}
impl ErpMatrix {
    pub fn zeros() -> Self {
        Self {
            data: Array2::zeros((FINGER_COUNT, WINDOW_LEN)),
        }
    }
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }
    pub fn row(&self, finger: Finger) -> ArrayView1<'_, f64> {
        self.data.row(finger.index())
    }
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
    /// Sample offsets relative to onset, -200..=1000, one per column.
    pub fn time_axis() -> Array1<f64> {
        Array1::linspace(
            -(PRE_EVENT_SAMPLES as f64),
            POST_EVENT_SAMPLES as f64,
            WINDOW_LEN,
        )
    }
}
/// Inclusive window bounds for an onset, or `None` when the window leaves the signal.
pub fn window_bounds(start: i64, signal_len: usize) -> Option<(usize, usize)> {
    let block_start = start.checked_sub(PRE_EVENT_SAMPLES as i64)?;
    let block_end = start.checked_add(POST_EVENT_SAMPLES as i64)?;
    if block_start < 0 || block_end >= signal_len as i64 {
        return None;
    }
    Some((block_start as usize, block_end as usize))
}
/// Windows collected per finger, borrowed from the signal.
pub struct FingerGroups<'a> {
    groups: [Vec<ArrayView1<'a, f64>>; FINGER_COUNT],
    skipped: usize,
}
impl<'a> FingerGroups<'a> {
    pub fn new() -> Self {
        Self {
            groups: Default::default(),
            skipped: 0,
        }
    }
    /// Adds the trial's window, or counts it as skipped when out of bounds.
    pub fn push(&mut self, trial: &Trial, signal: ArrayView1<'a, f64>) -> bool {
        match window_bounds(trial.start, signal.len()) {
            Some((lo, hi)) => {
                self.groups[trial.finger.index()].push(signal.slice_move(s![lo..=hi]));
                true
            }
            None => {
                self.skipped += 1;
                false
            }
        }
    }
    pub fn skipped(&self) -> usize {
        self.skipped
    }
    pub fn len(&self, finger: Finger) -> usize {
        self.groups[finger.index()].len()
    }
    /// Elementwise mean of each group; empty groups yield zeros.
    pub fn mean(&self) -> ErpMatrix {
        let mut matrix = ErpMatrix::zeros();
        for finger in Finger::all() {
            let windows = &self.groups[finger.index()];
            if windows.is_empty() {
                continue;
            }
            let mut sum = Array1::<f64>::zeros(WINDOW_LEN);
            for window in windows {
                sum += window;
            }
            sum /= windows.len() as f64;
            matrix.data.row_mut(finger.index()).assign(&sum);
        }
        matrix
    }
}
impl Default for FingerGroups<'_> {
    fn default() -> Self {
        Self::new()
    }
}
/// Outcome of one averaging pass.
#[derive(Clone, Debug)]
pub struct ErpAverage {
    pub matrix: ErpMatrix,
    pub skipped: usize,
    /// In-bounds trial count per finger, indexed like the matrix rows.
    pub group_sizes: [usize; FINGER_COUNT],
}
pub fn compute_mean_erp(trials: &[Trial], signal: &[f64]) -> ErpAverage {
    let signal = ArrayView1::from(signal);
    let mut groups = FingerGroups::new();
    for trial in trials {
        groups.push(trial, signal);
    }
    let mut group_sizes = [0usize; FINGER_COUNT];
    for finger in Finger::all() {
        group_sizes[finger.index()] = groups.len(finger);
        log::debug!("{}: {} windows", finger.label(), groups.len(finger));
    }
    ErpAverage {
        matrix: groups.mean(),
        skipped: groups.skipped(),
        group_sizes,
    }
}
