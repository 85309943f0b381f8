use std::fmt;
use crate::erp::config::FINGER_COUNT;
use crate::erp::error::ErpError;
/// A single table cell before integer coercion.
///
/// Integer text stays exact; anything else goes through `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrialValue {
    Int(i64),
    Real(f64),
}
impl From<i64> for TrialValue {
    fn from(v: i64) -> Self {
        TrialValue::Int(v)
    }
}
impl From<i32> for TrialValue {
    fn from(v: i32) -> Self {
        TrialValue::Int(v.into())
    }
}
impl From<f64> for TrialValue {
    fn from(v: f64) -> Self {
        TrialValue::Real(v)
    }
}
impl fmt::Display for TrialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrialValue::Int(v) => write!(f, "{v}"),
            TrialValue::Real(v) => write!(f, "{v}"),
        }
    }
}
/// One untyped row of the event table, as read from a table or handed in by a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawTrial {
    pub start: TrialValue,
    pub peak: TrialValue,
    pub finger: TrialValue,
}
impl RawTrial {
    pub fn new(
        start: impl Into<TrialValue>,
        peak: impl Into<TrialValue>,
        finger: impl Into<TrialValue>,
    ) -> Self {
        Self {
            start: start.into(),
            peak: peak.into(),
            finger: finger.into(),
        }
    }
}
/// Finger label, always within `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Finger(u8);
impl Finger {
    pub fn new(label: i64) -> Option<Self> {
        if (1..=FINGER_COUNT as i64).contains(&label) {
            Some(Self(label as u8))
        } else {
            None
        }
    }
    pub fn all() -> impl Iterator<Item = Finger> {
        (1..=FINGER_COUNT as u8).map(Finger)
    }
    pub fn number(self) -> u8 {
        self.0
    }
    /// Zero-based row of this finger in the result matrix.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
    pub fn label(self) -> String {
        format!("Finger {}", self.0)
    }
}
impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
/// Validated trial. `peak` is carried along but never used for windowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trial {
    pub start: i64,
    pub peak: i64,
    pub finger: Finger,
}
/// Converts raw rows into typed trials, stopping at the first bad row.
///
/// Rows are numbered from 1 in errors.
pub fn validate_trials(raw: &[RawTrial]) -> Result<Vec<Trial>, ErpError> {
    raw.iter()
        .enumerate()
        .map(|(idx, r)| validate_trial(idx + 1, r))
        .collect()
}
fn validate_trial(row: usize, raw: &RawTrial) -> Result<Trial, ErpError> {
    let start = to_integer(row, "start", raw.start)?;
    let peak = to_integer(row, "peak", raw.peak)?;
    let finger_label = to_integer(row, "finger", raw.finger)?;
    let finger = Finger::new(finger_label).ok_or(ErpError::InvalidFinger {
        row,
        finger: finger_label,
    })?;
    Ok(Trial {
        start,
        peak,
        finger,
    })
}
fn to_integer(row: usize, field: &'static str, value: TrialValue) -> Result<i64, ErpError> {
    let real = match value {
        TrialValue::Int(v) => return Ok(v),
        TrialValue::Real(v) => v,
    };
    // i64::MAX as f64 rounds up, so the upper bound is exclusive.
    let in_range = real >= i64::MIN as f64 && real < i64::MAX as f64;
    if real.is_finite() && real.fract() == 0.0 && in_range {
        Ok(real as i64)
    } else {
        Err(ErpError::InvalidTrialData {
            row,
            field,
            value: value.to_string(),
        })
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn integral_floats_are_accepted() {
        let trials = validate_trials(&[RawTrial::new(500.0, 550.0, 3.0)]).unwrap();
        assert_eq!(trials.len(), 1);
        assert_eq!(trials[0].start, 500);
        assert_eq!(trials[0].peak, 550);
        assert_eq!(trials[0].finger.number(), 3);
        assert_eq!(trials[0].finger.index(), 2);
    }
    #[test]
    fn fractional_or_missing_values_are_rejected() {
        let err = validate_trials(&[
            RawTrial::new(500.0, 550.0, 1.0),
            RawTrial::new(500.5, 550.0, 1.0),
        ])
        .unwrap_err();
        match err {
            ErpError::InvalidTrialData { row, field, .. } => {
                assert_eq!(row, 2);
                assert_eq!(field, "start");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let err = validate_trials(&[RawTrial::new(1.0, f64::NAN, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ErpError::InvalidTrialData { field: "peak", .. }
        ));
        let err = validate_trials(&[RawTrial::new(1.0, 2.0, f64::INFINITY)]).unwrap_err();
        assert!(matches!(
            err,
            ErpError::InvalidTrialData { field: "finger", .. }
        ));
    }
    #[test]
    fn integer_cells_keep_full_precision() {
        // 2^53 + 1 has no exact f64 representation.
        let big = 9_007_199_254_740_993_i64;
        let trials = validate_trials(&[RawTrial::new(big, big, 2)]).unwrap();
        assert_eq!(trials[0].start, big);
        assert_eq!(trials[0].peak, big);
    }
    #[test]
    fn finger_outside_range_is_rejected() {
        for bad in [0.0, 6.0, -1.0] {
            let err = validate_trials(&[RawTrial::new(500.0, 550.0, bad)]).unwrap_err();
            assert!(matches!(err, ErpError::InvalidFinger { row: 1, .. }));
        }
    }
    #[test]
    fn negative_start_is_still_a_valid_trial() {
        let trials = validate_trials(&[RawTrial::new(-10.0, 0.0, 5.0)]).unwrap();
        assert_eq!(trials[0].start, -10);
    }
    #[test]
    fn fingers_enumerate_in_label_order() {
        let labels: Vec<String> = Finger::all().map(Finger::label).collect();
        assert_eq!(
            labels,
            ["Finger 1", "Finger 2", "Finger 3", "Finger 4", "Finger 5"]
        );
    }
}
