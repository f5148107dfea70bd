//! Threshold model — three ordered percentages with a minimum gap.
//!
//! **Core Rule:** `red_end + MIN_GAP <= amber_end` and
//! `amber_end + MIN_GAP <= green_end`, all within `0..=100`, after every
//! mutation.
//!
//! Moving one threshold never pushes its neighbours. The moved value is
//! clamped into the window its neighbours leave open, so the other two
//! entries are always untouched.

use thiserror::Error;

/// Minimum separation between adjacent thresholds, in percent.
pub const MIN_GAP: u8 = 2;

/// Upper end of the percentage scale.
pub const MAX_PERCENT: u8 = 100;

/// Values used when nothing else is configured.
pub const DEFAULT_THRESHOLDS: [u8; 3] = [30, 60, 85];

/// Which of the three thresholds an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Threshold {
    RedEnd,
    AmberEnd,
    GreenEnd,
}

impl Threshold {
    pub const ALL: [Threshold; 3] = [Threshold::RedEnd, Threshold::AmberEnd, Threshold::GreenEnd];

    pub fn index(self) -> usize {
        match self {
            Threshold::RedEnd => 0,
            Threshold::AmberEnd => 1,
            Threshold::GreenEnd => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Threshold::RedEnd),
            1 => Some(Threshold::AmberEnd),
            2 => Some(Threshold::GreenEnd),
            _ => None,
        }
    }

    /// Neighbour on the low side, if any.
    pub fn lower(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Neighbour on the high side, if any.
    pub fn upper(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Threshold::RedEnd => "Red",
            Threshold::AmberEnd => "Amber",
            Threshold::GreenEnd => "Green",
        }
    }
}

/// Errors from building a [`ThresholdSet`] out of untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("{threshold:?} = {value} exceeds 100")]
    OutOfRange { threshold: Threshold, value: u8 },
    #[error("{upper:?} = {upper_value} must be at least 2 above {lower:?} = {lower_value}")]
    GapTooSmall {
        lower: Threshold,
        lower_value: u8,
        upper: Threshold,
        upper_value: u8,
    },
}

/// The three ordered threshold percentages.
///
/// Fields are private: the only ways to change a value are
/// [`ThresholdSet::new`] (validated) and [`ThresholdSet::apply`] (clamped),
/// so a live set always satisfies the ordering invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdSet {
    values: [u8; 3],
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            values: DEFAULT_THRESHOLDS,
        }
    }
}

impl ThresholdSet {
    /// Validate and build a set.
    pub fn new(red_end: u8, amber_end: u8, green_end: u8) -> Result<Self, ThresholdError> {
        let values = [red_end, amber_end, green_end];

        for t in Threshold::ALL {
            let value = values[t.index()];
            if value > MAX_PERCENT {
                return Err(ThresholdError::OutOfRange {
                    threshold: t,
                    value,
                });
            }
        }

        for (lower, upper) in [
            (Threshold::RedEnd, Threshold::AmberEnd),
            (Threshold::AmberEnd, Threshold::GreenEnd),
        ] {
            let lower_value = values[lower.index()];
            let upper_value = values[upper.index()];
            if u16::from(lower_value) + u16::from(MIN_GAP) > u16::from(upper_value) {
                return Err(ThresholdError::GapTooSmall {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, threshold: Threshold) -> u8 {
        self.values[threshold.index()]
    }

    pub fn red_end(&self) -> u8 {
        self.values[0]
    }

    pub fn amber_end(&self) -> u8 {
        self.values[1]
    }

    pub fn green_end(&self) -> u8 {
        self.values[2]
    }

    pub fn as_array(&self) -> [u8; 3] {
        self.values
    }

    /// Whether the ordering/gap invariant currently holds.
    pub fn is_valid(&self) -> bool {
        let [r, a, g] = self.values.map(u16::from);
        let gap = u16::from(MIN_GAP);
        r + gap <= a && a + gap <= g && g <= u16::from(MAX_PERCENT)
    }

    /// The closed range `threshold` may take while its neighbours stay put.
    pub fn window(&self, threshold: Threshold) -> (u8, u8) {
        let lo = threshold.lower().map_or(0, |t| self.get(t) + MIN_GAP);
        let hi = threshold
            .upper()
            .map_or(MAX_PERCENT, |t| self.get(t).saturating_sub(MIN_GAP));
        (lo, hi)
    }

    /// Whether `threshold` has any room to move. A handle pinned between a
    /// neighbour and the end of the scale does not.
    pub fn can_move(&self, threshold: Threshold) -> bool {
        let (lo, hi) = self.window(threshold);
        lo < hi
    }

    /// Compute the legal value for `threshold` from a raw percentage and
    /// store it. Returns the stored value.
    pub fn apply(&mut self, threshold: Threshold, raw_percent: f64) -> u8 {
        let value = compute_value(threshold, raw_percent, self);
        self.values[threshold.index()] = value;
        debug_assert!(self.is_valid(), "threshold invariant broken: {:?}", self.values);
        value
    }
}

/// Compute a legal new value for one threshold.
///
/// # Rules
/// 1. Clamp `raw_percent` to `[0, 100]` (NaN counts as 0)
/// 2. Lower-bound at the lower neighbour + [`MIN_GAP`]
/// 3. Upper-bound at the upper neighbour - [`MIN_GAP`]
/// 4. Round to the nearest integer
///
/// Total over every `f64`. Assumes the two untouched entries already
/// satisfy the invariant, which holds for any live [`ThresholdSet`].
///
/// # Example
/// ```
/// use ragbar_core::thresholds::{compute_value, Threshold, ThresholdSet};
///
/// let current = ThresholdSet::default(); // [30, 60, 85]
///
/// // Amber cannot come closer than 2 to Red...
/// assert_eq!(compute_value(Threshold::AmberEnd, 29.0, &current), 32);
/// // ...or to Green.
/// assert_eq!(compute_value(Threshold::AmberEnd, 84.0, &current), 83);
/// ```
pub fn compute_value(threshold: Threshold, raw_percent: f64, current: &ThresholdSet) -> u8 {
    let raw = if raw_percent.is_nan() { 0.0 } else { raw_percent };
    let (lo, hi) = current.window(threshold);
    let percent = raw
        .clamp(0.0, f64::from(MAX_PERCENT))
        .max(f64::from(lo))
        .min(f64::from(hi));

    // Bounds are whole numbers, so rounding cannot leave the window.
    percent.round() as u8
}
