//! Threshold normalization for support and confidence parameters.
//!
//! Analysts specify thresholds either as a fraction in [0, 1] or as a
//! percentage string such as `"20%"`. Both forms normalize to the same
//! [`Threshold`], so `(0.2, 0.5)` and `("20%", "50%")` configure identical
//! miners.

use crate::error::{ReglasError, Result};
use std::str::FromStr;

/// A support or confidence threshold normalized to a fraction in [0, 1].
///
/// # Examples
///
/// ```
/// use reglas::threshold::Threshold;
///
/// let from_fraction = Threshold::new(0.2).unwrap();
/// let from_percent: Threshold = "20%".parse().unwrap();
/// assert_eq!(from_fraction, from_percent);
/// assert_eq!(from_fraction.value(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Creates a threshold from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ReglasError::InvalidThreshold`] if the value is not finite
    /// or falls outside [0, 1].
    pub fn new(fraction: f64) -> Result<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ReglasError::invalid_threshold(fraction, "within [0, 1]"));
        }
        Ok(Self(fraction))
    }

    /// Returns the normalized fraction.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Threshold {
    type Err = ReglasError;

    /// Parses `"20%"` as 0.2 and a bare numeric string as a fraction.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let fraction = match trimmed.strip_suffix('%') {
            Some(percent) => {
                let parsed: f64 = percent
                    .trim()
                    .parse()
                    .map_err(|_| ReglasError::invalid_threshold(s, "a percentage like \"20%\""))?;
                parsed / 100.0
            }
            None => trimmed
                .parse()
                .map_err(|_| ReglasError::invalid_threshold(s, "a fraction or percentage"))?,
        };
        Self::new(fraction)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ReglasError;

    fn try_from(fraction: f64) -> Result<Self> {
        Self::new(fraction)
    }
}

impl TryFrom<&str> for Threshold {
    type Error = ReglasError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Threshold {
    type Error = ReglasError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
