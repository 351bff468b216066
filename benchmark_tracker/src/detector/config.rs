//!
//! The regression detector configuration.
//!

use crate::detector::direction::Direction;

///
/// The regression detector configuration.
///
/// The threshold has no default here: the caller chooses it.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The fractional regression threshold, e.g. `0.1` for 10%.
    regression_threshold: f64,
    /// The direction in which the suite's measurements improve.
    direction: Direction,
}

///
/// Invalid configuration error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The threshold is negative, infinite or NaN.
    #[error("Regression threshold `{0}` must be a finite non-negative ratio")]
    InvalidThreshold(f64),
}

impl Config {
    ///
    /// A validating constructor.
    ///
    pub fn new(regression_threshold: f64, direction: Direction) -> Result<Self, Error> {
        if !regression_threshold.is_finite() || regression_threshold < 0.0 {
            return Err(Error::InvalidThreshold(regression_threshold));
        }
        Ok(Self {
            regression_threshold,
            direction,
        })
    }

    pub fn regression_threshold(&self) -> f64 {
        self.regression_threshold
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}
