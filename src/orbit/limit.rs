//! Angle bookkeeping: clamping to an optional range, or single-step
//! wraparound when no range is configured.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitalError;

/// One full turn, in degrees.
pub const FULL_TURN: f32 = 360.0;

/// Inclusive range the accumulated angle is clamped to, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Angle Limit", inline)]
pub struct AngleLimit {
    /// Lowest reachable accumulated angle.
    #[schemars(title = "Min", extend("step" = 1.0))]
    pub min: f32,
    /// Highest reachable accumulated angle.
    #[schemars(title = "Max", extend("step" = 1.0))]
    pub max: f32,
}

impl AngleLimit {
    /// Build a limit, rejecting NaN and infinite bounds.
    ///
    /// Inverted bounds (`min > max`) are accepted; clamping against them
    /// is unspecified.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::InvalidOptions`] if either bound is not finite.
    pub fn new(min: f32, max: f32) -> Result<Self, OrbitalError> {
        let limit = Self { min, max };
        limit.validate()?;
        Ok(limit)
    }

    /// Check both bounds are finite.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::InvalidOptions`] naming the offending bound.
    pub fn validate(self) -> Result<(), OrbitalError> {
        if !self.min.is_finite() {
            return Err(OrbitalError::InvalidOptions(format!(
                "angle limit min must be finite, got {}",
                self.min
            )));
        }
        if !self.max.is_finite() {
            return Err(OrbitalError::InvalidOptions(format!(
                "angle limit max must be finite, got {}",
                self.max
            )));
        }
        Ok(())
    }

    /// Whether `min > max`.
    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.min > self.max
    }

    /// Whether `angle` lies within `[min, max]`.
    #[must_use]
    pub fn contains(self, angle: f32) -> bool {
        (self.min..=self.max).contains(&angle)
    }
}

/// Outcome of resolving one raw increment against the current angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Accumulated angle the increment is added to. Differs from the
    /// incoming angle only after a wraparound.
    pub angle_before: f32,
    /// Increment to apply, in degrees. Differs from the raw increment only
    /// after clamping.
    pub increment: f32,
    /// Accumulated angle once the increment is applied. Exactly the bound
    /// after clamping, even where `angle_before + increment` rounds past it.
    pub angle_after: f32,
}

/// Resolve a raw increment against the current angle and optional limit.
///
/// With a limit, an increment overshooting either bound is shortened to
/// land on it and the resulting angle is pinned to the bound. The two
/// bounds are tested independently, so an inverted limit can trigger both,
/// and the lower bound then wins.
///
/// Without a limit, an increment that would carry the angle past ±360
/// shifts the *current* angle by one full turn in the opposite direction.
/// The increment itself is left alone and the shift is applied at most
/// once, even when the increment alone exceeds a full turn.
#[must_use]
pub fn resolve_increment(
    current: f32,
    increment: f32,
    limit: Option<AngleLimit>,
) -> Resolution {
    let projected = current + increment;

    match limit {
        Some(limit) => {
            let mut increment = increment;
            let mut angle_after = projected;
            if projected > limit.max {
                increment = limit.max - current;
                angle_after = limit.max;
            }
            if projected < limit.min {
                increment = limit.min - current;
                angle_after = limit.min;
            }
            Resolution {
                angle_before: current,
                increment,
                angle_after,
            }
        }
        None => {
            let mut angle_before = current;
            if projected > FULL_TURN {
                angle_before -= FULL_TURN;
            }
            if projected < -FULL_TURN {
                angle_before += FULL_TURN;
            }
            Resolution {
                angle_before,
                increment,
                angle_after: angle_before + increment,
            }
        }
    }
}
