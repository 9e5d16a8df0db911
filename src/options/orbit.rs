use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitalError;
use crate::orbit::{AngleLimit, RotationAxis, TouchProjection};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// How pointer drags turn into rotation about the pivot.
pub struct OrbitOptions {
    /// World axis the target orbits about.
    #[schemars(title = "Axis")]
    pub axis: RotationAxis,
    /// Which component of the drag delta drives rotation.
    #[schemars(title = "Touch Projection")]
    pub projection: TouchProjection,
    /// Degrees per second per unit of screen delta.
    #[schemars(title = "Speed", range(min = 0.0, max = 200.0), extend("step" = 0.5))]
    pub speed: f32,
    /// One-time position override applied when the controller is built.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_position: Option<[f32; 3]>,
    /// Inclusive clamp range for the accumulated angle. Absent means the
    /// angle wraps instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_limit: Option<AngleLimit>,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            axis: RotationAxis::Y,
            projection: TouchProjection::HorizontalDrag,
            speed: 20.0,
            starting_position: None,
            angle_limit: None,
        }
    }
}

impl OrbitOptions {
    /// Starting position as a vector, if one is configured.
    #[must_use]
    pub fn starting_position(&self) -> Option<Vec3> {
        self.starting_position.map(Vec3::from_array)
    }

    /// Reject values the controller cannot work with.
    ///
    /// Inverted angle limits pass (with a warning): their behavior is
    /// unspecified rather than invalid.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::InvalidOptions`] for a non-finite speed, limit bound
    /// or starting position component.
    pub fn validate(&self) -> Result<(), OrbitalError> {
        if !self.speed.is_finite() {
            return Err(OrbitalError::InvalidOptions(format!(
                "speed must be finite, got {}",
                self.speed
            )));
        }
        if let Some(limit) = self.angle_limit {
            limit.validate()?;
            if limit.is_inverted() {
                log::warn!(
                    "angle limit min {} exceeds max {}; clamping is \
                     unspecified",
                    limit.min,
                    limit.max
                );
            }
        }
        if let Some(start) = self.starting_position {
            if start.iter().any(|c| !c.is_finite()) {
                return Err(OrbitalError::InvalidOptions(format!(
                    "starting position must be finite, got {start:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(OrbitOptions::default().validate().is_ok());
    }

    #[test]
    fn nan_speed_is_rejected() {
        let opts = OrbitOptions {
            speed: f32::NAN,
            ..OrbitOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(OrbitalError::InvalidOptions(_))
        ));
    }

    #[test]
    fn infinite_starting_position_is_rejected() {
        let opts = OrbitOptions {
            starting_position: Some([0.0, f32::INFINITY, 0.0]),
            ..OrbitOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn inverted_limit_still_validates() {
        let opts = OrbitOptions {
            angle_limit: Some(AngleLimit { min: 10.0, max: -10.0 }),
            ..OrbitOptions::default()
        };
        assert!(opts.validate().is_ok());
    }
}
