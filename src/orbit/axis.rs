//! Axis selection: which world axis the target orbits about, and which
//! component of the pointer delta drives it.

use std::fmt;

use glam::{Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// World axis the target orbits about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationAxis {
    /// World X.
    X,
    /// World Y (default).
    #[default]
    Y,
    /// World Z.
    Z,
}

impl RotationAxis {
    /// Unit vector the rotation is applied about.
    ///
    /// This is the *negative* world axis: a positive increment turns the
    /// target opposite to a right-handed rotation about the positive axis.
    #[must_use]
    pub fn rotation_vector(self) -> Vec3 {
        match self {
            Self::X => Vec3::NEG_X,
            Self::Y => Vec3::NEG_Y,
            Self::Z => Vec3::NEG_Z,
        }
    }

    /// Parse a user-facing name, falling back to [`RotationAxis::Y`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "x" | "right" => Self::X,
            "y" | "up" => Self::Y,
            "z" | "forward" => Self::Z,
            other => {
                log::warn!("unknown rotation axis '{other}', using y");
                Self::default()
            }
        }
    }
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

impl<'de> Deserialize<'de> for RotationAxis {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Which component of the 2D screen delta drives the rotation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchProjection {
    /// Horizontal finger movement (`delta.x`). Default.
    #[default]
    HorizontalDrag,
    /// Vertical finger movement (`delta.y`).
    VerticalDrag,
}

impl TouchProjection {
    /// Pick the driving component out of a screen-space delta.
    #[must_use]
    pub fn project(self, screen_delta: Vec2) -> f32 {
        match self {
            Self::HorizontalDrag => screen_delta.x,
            Self::VerticalDrag => screen_delta.y,
        }
    }

    /// Parse a user-facing name, falling back to
    /// [`TouchProjection::HorizontalDrag`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let normalized = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "horizontaldrag" | "horizontal" | "righttoleft" | "x" => {
                Self::HorizontalDrag
            }
            "verticaldrag" | "vertical" | "uptodown" | "y" => {
                Self::VerticalDrag
            }
            other => {
                log::warn!(
                    "unknown touch projection '{other}', using horizontal_drag"
                );
                Self::default()
            }
        }
    }
}

impl fmt::Display for TouchProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HorizontalDrag => "horizontal_drag",
            Self::VerticalDrag => "vertical_drag",
        };
        f.write_str(name)
    }
}

impl<'de> Deserialize<'de> for TouchProjection {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
