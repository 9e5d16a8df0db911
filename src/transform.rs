//! Spatial transforms: the pivot the controller orbits around and the
//! target it moves.
//!
//! Both sides are expressed as traits so a host can plug in its own scene
//! objects. [`Transform`] is the built-in implementation, and shared
//! `Rc<RefCell<_>>` handles work out of the box for objects owned elsewhere.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Quat, Vec3};

/// Position and orientation of an object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub translation: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Origin, no rotation.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Transform at `translation` with identity rotation.
    #[must_use]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Rotate about `axis` through the world-space `point` by `degrees`.
    ///
    /// Both the position (orbiting `point`) and the orientation change.
    /// `axis` need not be normalized; a zero axis leaves the transform as is.
    pub fn rotate_around(&mut self, point: Vec3, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.translation = point + rotation * (self.translation - point);
        self.rotation = (rotation * self.rotation).normalize();
    }
}

/// Something the controller can rotate around an external pivot.
pub trait TransformSink {
    /// Rotate about `axis` through `pivot` by `degrees`.
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32);

    /// Place the object at `position` without touching its orientation.
    fn set_position(&mut self, position: Vec3);
}

/// Read-only access to the current pivot position.
pub trait PivotSource {
    /// World-space position of the pivot right now.
    fn position(&self) -> Vec3;
}

impl TransformSink for Transform {
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
        Self::rotate_around(self, pivot, axis, degrees);
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }
}

impl<T: TransformSink + ?Sized> TransformSink for &mut T {
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
        (**self).rotate_around(pivot, axis, degrees);
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position);
    }
}

impl<T: TransformSink + ?Sized> TransformSink for Rc<RefCell<T>> {
    fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
        self.borrow_mut().rotate_around(pivot, axis, degrees);
    }

    fn set_position(&mut self, position: Vec3) {
        self.borrow_mut().set_position(position);
    }
}

impl PivotSource for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

impl PivotSource for Transform {
    fn position(&self) -> Vec3 {
        self.translation
    }
}

impl<T: PivotSource + ?Sized> PivotSource for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: PivotSource + ?Sized> PivotSource for Rc<RefCell<T>> {
    fn position(&self) -> Vec3 {
        self.borrow().position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, EPS)
    }

    #[test]
    fn rotate_around_pivot_moves_position() {
        let mut t = Transform::from_translation(Vec3::new(2.0, 0.0, 0.0));
        t.rotate_around(Vec3::new(1.0, 0.0, 0.0), Vec3::Y, 90.0);
        // (1,0,0) offset rotated +90° about +Y lands on (0,0,-1)
        assert!(approx(t.translation, Vec3::new(1.0, 0.0, -1.0)));
    }

    #[test]
    fn rotate_around_accumulates_orientation() {
        let mut t = Transform::default();
        t.rotate_around(Vec3::ZERO, Vec3::Z, 45.0);
        t.rotate_around(Vec3::ZERO, Vec3::Z, 45.0);
        let expected = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(t.rotation.abs_diff_eq(expected, EPS));
        // Sitting on the pivot, the position never changes
        assert!(approx(t.translation, Vec3::ZERO));
    }

    #[test]
    fn negative_axis_reverses_direction() {
        let mut a = Transform::from_translation(Vec3::X);
        let mut b = Transform::from_translation(Vec3::X);
        a.rotate_around(Vec3::ZERO, -Vec3::Y, 30.0);
        b.rotate_around(Vec3::ZERO, Vec3::Y, -30.0);
        assert!(approx(a.translation, b.translation));
    }

    #[test]
    fn zero_axis_is_ignored() {
        let mut t = Transform::from_translation(Vec3::ONE);
        t.rotate_around(Vec3::ZERO, Vec3::ZERO, 90.0);
        assert_eq!(t, Transform::from_translation(Vec3::ONE));
    }

    #[test]
    fn shared_handles_forward_to_inner_transform() {
        let shared = Rc::new(RefCell::new(Transform::default()));
        let mut sink = Rc::clone(&shared);
        sink.set_position(Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(shared.position(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(Vec3::ONE.position(), Vec3::ONE);
    }
}
