use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::limit::{resolve_increment, AngleLimit};
use crate::error::OrbitalError;
use crate::input::{
    GestureHandler, GestureSource, Pointer, SharedHandler, SubscriptionId,
};
use crate::options::OrbitOptions;
use crate::transform::{PivotSource, TransformSink};

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No pointer held; move events are ignored.
    #[default]
    Idle,
    /// Between a pointer-down and its pointer-up.
    Dragging,
}

/// Rotates a target around a pivot in response to single-pointer drags.
///
/// Each move event while dragging projects the screen delta onto one axis,
/// scales it by speed and frame time, resolves it against the optional
/// angle limit, and applies exactly one
/// [`rotate_around`](TransformSink::rotate_around) to the target.
///
/// Any pointer starts or ends the drag; no attempt is made to tell fingers
/// apart.
pub struct OrbitController<P, T> {
    pivot: P,
    target: T,
    options: OrbitOptions,
    /// Signed rotation accumulated since construction, in degrees.
    current_angle: f32,
    /// Increment applied by the most recent move, in degrees.
    last_increment: f32,
    phase: DragPhase,
    subscription: Option<SubscriptionId>,
}

impl<P: PivotSource, T: TransformSink> OrbitController<P, T> {
    /// Build a controller, moving `target` to the configured starting
    /// position if there is one.
    ///
    /// # Errors
    ///
    /// [`OrbitalError::InvalidOptions`] if `options` fail validation.
    pub fn new(
        options: OrbitOptions,
        pivot: P,
        mut target: T,
    ) -> Result<Self, OrbitalError> {
        options.validate()?;
        if let Some(start) = options.starting_position() {
            target.set_position(start);
        }
        log::debug!(
            "orbit controller: axis={} projection={} speed={} limit={:?}",
            options.axis,
            options.projection,
            options.speed,
            options.angle_limit
        );
        Ok(Self {
            pivot,
            target,
            options,
            current_angle: 0.0,
            last_increment: 0.0,
            phase: DragPhase::Idle,
            subscription: None,
        })
    }

    /// Accumulated rotation in degrees.
    #[must_use]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Increment applied by the most recent processed move, in degrees.
    #[must_use]
    pub fn last_increment(&self) -> f32 {
        self.last_increment
    }

    /// Current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Configuration the controller was built with.
    #[must_use]
    pub fn options(&self) -> &OrbitOptions {
        &self.options
    }

    /// Configured angle limit, if any.
    #[must_use]
    pub fn angle_limit(&self) -> Option<AngleLimit> {
        self.options.angle_limit
    }

    /// The pivot handle.
    #[must_use]
    pub fn pivot(&self) -> &P {
        &self.pivot
    }

    /// Orbit a different pivot from now on. Returns the previous one.
    ///
    /// The accumulated angle is kept.
    pub fn set_pivot(&mut self, pivot: P) -> P {
        std::mem::replace(&mut self.pivot, pivot)
    }

    /// The target being rotated.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the target.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Subscription held with a gesture source, if attached.
    #[must_use]
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Stop receiving events from `source`. Returns `false` if the
    /// controller was not attached.
    pub fn detach<S: GestureSource + ?Sized>(&mut self, source: &mut S) -> bool {
        self.subscription
            .take()
            .is_some_and(|id| source.unsubscribe(id))
    }

    fn apply_move(&mut self, screen_delta: Vec2, delta_time: f32) {
        let axis_delta = self.options.projection.project(screen_delta);
        let raw = axis_delta * self.options.speed * delta_time;
        let resolution =
            resolve_increment(self.current_angle, raw, self.options.angle_limit);

        self.current_angle = resolution.angle_after;
        self.last_increment = resolution.increment;

        let pivot = self.pivot.position();
        let axis = self.options.axis.rotation_vector();
        self.target.rotate_around(pivot, axis, resolution.increment);

        log::trace!(
            "orbit move: raw={raw} applied={} angle={}",
            resolution.increment,
            self.current_angle
        );
    }
}

impl<P, T> OrbitController<P, T>
where
    P: PivotSource + 'static,
    T: TransformSink + 'static,
{
    /// Subscribe to `source` and hand back the shared controller.
    ///
    /// The source holds the controller weakly; keep the returned handle
    /// alive for as long as events should be processed.
    pub fn attach<S: GestureSource + ?Sized>(
        self,
        source: &mut S,
    ) -> Rc<RefCell<Self>> {
        let controller = Rc::new(RefCell::new(self));
        let handler: SharedHandler = controller.clone();
        let id = source.subscribe(&handler);
        controller.borrow_mut().subscription = Some(id);
        controller
    }
}

impl<P: PivotSource, T: TransformSink> GestureHandler for OrbitController<P, T> {
    fn on_pointer_down(&mut self, pointer: &Pointer) {
        if self.phase == DragPhase::Idle {
            log::debug!("orbit drag started by {:?}", pointer.id);
        }
        self.phase = DragPhase::Dragging;
    }

    fn on_pointer_up(&mut self, pointer: &Pointer) {
        if self.phase == DragPhase::Dragging {
            log::debug!(
                "orbit drag ended by {:?} at {} degrees",
                pointer.id,
                self.current_angle
            );
        }
        self.phase = DragPhase::Idle;
    }

    fn on_pointer_move(
        &mut self,
        _pointer: &Pointer,
        screen_delta: Vec2,
        delta_time: f32,
    ) {
        if self.phase == DragPhase::Idle {
            return;
        }
        self.apply_move(screen_delta, delta_time);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::orbit::{RotationAxis, TouchProjection};
    use crate::transform::Transform;

    /// Records every call instead of moving anything.
    #[derive(Default)]
    struct RecordingSink {
        rotations: Vec<(Vec3, Vec3, f32)>,
        positions: Vec<Vec3>,
    }

    impl TransformSink for RecordingSink {
        fn rotate_around(&mut self, pivot: Vec3, axis: Vec3, degrees: f32) {
            self.rotations.push((pivot, axis, degrees));
        }

        fn set_position(&mut self, position: Vec3) {
            self.positions.push(position);
        }
    }

    fn options(speed: f32, limit: Option<(f32, f32)>) -> OrbitOptions {
        OrbitOptions {
            speed,
            angle_limit: limit.map(|(min, max)| AngleLimit { min, max }),
            ..OrbitOptions::default()
        }
    }

    fn controller(
        opts: OrbitOptions,
    ) -> OrbitController<Vec3, RecordingSink> {
        OrbitController::new(opts, Vec3::ZERO, RecordingSink::default())
            .unwrap()
    }

    fn drag(c: &mut OrbitController<Vec3, RecordingSink>, dx: f32, dt: f32) {
        c.on_pointer_move(&Pointer::default(), Vec2::new(dx, 0.0), dt);
    }

    #[test]
    fn starts_idle_at_zero() {
        let c = controller(OrbitOptions::default());
        assert_eq!(c.phase(), DragPhase::Idle);
        assert_eq!(c.current_angle(), 0.0);
        assert!(c.target().positions.is_empty());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut c = controller(options(10.0, None));
        for _ in 0..5 {
            drag(&mut c, 50.0, 1.0);
        }
        assert_eq!(c.current_angle(), 0.0);
        assert!(c.target().rotations.is_empty());
    }

    #[test]
    fn single_increment_scales_by_speed_and_time() {
        let mut c = controller(options(10.0, None));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, 2.0, 0.5);

        assert_eq!(c.last_increment(), 10.0);
        assert_eq!(c.current_angle(), 10.0);
        assert_eq!(c.target().rotations, vec![(Vec3::ZERO, -Vec3::Y, 10.0)]);
    }

    #[test]
    fn clamps_at_upper_limit() {
        let mut c = controller(options(1.0, Some((0.0, 90.0))));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, 85.0, 1.0);
        drag(&mut c, 15.0, 1.0);

        assert_eq!(c.last_increment(), 5.0);
        assert_eq!(c.current_angle(), 90.0);

        drag(&mut c, 30.0, 1.0);
        assert_eq!(c.last_increment(), 0.0);
        assert_eq!(c.current_angle(), 90.0);
        assert_eq!(c.target().rotations.len(), 3);
    }

    #[test]
    fn clamped_angle_stays_on_inexact_bound() {
        let mut c = controller(options(1.0, Some((-1000.0, 33.3))));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, -50.0, 1.0);
        drag(&mut c, 1000.0, 1.0);

        assert_eq!(c.current_angle(), 33.3);
        assert!(c.angle_limit().unwrap().contains(c.current_angle()));
        assert_eq!(c.target().rotations[1].2, 33.3_f32 + 50.0);

        drag(&mut c, 1000.0, 1.0);
        assert_eq!(c.current_angle(), 33.3);
    }

    #[test]
    fn clamps_at_lower_limit() {
        let mut c = controller(options(1.0, Some((-90.0, 0.0))));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, -85.0, 1.0);
        drag(&mut c, -15.0, 1.0);

        assert_eq!(c.last_increment(), -5.0);
        assert_eq!(c.current_angle(), -90.0);
    }

    #[test]
    fn wraps_without_limit() {
        let mut c = controller(options(1.0, None));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, 350.0, 1.0);
        drag(&mut c, 20.0, 1.0);

        // 350 - 360 + 20: the full increment is still applied
        assert_eq!(c.current_angle(), 10.0);
        assert_eq!(c.last_increment(), 20.0);
        assert_eq!(c.target().rotations[1].2, 20.0);
    }

    #[test]
    fn down_then_up_leaves_angle_untouched() {
        let mut c = controller(options(1.0, None));
        c.on_pointer_down(&Pointer::default());
        c.on_pointer_up(&Pointer::default());
        assert_eq!(c.phase(), DragPhase::Idle);
        assert_eq!(c.current_angle(), 0.0);

        drag(&mut c, 30.0, 1.0);
        assert!(c.target().rotations.is_empty());
    }

    #[test]
    fn vertical_projection_reads_y() {
        let opts = OrbitOptions {
            projection: TouchProjection::VerticalDrag,
            axis: RotationAxis::X,
            speed: 1.0,
            ..OrbitOptions::default()
        };
        let mut c = controller(opts);
        c.on_pointer_down(&Pointer::default());
        c.on_pointer_move(&Pointer::default(), Vec2::new(100.0, -4.0), 1.0);

        assert_eq!(c.target().rotations, vec![(Vec3::ZERO, -Vec3::X, -4.0)]);
    }

    #[test]
    fn pivot_is_read_on_every_move() {
        let mut c = controller(options(1.0, None));
        c.on_pointer_down(&Pointer::default());
        drag(&mut c, 1.0, 1.0);
        let old = c.set_pivot(Vec3::new(0.0, 0.0, 4.0));
        drag(&mut c, 1.0, 1.0);

        assert_eq!(old, Vec3::ZERO);
        assert_eq!(c.target().rotations[1].0, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(c.current_angle(), 2.0);
    }

    #[test]
    fn starting_position_is_applied_once() {
        let opts = OrbitOptions {
            starting_position: Some([1.0, 2.0, 3.0]),
            ..OrbitOptions::default()
        };
        let c = controller(opts);
        assert_eq!(c.target().positions, vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let result = OrbitController::new(
            options(f32::INFINITY, None),
            Vec3::ZERO,
            Transform::default(),
        );
        assert!(matches!(result, Err(OrbitalError::InvalidOptions(_))));
    }

    #[test]
    fn rotates_real_transform_around_pivot() {
        let target = Transform::from_translation(Vec3::new(0.0, 0.0, 1.0));
        let mut c = OrbitController::new(options(1.0, None), Vec3::ZERO, target)
            .unwrap();
        c.on_pointer_down(&Pointer::default());
        c.on_pointer_move(&Pointer::default(), Vec2::new(90.0, 0.0), 1.0);

        // +90° about -Y swings +Z over to -X
        let moved = c.target().translation;
        assert!(moved.abs_diff_eq(Vec3::NEG_X, 1e-5), "got {moved}");
        assert_eq!(c.current_angle(), 90.0);
    }
}
