use web_time::Instant;

/// Per-frame delta time for pointer move events.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
}

impl FrameTiming {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Close the current frame. Returns seconds elapsed since the previous
    /// tick, the `delta_time` fed to
    /// [`PointerTracker::end_frame`](crate::input::PointerTracker::end_frame).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed.as_secs_f32()
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
