//! Per-frame animation state.

/// Wrap point of the animation phase, in seconds.
pub const PHASE_PERIOD: f32 = 3.0;

/// Animation values owned by the frame driver and rewritten once per tick.
///
/// `phase` accumulates delta time and wraps at [`PHASE_PERIOD`], but after
/// the sprite half-size is derived it is forced back to 1.0 - from the
/// second tick on the half-size hovers near `max_half * (1 + dt) / 3`
/// instead of sweeping the full ramp. The `phase` shader uniform is fed the
/// elapsed time, not this field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameState {
    /// Wrapped animation phase.
    pub phase: f32,
    /// Total elapsed seconds. Monotone, never reset.
    pub elapsed: f64,
    /// Sprite half-extent in view-space units, derived each tick.
    pub half_size: f32,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the animation state by `dt` seconds.
    ///
    /// `max_half` is the sprite half-size reached at the end of a full
    /// phase period.
    pub fn tick(&mut self, dt: f32, max_half: f32) {
        self.phase += dt;
        self.elapsed += dt as f64;
        if self.phase > PHASE_PERIOD {
            self.phase -= PHASE_PERIOD;
        }

        self.half_size = max_half * self.phase / PHASE_PERIOD;
        self.phase = 1.0;
    }
}
