/// Tracks simulated UI time as a monotonic millisecond counter.
///
/// The clock never reads wall time. Front-ends feed it real elapsed time;
/// tests feed it whatever they like.
#[derive(Debug, Clone, Default)]
pub struct UiClock {
    now_ms: u64,
    frames: u64,
}

impl UiClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `ms` milliseconds. Returns the new time.
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now_ms = self.now_ms.saturating_add(ms);
        self.now_ms
    }

    /// Count one display frame. Returns the new frame number.
    pub fn mark_frame(&mut self) -> u64 {
        self.frames += 1;
        self.frames
    }

    /// Current time in milliseconds since page load.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of display frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
