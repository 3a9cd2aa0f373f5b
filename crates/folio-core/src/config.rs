use crate::error::{CoreError, CoreResult};

/// Durations of every deferred UI action, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Pause between opening the chat and the greeting bubble.
    pub greeting_delay_ms: u64,
    /// Simulated "thinking" pause before a bot reply.
    pub reply_delay_ms: u64,
    /// Length of a section's exit transition.
    pub section_exit_ms: u64,
    /// Length of a section's enter transition.
    pub section_enter_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            greeting_delay_ms: 500,
            reply_delay_ms: 1500,
            section_exit_ms: 400,
            section_enter_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Every delay set to zero. Useful for scripted runs.
    pub fn instant() -> Self {
        Self {
            greeting_delay_ms: 0,
            reply_delay_ms: 0,
            section_exit_ms: 0,
            section_enter_ms: 0,
        }
    }

    /// Set the greeting delay.
    pub fn with_greeting_delay(mut self, ms: u64) -> Self {
        self.greeting_delay_ms = ms;
        self
    }

    /// Set the reply delay.
    pub fn with_reply_delay(mut self, ms: u64) -> Self {
        self.reply_delay_ms = ms;
        self
    }

    /// Set the section exit and enter durations.
    pub fn with_section_transition(mut self, exit_ms: u64, enter_ms: u64) -> Self {
        self.section_exit_ms = exit_ms;
        self.section_enter_ms = enter_ms;
        self
    }

    /// Reject delays longer than a minute; nothing on the page waits that long.
    pub fn validate(&self) -> CoreResult<()> {
        const MAX_MS: u64 = 60_000;
        let fields = [
            ("greeting_delay_ms", self.greeting_delay_ms),
            ("reply_delay_ms", self.reply_delay_ms),
            ("section_exit_ms", self.section_exit_ms),
            ("section_enter_ms", self.section_enter_ms),
        ];
        for (field, value) in fields {
            if value > MAX_MS {
                return Err(CoreError::InvalidTiming { field, value });
            }
        }
        Ok(())
    }
}

/// Parameters of the decorative particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropConfig {
    /// Number of particles spawned on every resize.
    pub particle_count: usize,
    /// RNG seed for reproducible layouts.
    pub seed: u64,
    /// Smallest particle radius.
    pub min_size: f64,
    /// Radius spread added on top of `min_size`.
    pub size_range: f64,
    /// Largest per-frame velocity component, in either direction.
    pub max_speed: f64,
    /// Pairs closer than `(w / d) * (h / d)` (squared) get a line.
    pub link_divisor: f64,
    /// Particle fill color.
    pub particle_color: String,
    /// Connecting line color.
    pub line_color: String,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: 80,
            seed: 42,
            min_size: 1.0,
            size_range: 2.0,
            max_speed: 0.2,
            link_divisor: 7.0,
            particle_color: "#00c896".to_string(),
            line_color: "rgba(0, 200, 150, 0.2)".to_string(),
        }
    }
}

impl BackdropConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the maximum per-frame speed.
    pub fn with_max_speed(mut self, speed: f64) -> Self {
        self.max_speed = speed;
        self
    }

    /// Check that sizes, speeds, and the link divisor are usable.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_size.is_nan() || self.min_size <= 0.0 {
            return Err(CoreError::InvalidBackdrop {
                field: "min_size",
                reason: format!("{} is not positive", self.min_size),
            });
        }
        if self.size_range.is_nan() || self.size_range < 0.0 {
            return Err(CoreError::InvalidBackdrop {
                field: "size_range",
                reason: format!("{} is not a non-negative number", self.size_range),
            });
        }
        if self.max_speed.is_nan() || self.max_speed < 0.0 {
            return Err(CoreError::InvalidBackdrop {
                field: "max_speed",
                reason: format!("{} is not a non-negative number", self.max_speed),
            });
        }
        if self.link_divisor.is_nan() || self.link_divisor <= 0.0 {
            return Err(CoreError::InvalidBackdrop {
                field: "link_divisor",
                reason: format!("{} is not positive", self.link_divisor),
            });
        }
        Ok(())
    }
}

/// Configuration for a whole page session.
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Delays of deferred UI actions.
    pub timing: TimingConfig,
    /// Particle backdrop parameters.
    pub backdrop: BackdropConfig,
    /// Section shown at page load.
    pub default_section: String,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            backdrop: BackdropConfig::default(),
            default_section: "home".to_string(),
            max_events: 0,
        }
    }
}

impl FolioConfig {
    /// Replace the timing configuration.
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Replace the backdrop configuration.
    pub fn with_backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Set the section shown at page load.
    pub fn with_default_section(mut self, section: impl Into<String>) -> Self {
        self.default_section = section.into();
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Validate every nested configuration.
    pub fn validate(&self) -> CoreResult<()> {
        self.timing.validate()?;
        self.backdrop.validate()?;
        if self.default_section.trim().is_empty() {
            return Err(CoreError::EmptyDefaultSection);
        }
        Ok(())
    }
}
