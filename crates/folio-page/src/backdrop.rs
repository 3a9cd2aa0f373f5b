//! The decorative particle field behind the page.
//!
//! Particles drift at constant velocity and bounce off the viewport edges.
//! Any two particles close enough to each other are joined by a line.

use folio_core::{BackdropConfig, Component, FrameContext, UiEvent, UiEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// A single dot in the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels.
    pub y: f64,
    /// Horizontal velocity in pixels per frame.
    pub dx: f64,
    /// Vertical velocity in pixels per frame.
    pub dy: f64,
    /// Radius in pixels.
    pub size: f64,
}

impl Particle {
    /// Bounce off any edge the particle has crossed, then move one frame.
    pub fn update(&mut self, width: f64, height: f64) {
        if self.x > width || self.x < 0.0 {
            self.dx = -self.dx;
        }
        if self.y > height || self.y < 0.0 {
            self.dy = -self.dy;
        }
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Squared distance to another particle.
    pub fn distance_sq(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Seeded particle simulation sized to a viewport.
#[derive(Debug)]
pub struct Backdrop {
    config: BackdropConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: StdRng,
    frames: u64,
    now_ms: u64,
    outbox: Vec<UiEvent>,
}

impl Backdrop {
    /// Create a backdrop and populate it for a `width` x `height` viewport.
    pub fn new(config: BackdropConfig, width: f64, height: f64) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let mut backdrop = Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng,
            frames: 0,
            now_ms: 0,
            outbox: Vec::new(),
        };
        backdrop.resize(width, height);
        backdrop
    }

    /// Throw away every particle and spawn a fresh set for the new viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = self.config.particle_count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let size = self.rng.random::<f64>() * self.config.size_range + self.config.min_size;
            let x = spawn_coordinate(&mut self.rng, self.width, size);
            let y = spawn_coordinate(&mut self.rng, self.height, size);
            let dx = self.random_speed();
            let dy = self.random_speed();
            particles.push(Particle { x, y, dx, dy, size });
        }
        self.particles = particles;

        debug!(
            width = self.width,
            height = self.height,
            particles = count,
            "backdrop regenerated"
        );
        self.outbox.push(UiEvent::new(
            self.now_ms,
            UiEventKind::BackdropReset { particles: count },
            format!("{count} particles for {}x{}", self.width, self.height),
        ));
    }

    /// Advance every particle by one display frame.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update(self.width, self.height);
        }
        self.frames += 1;
        trace!(frame = self.frames, "backdrop stepped");
    }

    /// Pairs of particle indices close enough to be joined by a line.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let threshold = self.link_threshold();
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                if pa.distance_sq(pb) < threshold {
                    links.push((a, a + 1 + offset));
                }
            }
        }
        links
    }

    /// Squared distance under which two particles are linked.
    pub fn link_threshold(&self) -> f64 {
        let d = self.config.link_divisor;
        (self.width / d) * (self.height / d)
    }

    /// The current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The parameters this backdrop was built with.
    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Frames stepped since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn random_speed(&mut self) -> f64 {
        let max = self.config.max_speed;
        self.rng.random::<f64>() * 2.0 * max - max
    }
}

/// Pick a coordinate in `[size, extent - size)`, or `size` when the viewport
/// is too small to fit the particle.
fn spawn_coordinate(rng: &mut StdRng, extent: f64, size: f64) -> f64 {
    let span = (extent - size * 2.0).max(0.0);
    rng.random::<f64>() * span + size
}

impl Component for Backdrop {
    fn name(&self) -> &str {
        "backdrop"
    }

    fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        self.now_ms = ctx.now_ms();
        ctx.publish(&mut self.outbox);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{EventLog, UiClock};
    use proptest::prelude::*;

    fn backdrop() -> Backdrop {
        Backdrop::new(BackdropConfig::default(), 800.0, 600.0)
    }

    #[test]
    fn spawns_configured_count() {
        let b = backdrop();
        assert_eq!(b.particles().len(), 80);
        for p in b.particles() {
            assert!((1.0..3.0).contains(&p.size));
            assert!(p.x >= p.size && p.x < 800.0 - p.size);
            assert!(p.y >= p.size && p.y < 600.0 - p.size);
            assert!(p.dx.abs() <= 0.2 && p.dy.abs() <= 0.2);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = backdrop();
        let b = backdrop();
        assert_eq!(a.particles(), b.particles());

        let c = Backdrop::new(BackdropConfig::default().with_seed(7), 800.0, 600.0);
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn particle_bounces_off_edges() {
        let mut p = Particle {
            x: 101.0,
            y: 50.0,
            dx: 0.5,
            dy: -0.5,
            size: 1.0,
        };
        p.update(100.0, 100.0);
        assert_eq!(p.dx, -0.5);
        assert_eq!(p.x, 100.5);
        assert_eq!(p.y, 49.5);

        let mut q = Particle {
            x: 10.0,
            y: -0.1,
            dx: 0.0,
            dy: -0.2,
            size: 1.0,
        };
        q.update(100.0, 100.0);
        assert_eq!(q.dy, 0.2);
    }

    #[test]
    fn link_threshold_scales_with_viewport() {
        let b = backdrop();
        let expected = (800.0 / 7.0) * (600.0 / 7.0);
        assert!((b.link_threshold() - expected).abs() < 1e-9);
    }

    #[test]
    fn links_are_ordered_pairs_under_threshold() {
        let b = backdrop();
        let threshold = b.link_threshold();
        for (a, c) in b.links() {
            assert!(a < c);
            assert!(b.particles()[a].distance_sq(&b.particles()[c]) < threshold);
        }
    }

    #[test]
    fn close_pair_linked_far_pair_not() {
        let mut b = Backdrop::new(
            BackdropConfig::default().with_particle_count(3),
            700.0,
            700.0,
        );
        // Threshold is 100 * 100.
        b.particles[0] = Particle { x: 0.0, y: 0.0, dx: 0.0, dy: 0.0, size: 1.0 };
        b.particles[1] = Particle { x: 60.0, y: 60.0, dx: 0.0, dy: 0.0, size: 1.0 };
        b.particles[2] = Particle { x: 500.0, y: 500.0, dx: 0.0, dy: 0.0, size: 1.0 };
        assert_eq!(b.links(), vec![(0, 1)]);
    }

    #[test]
    fn tiny_viewport_still_spawns() {
        let b = Backdrop::new(BackdropConfig::default(), 2.0, 2.0);
        assert_eq!(b.particles().len(), 80);
        assert!(b.particles().iter().all(|p| p.x == p.size && p.y == p.size));
    }

    #[test]
    fn resize_emits_reset_event() {
        let mut b = backdrop();
        b.resize(1024.0, 768.0);
        let clock = UiClock::new();
        let mut log = EventLog::default();
        let mut ctx = FrameContext {
            clock: &clock,
            events: &mut log,
        };
        b.tick(&mut ctx);
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.events()[1].kind,
            UiEventKind::BackdropReset { particles: 80 }
        );
        assert_eq!(b.width(), 1024.0);
    }

    proptest! {
        #[test]
        fn particles_stay_near_viewport(
            seed in any::<u64>(),
            width in 10.0f64..2000.0,
            height in 10.0f64..2000.0,
            frames in 0usize..400,
        ) {
            let config = BackdropConfig::default().with_seed(seed).with_particle_count(20);
            let mut b = Backdrop::new(config, width, height);
            for _ in 0..frames {
                b.step();
            }
            prop_assert_eq!(b.frames(), frames as u64);
            let slack = 2.0 * 0.2 + 1e-9;
            for p in b.particles() {
                prop_assert!(p.x >= -slack && p.x <= width + slack);
                prop_assert!(p.y >= -slack && p.y <= height + slack);
            }
        }
    }
}
