//! Confetti particle system
//!
//! Particles live in a fixed 100 x 100 field with the origin at the top-left
//! and y growing downwards. The renderer maps the field onto the terminal.

use rand::Rng;
use ratatui::layout::Rect;

/// Width and height of the particle field
pub const FIELD_SIZE: f64 = 100.0;

/// Particles added per answer
pub const ANSWER_BURST: usize = 20;

/// Particles in the shower that greets a good result
pub const RESULT_SHOWER: usize = 60;

/// Particles added on each refill while a perfect score keeps it raining
pub const PERFECT_REFILL: usize = 5;

/// Frames between refills for a perfect score
pub const REFILL_EVERY: u64 = 10;

/// Starting opacity; particles disappear when it runs out
const FULL_LIFE: f32 = 255.0;
const FADE_PER_FRAME: f32 = 3.0;
const GRAVITY: f64 = 0.03;

/// A single confetti piece
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining opacity, 0-255
    pub life: f32,
    /// Index into the theme's confetti palette
    pub color: usize,
    /// Phase offset for the spinning glyph
    pub spin: u8,
}

impl Particle {
    /// Opacity as a fraction of full life
    pub fn opacity(&self) -> f32 {
        (self.life / FULL_LIFE).clamp(0.0, 1.0)
    }

    fn alive(&self) -> bool {
        self.life > 0.0 && self.y < FIELD_SIZE + 20.0
    }
}

/// All live confetti
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Burst of particles falling from a point
    pub fn burst<R: Rng + ?Sized>(&mut self, x: f64, y: f64, count: usize, rng: &mut R) {
        for _ in 0..count {
            let particle = Self::spawn(x, y, rng.gen_range(0.3..1.8), rng);
            self.particles.push(particle);
        }
    }

    /// Particles dropping in from above the field at random columns
    pub fn shower<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let x = rng.gen_range(0.0..FIELD_SIZE);
            let y = rng.gen_range(-20.0..0.0);
            let particle = Self::spawn(x, y, rng.gen_range(0.6..1.8), rng);
            self.particles.push(particle);
        }
    }

    fn spawn<R: Rng + ?Sized>(x: f64, y: f64, vy: f64, rng: &mut R) -> Particle {
        Particle {
            x,
            y,
            vx: rng.gen_range(-0.6..0.6),
            vy,
            life: FULL_LIFE,
            color: rng.gen_range(0..5),
            spin: rng.r#gen(),
        }
    }

    /// Advance every particle one frame; `speed` scales motion and fading
    pub fn tick(&mut self, speed: f32) {
        let step = f64::from(speed);
        for p in &mut self.particles {
            p.vy += GRAVITY * step;
            p.x += p.vx * step;
            p.y += p.vy * step;
            p.life -= FADE_PER_FRAME * speed;
        }
        self.particles.retain(Particle::alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Map a terminal cell inside `area` to field coordinates
pub fn cell_to_field(area: Rect, column: u16, row: u16) -> (f64, f64) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));
    let x = (f64::from(column.saturating_sub(area.x)) + 0.5) / width * FIELD_SIZE;
    let y = (f64::from(row.saturating_sub(area.y)) + 0.5) / height * FIELD_SIZE;
    (x.clamp(0.0, FIELD_SIZE), y.clamp(0.0, FIELD_SIZE))
}
