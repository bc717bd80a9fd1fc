//! Particle collection and its run state.
//!
//! The field is created once per page and mutated each frame by the animation
//! loop. It knows nothing about the canvas: `tick` hands every particle to a
//! draw callback right after updating it, so the caller decides how to paint.

use rand::rngs::SmallRng;

use super::particle::{Bounds, Particle};
use super::theme::ParticleStyle;

/// Lifecycle of the field. A field comes into existence running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
	/// Updating and drawing every frame.
	Running,
	/// Halted for good; ticks are no-ops.
	Stopped,
}

/// Fixed set of particles sharing one canvas, with the randomness they respawn from.
pub struct ParticleField {
	particles: Vec<Particle>,
	style: ParticleStyle,
	bounds: Bounds,
	rng: SmallRng,
	status: FieldStatus,
}

impl ParticleField {
	/// Creates `style.count` particles spread over `bounds`.
	pub fn new(style: ParticleStyle, bounds: Bounds, mut rng: SmallRng) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::new(&style, bounds, &mut rng))
			.collect();

		Self {
			particles,
			style,
			bounds,
			rng,
			status: FieldStatus::Running,
		}
	}

	/// Particles in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Style the particles were created with.
	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	/// Current canvas bounds.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Whether the field is still running.
	pub fn status(&self) -> FieldStatus {
		self.status
	}

	/// Track new canvas dimensions. Particles keep their positions; anything
	/// now off-canvas drifts back in through the normal respawn.
	pub fn resize(&mut self, bounds: Bounds) {
		self.bounds = bounds;
	}

	/// Update then draw each particle in index order.
	///
	/// Returns whether another frame should be scheduled. A stopped field
	/// neither updates nor draws.
	pub fn tick(&mut self, now_ms: f64, mut draw: impl FnMut(&Particle, &ParticleStyle)) -> bool {
		if self.status == FieldStatus::Stopped {
			return false;
		}
		for p in &mut self.particles {
			p.update(now_ms, &self.style, self.bounds, &mut self.rng);
			draw(p, &self.style);
		}
		true
	}

	/// Halts the field. Later ticks neither update nor draw.
	pub fn stop(&mut self) {
		self.status = FieldStatus::Stopped;
	}
}
