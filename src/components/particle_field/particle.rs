//! A single rising, shimmering particle.

use std::f64::consts::TAU;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::theme::{Color, ParticleStyle};

/// Drawable area the particles live in, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Canvas width.
	pub width: f64,
	/// Canvas height.
	pub height: f64,
}

impl Bounds {
	/// Bounds of a `width` by `height` canvas.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Tint a particle is drawn with. Chosen once per particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorClass {
	/// Warm gold, drawn at full opacity.
	Gold,
	/// White, drawn at a fraction of its opacity.
	Neutral,
}

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position; may drift off-canvas.
	pub x: f64,
	/// Vertical position; wraps from above the top edge to below the bottom.
	pub y: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Horizontal drift per frame.
	pub speed_x: f64,
	/// Always negative: particles only drift upwards.
	pub speed_y: f64,
	/// Not clamped here; `fill_color` clamps at draw time.
	pub opacity: f64,
	/// Tint, fixed at reset.
	pub color: ColorClass,
}

impl Particle {
	/// A freshly reset particle somewhere on the canvas.
	pub fn new(style: &ParticleStyle, bounds: Bounds, rng: &mut impl Rng) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			size: 0.0,
			speed_x: 0.0,
			speed_y: 0.0,
			opacity: 0.0,
			color: ColorClass::Neutral,
		};
		particle.reset(style, bounds, rng);
		particle
	}

	/// Re-rolls every attribute.
	pub fn reset(&mut self, style: &ParticleStyle, bounds: Bounds, rng: &mut impl Rng) {
		self.x = rng.r#gen::<f64>() * bounds.width;
		self.y = rng.r#gen::<f64>() * bounds.height;
		self.size = lerp(style.size_min, style.size_max, rng.r#gen());
		self.speed_y = -lerp(style.rise_min, style.rise_max, rng.r#gen());
		self.speed_x = lerp(-style.drift, style.drift, rng.r#gen());
		self.opacity = lerp(style.opacity_min, style.opacity_max, rng.r#gen());
		self.color = if rng.r#gen::<f64>() < style.gold_ratio {
			ColorClass::Gold
		} else {
			ColorClass::Neutral
		};
	}

	/// Advance one frame. `now_ms` is wall-clock time and only phases the shimmer.
	pub fn update(&mut self, now_ms: f64, style: &ParticleStyle, bounds: Bounds, rng: &mut impl Rng) {
		self.y += self.speed_y;
		self.x += self.speed_x;
		self.opacity += (now_ms * style.shimmer_rate + self.x).sin() * style.shimmer_amplitude;

		// Respawn below the bottom edge; size, speed, opacity and tint carry over.
		if self.y < -style.edge_margin {
			self.y = bounds.height + style.edge_margin;
			self.x = rng.r#gen::<f64>() * bounds.width;
		}
	}

	/// Fill color with opacity clamped to zero.
	pub fn fill_color(&self, style: &ParticleStyle) -> Color {
		match self.color {
			ColorClass::Gold => style.gold.with_alpha(self.opacity.max(0.0)),
			ColorClass::Neutral => style
				.neutral
				.with_alpha((self.opacity * style.neutral_alpha_scale).max(0.0)),
		}
	}

	/// Fills a circle of radius `size` at the particle's position.
	pub fn draw(&self, ctx: &CanvasRenderingContext2d, style: &ParticleStyle) {
		ctx.begin_path();
		let _ = ctx.arc(self.x, self.y, self.size, 0.0, TAU);
		ctx.set_fill_style_str(&self.fill_color(style).to_css_rgba());
		ctx.fill();
	}
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
	min + (max - min) * t
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const CANVAS: Bounds = Bounds::new(800.0, 600.0);

	fn particle_at(y: f64, speed_y: f64) -> Particle {
		Particle {
			x: 400.0,
			y,
			size: 1.5,
			speed_x: 0.25,
			speed_y,
			opacity: 0.3,
			color: ColorClass::Gold,
		}
	}

	#[test]
	fn reset_stays_in_ranges() {
		let style = ParticleStyle::default();
		let mut rng = SmallRng::seed_from_u64(7);
		let mut golds = 0;
		for _ in 0..2000 {
			let p = Particle::new(&style, CANVAS, &mut rng);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((0.5..=3.0).contains(&p.size));
			assert!((-0.5..=-0.1).contains(&p.speed_y), "speed_y {}", p.speed_y);
			assert!((-0.15..=0.15).contains(&p.speed_x));
			assert!((0.1..=0.5).contains(&p.opacity));
			if p.color == ColorClass::Gold {
				golds += 1;
			}
		}
		assert!((800..1200).contains(&golds), "gold count {golds}");
	}

	#[test]
	fn update_never_touches_size_or_color() {
		let style = ParticleStyle::default();
		let mut rng = SmallRng::seed_from_u64(11);
		let mut p = Particle::new(&style, CANVAS, &mut rng);
		let (size, color) = (p.size, p.color);
		for frame in 0..10_000 {
			p.update(frame as f64 * 16.0, &style, CANVAS, &mut rng);
			assert_eq!(p.size, size);
			assert_eq!(p.color, color);
		}
	}

	#[test]
	fn respawns_exactly_below_bottom_edge() {
		let style = ParticleStyle::default();
		let mut rng = SmallRng::seed_from_u64(3);
		let mut p = particle_at(-11.0, -0.2);
		p.update(0.0, &style, CANVAS, &mut rng);
		assert_eq!(p.y, 610.0);
		assert!((0.0..800.0).contains(&p.x));
		assert_eq!(p.speed_y, -0.2);
		assert_eq!(p.size, 1.5);
	}

	#[test]
	fn no_respawn_at_threshold() {
		let style = ParticleStyle::default();
		let mut rng = SmallRng::seed_from_u64(3);
		let mut p = particle_at(-9.5, -0.25);
		p.update(0.0, &style, CANVAS, &mut rng);
		assert_eq!(p.y, -9.75);
		assert_eq!(p.x, 400.25);
	}

	#[test]
	fn shimmer_follows_time_and_position() {
		let style = ParticleStyle::default();
		let mut rng = SmallRng::seed_from_u64(3);
		let mut p = particle_at(300.0, -0.2);
		p.update(1500.0, &style, CANVAS, &mut rng);
		let expected = 0.3 + (1.5_f64 + 400.25).sin() * 0.003;
		assert!((p.opacity - expected).abs() < 1e-12);
	}

	#[test]
	fn opacity_may_go_negative_but_draws_clamped() {
		let style = ParticleStyle::default();
		let mut p = particle_at(300.0, -0.2);
		p.opacity = -0.02;
		assert_eq!(p.fill_color(&style).a, 0.0);
		p.color = ColorClass::Neutral;
		assert_eq!(p.fill_color(&style).a, 0.0);
		assert_eq!(p.opacity, -0.02);
	}

	#[test]
	fn neutral_is_drawn_at_half_opacity() {
		let style = ParticleStyle::default();
		let mut p = particle_at(300.0, -0.2);
		p.opacity = 0.4;
		assert_eq!(p.fill_color(&style).to_css_rgba(), "rgba(201,168,76,0.4)");
		p.color = ColorClass::Neutral;
		assert_eq!(p.fill_color(&style).to_css_rgba(), "rgba(255,255,255,0.2)");
	}
}
