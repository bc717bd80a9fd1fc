//! Colors and tunables for the particle field.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`; defaults to opaque when omitted from config.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color at another alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Canvas fill string. Alpha is always emitted so faded particles stay translucent.
	pub fn to_css_rgba(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// Shape of the particle cloud and how it moves.
///
/// Every range is half-open, `[min, max)`. Vertical speed is stored as a
/// magnitude and applied upwards.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles in the field.
	pub count: usize,
	/// Smallest radius, in pixels.
	pub size_min: f64,
	/// Largest radius, in pixels.
	pub size_max: f64,
	/// Slowest upward speed, in pixels per frame.
	pub rise_min: f64,
	/// Fastest upward speed, in pixels per frame.
	pub rise_max: f64,
	/// Horizontal speed is drawn from `[-drift, drift)`.
	pub drift: f64,
	/// Lowest starting opacity.
	pub opacity_min: f64,
	/// Highest starting opacity.
	pub opacity_max: f64,
	/// Probability that a particle is gold rather than neutral.
	pub gold_ratio: f64,
	/// Opacity change per frame at the crest of the shimmer wave.
	pub shimmer_amplitude: f64,
	/// Shimmer angular frequency per millisecond.
	pub shimmer_rate: f64,
	/// Distance past the top edge before a particle respawns, and the distance
	/// below the bottom edge where it reappears.
	pub edge_margin: f64,
	/// Tint of gold particles.
	pub gold: Color,
	/// Tint of neutral particles.
	pub neutral: Color,
	/// Neutral particles are drawn at this fraction of their opacity.
	pub neutral_alpha_scale: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 60,
			size_min: 0.5,
			size_max: 3.0,
			rise_min: 0.1,
			rise_max: 0.5,
			drift: 0.15,
			opacity_min: 0.1,
			opacity_max: 0.5,
			gold_ratio: 0.5,
			shimmer_amplitude: 0.003,
			shimmer_rate: 0.001,
			edge_margin: 10.0,
			gold: Color::rgb(201, 168, 76),
			neutral: Color::rgb(255, 255, 255),
			neutral_alpha_scale: 0.5,
		}
	}
}
