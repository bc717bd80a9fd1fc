//! Page-level configuration.
//!
//! Defaults match the landing page markup. A page can override any subset by
//! embedding `<script id="effects-config" type="application/json">` with the
//! same shape as [`EffectsConfig`]; missing keys keep their defaults.

use serde::Deserialize;

use crate::components::particle_field::ParticleStyle;

/// All controller settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
	/// Particle canvas.
	pub particles: ParticleOptions,
	/// Scroll reveal.
	pub reveal: RevealOptions,
	/// Count-up numbers.
	pub counter: CounterOptions,
	/// FAQ accordion.
	pub faq: FaqOptions,
	/// Admin mode.
	pub admin: AdminOptions,
}

impl EffectsConfig {
	/// Parses overrides; missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Where the particle field draws and how it looks.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleOptions {
	/// Id of the `<canvas>` to draw on.
	pub canvas_id: String,
	/// Particle look and motion, flattened into the same JSON object.
	#[serde(flatten)]
	pub style: ParticleStyle,
}

impl Default for ParticleOptions {
	fn default() -> Self {
		Self {
			canvas_id: "particles-canvas".into(),
			style: ParticleStyle::default(),
		}
	}
}

/// Scroll reveal settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
	/// Marker classes, without the leading dot.
	pub classes: Vec<String>,
	/// Class added once an element is revealed.
	pub visible_class: String,
	/// Visible fraction that counts as in view.
	pub threshold: f64,
	/// Observer root margin, CSS syntax.
	pub root_margin: String,
}

impl Default for RevealOptions {
	fn default() -> Self {
		Self {
			classes: ["reveal", "reveal-left", "reveal-right", "reveal-scale"]
				.into_iter()
				.map(String::from)
				.collect(),
			visible_class: "visible".into(),
			threshold: 0.1,
			root_margin: "0px 0px -40px 0px".into(),
		}
	}
}

impl RevealOptions {
	/// CSS selector matching any marker class.
	pub fn selector(&self) -> String {
		self.classes
			.iter()
			.map(|c| format!(".{c}"))
			.collect::<Vec<_>>()
			.join(", ")
	}
}

/// Count-up settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CounterOptions {
	/// Data attribute holding the target, e.g. `data-count="150"`.
	pub attribute: String,
	/// Visible fraction that starts the count.
	pub threshold: f64,
	/// Number of increments from zero to the target.
	pub steps: u32,
	/// Delay between increments.
	pub interval_ms: u32,
	/// Text appended to the number.
	pub suffix: String,
}

impl Default for CounterOptions {
	fn default() -> Self {
		Self {
			attribute: "data-count".into(),
			threshold: 0.5,
			steps: 60,
			interval_ms: 25,
			suffix: "+".into(),
		}
	}
}

/// FAQ accordion settings. Each question's answer is its next element sibling.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FaqOptions {
	/// Selector for question buttons.
	pub question_selector: String,
	/// Selector for answers, used when closing them all.
	pub answer_selector: String,
	/// Class on the open question.
	pub active_class: String,
	/// Class on the open answer.
	pub open_class: String,
}

impl Default for FaqOptions {
	fn default() -> Self {
		Self {
			question_selector: ".faq-q".into(),
			answer_selector: ".faq-a".into(),
			active_class: "active".into(),
			open_class: "open".into(),
		}
	}
}

/// Admin mode settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AdminOptions {
	/// Query parameter name.
	pub param: String,
	/// Value that turns admin mode on.
	pub value: String,
	/// Class added to `<body>`.
	pub body_class: String,
	/// Toast text.
	pub message: String,
	/// How long the toast stays up.
	pub toast_ms: u32,
}

impl Default for AdminOptions {
	fn default() -> Self {
		Self {
			param: "mode".into(),
			value: "admin".into(),
			body_class: "admin-mode".into(),
			message: "管理者モード: 全ての診断結果を表示中".into(),
			toast_ms: 5000,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		let config = EffectsConfig::from_json("{}").unwrap();
		assert_eq!(config.particles.canvas_id, "particles-canvas");
		assert_eq!(config.particles.style.count, 60);
		assert_eq!(config.counter.steps, 60);
		assert_eq!(config.admin.toast_ms, 5000);
	}

	#[test]
	fn particle_style_is_flattened() {
		let config =
			EffectsConfig::from_json(r#"{ "particles": { "canvas_id": "bg", "count": 24 } }"#)
				.unwrap();
		assert_eq!(config.particles.canvas_id, "bg");
		assert_eq!(config.particles.style.count, 24);
		assert_eq!(config.particles.style.edge_margin, 10.0);
	}

	#[test]
	fn reveal_selector_joins_classes() {
		assert_eq!(
			RevealOptions::default().selector(),
			".reveal, .reveal-left, .reveal-right, .reveal-scale"
		);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(EffectsConfig::from_json("{ particles: ").is_err());
	}
}
