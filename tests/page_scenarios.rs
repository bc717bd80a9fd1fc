//! End-to-end behavior of each controller's state, without a browser.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use landing_fx::components::particle_field::{Bounds, ColorClass, Particle};
use landing_fx::config::{AdminOptions, CounterOptions};
use landing_fx::{AdminMode, CountUp, CounterRegistry, FaqAccordion, ParticleField, ParticleStyle};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn particle_above_top_edge_respawns_at_bottom() {
	let style = ParticleStyle::default();
	let canvas = Bounds::new(800.0, 600.0);
	let mut rng = SmallRng::seed_from_u64(42);
	let mut p = Particle {
		x: 120.0,
		y: -11.0,
		size: 2.0,
		speed_x: 0.1,
		speed_y: -0.2,
		opacity: 0.2,
		color: ColorClass::Neutral,
	};

	p.update(1_700_000_000_000.0, &style, canvas, &mut rng);

	assert_eq!(p.y, 610.0);
	assert!(p.x >= 0.0 && p.x < 800.0);
	assert_eq!(p.size, 2.0);
	assert_eq!(p.color, ColorClass::Neutral);
}

#[test]
fn field_keeps_every_particle_within_vertical_wrap() {
	let style = ParticleStyle::default();
	let mut field = ParticleField::new(style, Bounds::new(800.0, 600.0), SmallRng::seed_from_u64(9));
	for frame in 0..5_000 {
		field.tick(frame as f64 * 16.7, |p, _| {
			assert!(p.y >= -10.5 && p.y <= 610.0, "y out of range: {}", p.y);
		});
	}
	field.stop();
	assert!(!field.tick(0.0, |_, _| panic!("stopped field drew a particle")));
}

#[test]
fn admin_query_flags_body_and_shows_one_toast_for_five_seconds() {
	let options = AdminOptions::default();
	let mut mode = AdminMode::from_value(Some("admin"), &options);

	assert!(mode.activate(1_000.0));
	assert!(mode.body_flag());
	assert!(mode.toast_visible());
	assert_eq!(mode.toasts_shown(), 1);

	assert!(!mode.expire(5_999.0));
	assert!(mode.toast_visible());
	assert!(mode.expire(6_000.0));
	assert!(!mode.toast_visible());
	assert!(mode.body_flag());
	assert_eq!(mode.toasts_shown(), 1);
}

#[test]
fn without_admin_query_nothing_happens() {
	let options = AdminOptions::default();
	for value in [None, Some(""), Some("user"), Some("ADMIN")] {
		let mut mode = AdminMode::from_value(value, &options);
		assert!(!mode.activate(0.0), "activated for {value:?}");
		assert!(!mode.body_flag());
		assert!(!mode.toast_visible());
		assert_eq!(mode.toasts_shown(), 0);
	}
}

#[test]
fn counter_counts_to_target_once() {
	let options = CounterOptions::default();
	let mut registry = CounterRegistry::new([landing_fx::components::counter::parse_target("150")]);

	let mut count: CountUp = registry
		.on_intersection(0, true, options.steps)
		.expect("visible counter starts");
	let mut texts = Vec::new();
	while let Some(value) = count.step() {
		texts.push(format!("{value}{}", options.suffix));
	}

	let values: Vec<u32> = texts
		.iter()
		.map(|t| t.trim_end_matches('+').parse().unwrap())
		.collect();
	assert!(values.windows(2).all(|w| w[0] < w[1]));
	assert_eq!(texts.last().map(String::as_str), Some("150+"));

	assert!(!registry.is_watched(0));
	assert!(registry.on_intersection(0, true, options.steps).is_none());
}

#[test]
fn zero_or_garbage_targets_are_never_counted() {
	use landing_fx::components::counter::parse_target;
	let mut registry = CounterRegistry::new(["0", "n/a", ""].map(parse_target));
	assert_eq!(registry.watched_count(), 0);
	for idx in 0..3 {
		assert!(registry.on_intersection(idx, true, 60).is_none());
	}
}

#[test]
fn faq_keeps_at_most_one_answer_open() {
	let mut faq = FaqAccordion::new(4);
	faq.toggle(0);
	faq.toggle(3);
	assert_eq!(faq.open(), Some(3));
	assert!(!faq.is_open(0));

	for click in [1, 1, 2, 0, 0, 3] {
		faq.toggle(click);
		assert!((0..4).filter(|&i| faq.is_open(i)).count() <= 1);
	}
}
