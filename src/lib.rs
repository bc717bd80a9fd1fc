//! landing-fx: client-side visual effects for the landing page.
//!
//! Compiled to WASM and loaded alongside the static markup. On page load it
//! attaches a set of independent controllers:
//! - a rising, shimmering particle field on `#particles-canvas`
//! - scroll reveal for `.reveal*` elements
//! - count-up numbers for `[data-count]` elements
//! - the FAQ accordion
//! - admin mode, triggered by `?mode=admin`

use std::cell::RefCell;

use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlScriptElement, Window};

pub mod components;
pub mod config;

// Only the browser tests under tests/ use it.
#[cfg(test)]
use wasm_bindgen_test as _;

pub use components::admin_mode::{AdminMode, AdminModeController, AdminToast};
pub use components::counter::{CountUp, CounterController, CounterRegistry};
pub use components::faq::{FaqAccordion, FaqController};
pub use components::particle_field::{ParticleField, ParticleLoop, ParticleStyle};
pub use components::reveal::{RevealController, RevealTracker};
pub use config::EffectsConfig;

thread_local! {
	static EFFECTS: RefCell<Option<PageEffects>> = const { RefCell::new(None) };
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landing-fx: logging initialized");
}

/// Load configuration overrides from a script element with id="effects-config".
/// Falls back to defaults when the element is absent or malformed.
fn load_config(document: &Document) -> EffectsConfig {
	let Some(json_text) = document
		.get_element_by_id("effects-config")
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return EffectsConfig::default();
	};

	match EffectsConfig::from_json(&json_text) {
		Ok(config) => {
			info!("landing-fx: loaded config overrides");
			config
		}
		Err(e) => {
			warn!("landing-fx: failed to parse effects config: {}", e);
			EffectsConfig::default()
		}
	}
}

/// Every controller attached to the page. Dropping it tears them all down.
#[derive(Default)]
pub struct PageEffects {
	/// Particle canvas animation, if the page has the canvas.
	pub particles: Option<ParticleLoop>,
	/// Scroll reveal observer.
	pub reveal: Option<RevealController>,
	/// Count-up observer and its running timers.
	pub counters: Option<CounterController>,
	/// FAQ click listeners.
	pub faq: Option<FaqController>,
	/// Admin flag and toast, only in admin mode.
	pub admin: Option<AdminModeController>,
}

impl PageEffects {
	/// Attaches each controller independently. A controller that fails to
	/// attach is logged and left out; the others still run.
	pub fn attach(window: &Window, document: &Document, config: &EffectsConfig) -> Self {
		Self {
			admin: settle(
				"admin mode",
				AdminModeController::attach(window, document, &config.admin),
			),
			reveal: settle("reveal", RevealController::attach(document, &config.reveal)),
			counters: settle("counters", CounterController::attach(document, &config.counter)),
			faq: settle("faq", FaqController::attach(document, &config.faq)),
			particles: settle(
				"particles",
				ParticleLoop::attach(
					window,
					document,
					&config.particles.canvas_id,
					config.particles.style.clone(),
				),
			),
		}
	}
}

fn settle<T>(name: &str, attached: Result<Option<T>, JsValue>) -> Option<T> {
	match attached {
		Ok(Some(controller)) => Some(controller),
		Ok(None) => {
			info!("landing-fx: {} not present on this page", name);
			None
		}
		Err(e) => {
			warn!("landing-fx: failed to attach {}: {:?}", name, e);
			None
		}
	}
}

fn attach_page() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let config = load_config(&document);
	let effects = PageEffects::attach(&window, &document, &config);
	EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects));
}

/// Attaches every controller once the document is parsed. The controllers
/// live until the page unloads or [`stop`] is called.
pub fn start() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("landing-fx: no document, effects disabled");
		return;
	};

	if document.ready_state() == "loading" {
		let on_ready = Closure::once_into_js(attach_page);
		if let Err(e) =
			document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
		{
			warn!("landing-fx: could not wait for DOMContentLoaded: {:?}", e);
		}
	} else {
		attach_page();
	}
}

/// Tears down every controller attached by [`start`]. Exported to the page
/// as `stopEffects()`.
#[wasm_bindgen(js_name = stopEffects)]
pub fn stop() {
	EFFECTS.with(|slot| slot.borrow_mut().take());
}
