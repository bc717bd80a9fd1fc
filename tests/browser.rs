//! DOM wiring checks; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]
// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use gloo_timers::future::TimeoutFuture;
use landing_fx::config::AdminOptions;
use landing_fx::{AdminModeController, ParticleLoop, ParticleStyle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlCanvasElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> (Window, Document) {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	(window, document)
}

fn toast_count(document: &Document) -> u32 {
	document.query_selector_all(".admin-toast").unwrap().length()
}

#[wasm_bindgen_test]
async fn admin_toast_appears_once_and_leaves_after_five_seconds() {
	let (_, document) = page();
	let options = AdminOptions::default();
	let body = document.body().unwrap();

	let controller = AdminModeController::attach_with_value(&document, Some("admin"), &options)
		.unwrap()
		.expect("admin mode should attach");
	assert!(body.class_list().contains("admin-mode"));
	assert_eq!(toast_count(&document), 1);

	TimeoutFuture::new(4_800).await;
	assert_eq!(toast_count(&document), 1);
	TimeoutFuture::new(400).await;
	assert_eq!(toast_count(&document), 0);
	assert!(body.class_list().contains("admin-mode"));

	drop(controller);
	body.class_list().remove_1("admin-mode").unwrap();
}

#[wasm_bindgen_test]
fn no_admin_value_leaves_page_untouched() {
	let (_, document) = page();
	let attached =
		AdminModeController::attach_with_value(&document, Some("user"), &AdminOptions::default())
			.unwrap();
	assert!(attached.is_none());
	assert_eq!(toast_count(&document), 0);
	assert!(!document.body().unwrap().class_list().contains("admin-mode"));
}

#[wasm_bindgen_test]
fn missing_canvas_skips_particles() {
	let (window, document) = page();
	let attached =
		ParticleLoop::attach(&window, &document, "no-such-canvas", ParticleStyle::default()).unwrap();
	assert!(attached.is_none());
}

#[wasm_bindgen_test]
async fn particle_canvas_tracks_viewport_and_stops() {
	let (window, document) = page();
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	canvas.set_id("test-particles");
	document.body().unwrap().append_child(&canvas).unwrap();

	let handle = ParticleLoop::attach(&window, &document, "test-particles", ParticleStyle::default())
		.unwrap()
		.expect("canvas is present");
	let viewport_width = window.inner_width().unwrap().as_f64().unwrap() as u32;
	assert_eq!(canvas.width(), viewport_width);
	assert!(handle.is_running());

	canvas.set_width(1);
	window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
	assert_eq!(canvas.width(), viewport_width);

	TimeoutFuture::new(50).await;
	handle.stop();
	assert!(!handle.is_running());

	drop(handle);
	canvas.set_width(1);
	window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
	assert_eq!(canvas.width(), 1);
	canvas.remove();
}
