//! Browser wiring for the particle field.
//!
//! Sizes the canvas to the viewport, keeps it in sync on `resize`, and drives
//! the field from a self-rescheduling `requestAnimationFrame` callback. The
//! returned [`ParticleLoop`] owns every closure handed to the browser, so
//! stopping or dropping it is enough to end the animation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use super::field::{FieldStatus, ParticleField};
use super::particle::Bounds;
use super::render;
use super::theme::ParticleStyle;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running particle animation.
pub struct ParticleLoop {
	window: Window,
	field: Rc<RefCell<ParticleField>>,
	animate: FrameCallback,
	pending_frame: Rc<Cell<Option<i32>>>,
	resize_cb: Closure<dyn FnMut()>,
}

impl ParticleLoop {
	/// Starts the field on the canvas with the given id.
	///
	/// Returns `Ok(None)` when the page has no such canvas, in which case no
	/// particles are created and no loop is scheduled.
	pub fn attach(
		window: &Window,
		document: &Document,
		canvas_id: &str,
		style: ParticleStyle,
	) -> Result<Option<Self>, JsValue> {
		let Some(element) = document.get_element_by_id(canvas_id) else {
			return Ok(None);
		};
		let canvas: HtmlCanvasElement = element.dyn_into()?;
		Self::start(window, canvas, style).map(Some)
	}

	/// Starts the field on an existing canvas, sized to the viewport.
	pub fn start(
		window: &Window,
		canvas: HtmlCanvasElement,
		style: ParticleStyle,
	) -> Result<Self, JsValue> {
		let bounds = viewport(window)?;
		apply_size(&canvas, bounds);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
			.dyn_into()?;

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let field = Rc::new(RefCell::new(ParticleField::new(
			style,
			bounds,
			SmallRng::seed_from_u64(seed),
		)));
		info!(
			"landing-fx: particle field started with {} particles at {}x{}",
			field.borrow().particles().len(),
			bounds.width,
			bounds.height
		);

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Ok(bounds) = viewport(&win) {
				apply_size(&canvas_resize, bounds);
				field_resize.borrow_mut().resize(bounds);
			}
		});
		window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

		let animate: FrameCallback = Rc::new(RefCell::new(None));
		let pending_frame = Rc::new(Cell::new(None));
		let (field_anim, animate_inner, pending_inner) =
			(field.clone(), animate.clone(), pending_frame.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			let again = render::frame(&mut field_anim.borrow_mut(), &ctx, js_sys::Date::now());
			if !again {
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					pending_inner.set(Some(id));
				}
			}
		}));

		if let Some(ref cb) = *animate.borrow() {
			pending_frame.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(Self {
			window: window.clone(),
			field,
			animate,
			pending_frame,
			resize_cb,
		})
	}

	/// Whether frames are still being scheduled.
	pub fn is_running(&self) -> bool {
		self.field.borrow().status() == FieldStatus::Running
	}

	/// Cancels the next frame and releases the frame callback.
	pub fn stop(&self) {
		if !self.is_running() {
			return;
		}
		self.field.borrow_mut().stop();
		if let Some(id) = self.pending_frame.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.animate.borrow_mut().take();
		debug!("landing-fx: particle loop stopped");
	}
}

impl Drop for ParticleLoop {
	fn drop(&mut self) {
		self.stop();
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
	}
}

fn viewport(window: &Window) -> Result<Bounds, JsValue> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(Bounds::new(width, height))
}

fn apply_size(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width as u32);
	canvas.set_height(bounds.height as u32);
}
