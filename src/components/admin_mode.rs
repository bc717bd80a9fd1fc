//! Admin mode: `?mode=admin` flags the page body and flashes a toast.
//!
//! This is a display switch only; it grants nothing.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, UrlSearchParams, Window};

use crate::config::AdminOptions;

/// Admin-mode display state for one page load.
#[derive(Clone, Debug)]
pub struct AdminMode {
	requested: bool,
	body_flag: bool,
	toast_shown_at: Option<f64>,
	toasts_shown: usize,
	toast_ms: f64,
}

impl AdminMode {
	/// `value` is the decoded query parameter named by `options.param`, if present.
	pub fn from_value(value: Option<&str>, options: &AdminOptions) -> Self {
		let requested = value == Some(options.value.as_str());
		Self {
			requested,
			body_flag: false,
			toast_shown_at: None,
			toasts_shown: 0,
			toast_ms: f64::from(options.toast_ms),
		}
	}

	/// Whether the page was opened with the admin parameter.
	pub fn is_requested(&self) -> bool {
		self.requested
	}

	/// Whether the body carries the admin marker class.
	pub fn body_flag(&self) -> bool {
		self.body_flag
	}

	/// Whether the admin toast is currently on the page.
	pub fn toast_visible(&self) -> bool {
		self.toast_shown_at.is_some()
	}

	/// How many toasts have been shown this page load.
	pub fn toasts_shown(&self) -> usize {
		self.toasts_shown
	}

	/// Turns admin mode on if the query asked for it. Returns `true` only on
	/// the call that actually flags the body and shows the toast.
	pub fn activate(&mut self, now_ms: f64) -> bool {
		if !self.requested || self.body_flag {
			return false;
		}
		self.body_flag = true;
		self.toast_shown_at = Some(now_ms);
		self.toasts_shown += 1;
		true
	}

	/// Removes the toast once its lifetime has passed. Returns `true` when
	/// this call removed it.
	pub fn expire(&mut self, now_ms: f64) -> bool {
		match self.toast_shown_at {
			Some(shown) if now_ms - shown >= self.toast_ms => {
				self.toast_shown_at = None;
				true
			}
			_ => false,
		}
	}

	/// Removes the toast regardless of elapsed time, e.g. when its timer fires
	/// but the wall clock has moved backwards. Returns `true` if one was visible.
	pub fn dismiss(&mut self) -> bool {
		self.toast_shown_at.take().is_some()
	}
}

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
	background: var(--navy); color: var(--white); padding: 12px 24px; \
	border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.2); \
	z-index: 9999; font-size: 0.9rem;";

/// Transient admin notice pinned to the bottom-right corner.
#[component]
pub fn AdminToast(#[prop(into)] message: String) -> impl IntoView {
	view! {
		<div class="admin-toast" role="status" style=TOAST_STYLE>
			{message}
		</div>
	}
}

/// Applies admin mode to the live page. Dropping it early removes the toast.
pub struct AdminModeController {
	_dismiss: Timeout,
}

impl AdminModeController {
	/// Reads the admin parameter from the page URL. Returns `Ok(None)` when
	/// the page was not opened in admin mode.
	pub fn attach(
		window: &Window,
		document: &Document,
		options: &AdminOptions,
	) -> Result<Option<Self>, JsValue> {
		let params = UrlSearchParams::new_with_str(&window.location().search()?)?;
		Self::attach_with_value(document, params.get(&options.param).as_deref(), options)
	}

	/// Applies admin mode for an already-read parameter value.
	pub fn attach_with_value(
		document: &Document,
		value: Option<&str>,
		options: &AdminOptions,
	) -> Result<Option<Self>, JsValue> {
		let mut mode = AdminMode::from_value(value, options);
		if !mode.activate(js_sys::Date::now()) {
			return Ok(None);
		}
		let body = document
			.body()
			.ok_or_else(|| JsValue::from_str("document has no body"))?;

		info!("landing-fx: admin mode activated");
		body.class_list().add_1(&options.body_class)?;

		let message = options.message.clone();
		let toast = leptos::mount::mount_to(body, move || view! { <AdminToast message=message /> });

		let dismiss = Timeout::new(options.toast_ms, move || {
			if !mode.expire(js_sys::Date::now()) {
				mode.dismiss();
			}
			debug_assert!(!mode.toast_visible());
			drop(toast);
		});

		Ok(Some(Self { _dismiss: dismiss }))
	}
}
