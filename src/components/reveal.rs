//! Scroll reveal: marker elements gain a visibility class the first time they
//! scroll into view. Reveal is one-way; leaving the viewport changes nothing.

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver};

use super::dom::{self, ObserverCallback};
use crate::config::RevealOptions;

/// Which watched elements have been revealed, by document index.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
	revealed: Vec<bool>,
}

impl RevealTracker {
	/// `len` elements, none revealed.
	pub fn new(len: usize) -> Self {
		Self {
			revealed: vec![false; len],
		}
	}

	/// Records an intersection change. Returns `true` when the element must
	/// gain the visibility class now.
	pub fn on_intersection(&mut self, idx: usize, intersecting: bool) -> bool {
		match self.revealed.get_mut(idx) {
			Some(revealed) if intersecting && !*revealed => {
				*revealed = true;
				true
			}
			_ => false,
		}
	}

	/// Whether element `idx` has been revealed.
	pub fn is_revealed(&self, idx: usize) -> bool {
		self.revealed.get(idx).copied().unwrap_or(false)
	}

	/// Number of revealed elements.
	pub fn revealed_count(&self) -> usize {
		self.revealed.iter().filter(|r| **r).count()
	}
}

/// Live reveal observer. Disconnects on drop.
pub struct RevealController {
	observer: IntersectionObserver,
	_callback: ObserverCallback,
}

impl RevealController {
	/// Observes every marker element. Returns `Ok(None)` when the page has none.
	pub fn attach(document: &Document, options: &RevealOptions) -> Result<Option<Self>, JsValue> {
		let elements = dom::query_all(document, &options.selector())?;
		if elements.is_empty() {
			return Ok(None);
		}

		let mut tracker = RevealTracker::new(elements.len());
		let watched = elements.clone();
		let visible_class = options.visible_class.clone();
		let (observer, callback) = dom::intersection_observer(
			options.threshold,
			Some(&options.root_margin),
			move |_, target: Element, intersecting| {
				let Some(idx) = dom::index_of(&watched, &target) else {
					return;
				};
				if tracker.on_intersection(idx, intersecting) {
					let _ = target.class_list().add_1(&visible_class);
				}
			},
		)?;

		for el in &elements {
			observer.observe(el);
		}
		info!("landing-fx: watching {} reveal elements", elements.len());

		Ok(Some(Self {
			observer,
			_callback: callback,
		}))
	}
}

impl Drop for RevealController {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
