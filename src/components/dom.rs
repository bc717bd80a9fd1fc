//! Small web-sys helpers shared by the controllers.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Intersection callback as handed to the browser.
pub type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	let list = document.query_selector_all(selector)?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Creates an intersection observer that forwards `(target, is_intersecting)`
/// pairs to `on_entry`. The closure must outlive the observer.
pub fn intersection_observer(
	threshold: f64,
	root_margin: Option<&str>,
	mut on_entry: impl FnMut(&IntersectionObserver, Element, bool) + 'static,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
	let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
				continue;
			};
			on_entry(&observer, entry.target(), entry.is_intersecting());
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(threshold));
	if let Some(margin) = root_margin {
		options.set_root_margin(margin);
	}
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	Ok((observer, callback))
}

/// Position of `target` in `elements`, compared by identity.
pub fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
	elements.iter().position(|el| el == target)
}
