//! Count-up numbers.
//!
//! Elements carrying a positive numeric target count from zero to it the first
//! time they are half visible, then stop being observed for good.

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver};

use super::dom::{self, ObserverCallback};
use crate::config::CounterOptions;

/// Parses a count target the way the page markup is read: optional leading
/// whitespace and sign, then the longest run of digits. Trailing text is
/// ignored. Returns `None` for anything that is not a positive integer.
pub fn parse_target(raw: &str) -> Option<u32> {
	let s = raw.trim_start();
	let (negative, digits) = match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	};
	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	let value: u32 = digits[..end].parse().ok()?;
	(!negative && value > 0).then_some(value)
}

/// One running count from zero to `target`.
#[derive(Clone, Debug)]
pub struct CountUp {
	target: u32,
	current: f64,
	increment: f64,
	finished: bool,
}

impl CountUp {
	/// Count from zero to `target` in `steps` increments.
	pub fn new(target: u32, steps: u32) -> Self {
		Self {
			target,
			current: 0.0,
			increment: f64::from(target) / f64::from(steps.max(1)),
			finished: false,
		}
	}

	/// Advances one step and returns the number to display. Once the target
	/// is reached the exact target is shown and further steps return `None`.
	pub fn step(&mut self) -> Option<u32> {
		if self.finished {
			return None;
		}
		self.current += self.increment;
		if self.current >= f64::from(self.target) {
			self.finished = true;
			Some(self.target)
		} else {
			Some(self.current.floor() as u32)
		}
	}

	/// Whether the exact target has been shown.
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Final value of the count.
	pub fn target(&self) -> u32 {
		self.target
	}
}

/// Tracks which counter elements are still observed, by document index.
#[derive(Clone, Debug, Default)]
pub struct CounterRegistry {
	watched: Vec<Option<NonZeroU32>>,
}

impl CounterRegistry {
	/// Only entries with a positive target are watched; `None` and zero are
	/// kept as unwatched slots so indices still line up with the document.
	pub fn new(targets: impl IntoIterator<Item = Option<u32>>) -> Self {
		Self {
			watched: targets
				.into_iter()
				.map(|t| t.and_then(NonZeroU32::new))
				.collect(),
		}
	}

	/// Whether element `idx` can still start a count.
	pub fn is_watched(&self, idx: usize) -> bool {
		matches!(self.watched.get(idx), Some(Some(_)))
	}

	/// Number of elements that have not counted yet.
	pub fn watched_count(&self) -> usize {
		self.watched.iter().filter(|t| t.is_some()).count()
	}

	/// Starts a count when a watched element becomes visible and stops
	/// watching it, so each element counts up at most once.
	pub fn on_intersection(&mut self, idx: usize, intersecting: bool, steps: u32) -> Option<CountUp> {
		if !intersecting {
			return None;
		}
		let target = self.watched.get_mut(idx)?.take()?;
		Some(CountUp::new(target.get(), steps))
	}
}

type Ticker = Rc<RefCell<Option<Interval>>>;

/// Live count-up observer with its running timers.
pub struct CounterController {
	observer: IntersectionObserver,
	_callback: ObserverCallback,
	tickers: Rc<RefCell<Vec<Ticker>>>,
}

impl CounterController {
	/// Observes every element with a positive target. Returns `Ok(None)` when
	/// there is nothing to count.
	pub fn attach(document: &Document, options: &CounterOptions) -> Result<Option<Self>, JsValue> {
		let attribute = options.attribute.clone();
		let candidates = dom::query_all(document, &format!("[{attribute}]"))?;
		let targets: Vec<Option<u32>> = candidates
			.iter()
			.map(|el| el.get_attribute(&attribute).as_deref().and_then(parse_target))
			.collect();

		let mut registry = CounterRegistry::new(targets);
		if registry.watched_count() == 0 {
			return Ok(None);
		}
		let watched_at_start: Vec<bool> =
			(0..candidates.len()).map(|idx| registry.is_watched(idx)).collect();

		let tickers: Rc<RefCell<Vec<Ticker>>> = Rc::new(RefCell::new(Vec::new()));
		let (tickers_cb, opts) = (tickers.clone(), options.clone());
		let watched = candidates.clone();
		let (observer, callback) = dom::intersection_observer(
			options.threshold,
			None,
			move |observer, target: Element, intersecting| {
				let Some(idx) = dom::index_of(&watched, &target) else {
					return;
				};
				if let Some(count) = registry.on_intersection(idx, intersecting, opts.steps) {
					observer.unobserve(&target);
					debug!("landing-fx: counting up to {}", count.target());
					tickers_cb
						.borrow_mut()
						.push(start_count(target, count, &opts));
				}
			},
		)?;

		let mut observed = 0;
		for (idx, el) in candidates.iter().enumerate() {
			if watched_at_start[idx] {
				observer.observe(el);
				observed += 1;
			}
		}
		info!("landing-fx: watching {observed} counters");

		Ok(Some(Self {
			observer,
			_callback: callback,
			tickers,
		}))
	}
}

/// Writes each step into the element until the count finishes, then drops
/// its own interval.
fn start_count(el: Element, mut count: CountUp, options: &CounterOptions) -> Ticker {
	let ticker: Ticker = Rc::new(RefCell::new(None));
	let (slot, suffix) = (ticker.clone(), options.suffix.clone());
	*ticker.borrow_mut() = Some(Interval::new(options.interval_ms, move || {
		if let Some(value) = count.step() {
			el.set_text_content(Some(&format!("{value}{suffix}")));
		}
		if count.is_finished() {
			slot.borrow_mut().take();
		}
	}));
	ticker
}

impl Drop for CounterController {
	fn drop(&mut self) {
		self.observer.disconnect();
		for ticker in self.tickers.borrow_mut().drain(..) {
			ticker.borrow_mut().take();
		}
	}
}
