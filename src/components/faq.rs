//! FAQ accordion: clicking a question opens its answer and closes any other.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use super::dom;
use crate::config::FaqOptions;

/// Which question/answer pair is open. At most one is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
	len: usize,
	open: Option<usize>,
}

impl FaqAccordion {
	/// `len` pairs, all closed.
	pub fn new(len: usize) -> Self {
		Self { len, open: None }
	}

	/// Starts with `open` already expanded, e.g. from server-rendered markup.
	pub fn with_open(len: usize, open: Option<usize>) -> Self {
		Self {
			len,
			open: open.filter(|&i| i < len),
		}
	}

	/// Index of the open pair, if any.
	pub fn open(&self) -> Option<usize> {
		self.open
	}

	/// Whether pair `idx` is open.
	pub fn is_open(&self, idx: usize) -> bool {
		self.open == Some(idx)
	}

	/// Handles a click on question `idx`. An open question closes; a closed one
	/// opens and closes whatever was open. Returns the pair open afterwards.
	pub fn toggle(&mut self, idx: usize) -> Option<usize> {
		if idx >= self.len {
			return self.open;
		}
		self.open = if self.is_open(idx) { None } else { Some(idx) };
		self.open
	}
}

/// Click wiring for the page's question/answer pairs.
pub struct FaqController {
	questions: Vec<Element>,
	listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl FaqController {
	/// Returns `Ok(None)` when the page has no FAQ.
	pub fn attach(document: &Document, options: &FaqOptions) -> Result<Option<Self>, JsValue> {
		let questions = dom::query_all(document, &options.question_selector)?;
		if questions.is_empty() {
			return Ok(None);
		}
		let answers: Vec<Option<Element>> =
			questions.iter().map(Element::next_element_sibling).collect();

		let initially_open = answers.iter().position(|a| {
			a.as_ref()
				.is_some_and(|a| a.class_list().contains(&options.open_class))
		});
		let state = Rc::new(RefCell::new(FaqAccordion::with_open(questions.len(), initially_open)));

		let mut listeners = Vec::with_capacity(questions.len());
		for (idx, question) in questions.iter().enumerate() {
			let (state, document, options) = (state.clone(), document.clone(), options.clone());
			let (question_el, answer_el) = (question.clone(), answers[idx].clone());
			let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
				let open = state.borrow_mut().toggle(idx);
				if let Err(e) = apply(&document, &options, open.map(|_| (&question_el, &answer_el))) {
					warn!("landing-fx: faq toggle failed: {:?}", e);
				}
			});
			question.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
			listeners.push(listener);
		}
		info!("landing-fx: faq with {} questions", questions.len());

		Ok(Some(Self {
			questions,
			listeners,
		}))
	}
}

/// Clears every open answer and active question on the page, then marks the
/// given pair.
fn apply(
	document: &Document,
	options: &FaqOptions,
	open: Option<(&Element, &Option<Element>)>,
) -> Result<(), JsValue> {
	for answer in dom::query_all(document, &options.answer_selector)? {
		answer.class_list().remove_1(&options.open_class)?;
	}
	for question in dom::query_all(document, &options.question_selector)? {
		question.class_list().remove_1(&options.active_class)?;
	}
	if let Some((question, answer)) = open {
		if let Some(answer) = answer {
			answer.class_list().add_1(&options.open_class)?;
		}
		question.class_list().add_1(&options.active_class)?;
	}
	Ok(())
}

impl Drop for FaqController {
	fn drop(&mut self) {
		for (question, listener) in self.questions.iter().zip(&self.listeners) {
			let _ = question
				.remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
		}
	}
}
