//! Page effect controllers. Each attaches to its own markup and runs
//! independently of the others.

pub mod admin_mode;
pub mod counter;
mod dom;
pub mod faq;
pub mod particle_field;
pub mod reveal;
