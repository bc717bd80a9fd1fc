//! Decorative particle canvas.
//!
//! A fixed cloud of small gold and white points drifts slowly upwards behind
//! the page content, shimmering as it goes:
//! - [`Particle`] knows how to reset, advance and paint itself
//! - [`ParticleField`] owns the particles and their run state
//! - [`ParticleLoop`] binds a field to a canvas and `requestAnimationFrame`
//!
//! # Example
//!
//! ```ignore
//! let window = web_sys::window().unwrap();
//! let document = window.document().unwrap();
//! let handle = ParticleLoop::attach(&window, &document, "particles-canvas", ParticleStyle::default())?;
//! // ... later, e.g. in a test harness
//! if let Some(handle) = handle {
//!     handle.stop();
//! }
//! ```

mod driver;
mod field;
mod particle;
mod render;
pub mod theme;

pub use driver::ParticleLoop;
pub use field::{FieldStatus, ParticleField};
pub use particle::{Bounds, ColorClass, Particle};
pub use theme::{Color, ParticleStyle};
