//! Canvas painting for the particle field.

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;

/// Clears the canvas and advances the field by one frame, drawing each
/// particle as soon as it has moved. Returns whether to schedule another frame.
pub fn frame(field: &mut ParticleField, ctx: &CanvasRenderingContext2d, now_ms: f64) -> bool {
	let bounds = field.bounds();
	ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	field.tick(now_ms, |p, style| p.draw(ctx, style))
}
