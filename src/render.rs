//! Rendering seam
//!
//! The simulation knows nothing about pixels; frontends implement
//! [`Renderer`] and draw from the state snapshot after each tick.

use crate::sim::GameState;

/// One frame of drawing from a state snapshot
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Renderer that draws nothing, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}
