//! UI components for Easel.

mod components;
mod palette;

pub use components::{button, h_stack, panel, v_stack};
pub use palette::{DragPreview, Palette};
