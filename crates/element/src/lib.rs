//! Element model for Easel.
//!
//! A flat list of elements placed on a single canvas. Elements are
//! rendered in insertion order and carry no hierarchy.

pub mod coords;
mod element;
mod element_id;
mod registry;

pub use coords::{CanvasDelta, CanvasPoint, WindowPoint};
pub use element::{
    Element, ElementContent, ElementKind, ElementStyle, DEFAULT_BUTTON_TEXT, DEFAULT_FONT_SIZE,
    PLACEHOLDER_IMAGE_URL,
};
pub use element_id::ElementId;
pub use registry::ElementRegistry;
