//! The Easel canvas.
//!
//! A bounded surface that accepts drops from the palette and the OS,
//! renders placed elements, and lets the user drag them around.

mod canvas;
mod drop;
mod state;
mod surface;

pub use canvas::{Canvas, PaletteDrag, DEFAULT_CANVAS_HEIGHT};
pub use drop::{DropOutcome, DropPayload, DroppedFile, IgnoreReason};
pub use state::{CanvasEvent, CanvasState, Interaction};
pub use surface::CanvasSurface;
// Re-export the model for convenience
pub use element::{
    CanvasDelta, CanvasPoint, Element, ElementContent, ElementId, ElementKind, ElementRegistry,
    WindowPoint,
};
