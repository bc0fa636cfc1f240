use crate::canvas::Canvas;
use element::WindowPoint;
use gpui::{
    App, Bounds, DispatchPhase, Element, ElementId, Entity, IntoElement, MouseButton,
    MouseMoveEvent, MouseUpEvent, Pixels, Position, Style, Window,
};

/// The drawing surface behind the canvas's elements.
///
/// Fills the canvas, records where it was painted so pointer positions can
/// be translated into canvas space, and drives the reposition interaction
/// from window-level mouse events.
pub struct CanvasSurface {
    canvas: Entity<Canvas>,
}

impl CanvasSurface {
    pub fn new(canvas: Entity<Canvas>) -> Self {
        Self { canvas }
    }
}

impl IntoElement for CanvasSurface {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for CanvasSurface {
    type RequestLayoutState = ();
    type PrepaintState = ();

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (gpui::LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.position = Position::Absolute;
        style.inset.top = gpui::relative(0.).into();
        style.inset.left = gpui::relative(0.).into();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        let layout_id = window.request_layout(style, None, cx);
        (layout_id, ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        _window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        self.canvas.update(cx, |canvas, _cx| canvas.set_bounds(bounds));
    }

    fn paint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        _prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let background = self.canvas.read(cx).theme.canvas_background;
        window.paint_quad(gpui::fill(bounds, background));

        // Moves and releases are tracked window-wide: a release outside the
        // canvas still has to end the drag.
        window.on_mouse_event({
            let canvas = self.canvas.clone();
            move |event: &MouseMoveEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble {
                    let position = WindowPoint::from(event.position);
                    canvas.update(cx, |canvas, cx| canvas.pointer_move(position, cx));
                }
            }
        });

        window.on_mouse_event({
            let canvas = self.canvas.clone();
            move |event: &MouseUpEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                    canvas.update(cx, |canvas, cx| canvas.pointer_up(cx));
                }
            }
        });
    }
}
