use crate::drop::{local_path, DropPayload};
use crate::state::{CanvasEvent, CanvasState};
use crate::surface::CanvasSurface;
use element::{CanvasPoint, Element, ElementContent, ElementId, ElementKind, WindowPoint};
use gpui::{
    div, img, prelude::*, px, AnyElement, Bounds, Context, EventEmitter, ExternalPaths,
    ImageSource, IntoElement, MouseButton, MouseDownEvent, Pixels, Render, SharedString, Window,
};
use theme::Theme;

/// Height of the canvas in pixels unless configured otherwise.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;

/// Width images are rendered at; height follows the aspect ratio.
const IMAGE_WIDTH: f32 = 100.0;

/// Drag value carried by a palette token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteDrag {
    pub kind: ElementKind,
}

/// The canvas view.
///
/// Owns the [`CanvasState`] and replaces it wholesale on every input.
pub struct Canvas {
    state: CanvasState,

    /// Where the surface was last painted, in window coordinates.
    bounds: Option<Bounds<Pixels>>,

    /// Last pointer position seen inside the canvas.
    last_pointer: Option<WindowPoint>,

    height: f32,

    /// Theme colors.
    pub theme: Theme,
}

impl Canvas {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: CanvasState::new(),
            bounds: None,
            last_pointer: None,
            height: DEFAULT_CANVAS_HEIGHT,
            theme,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn elements(&self) -> &[Element] {
        self.state.elements()
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    /// Window position of the canvas's top-left corner.
    fn origin(&self) -> WindowPoint {
        self.bounds
            .map(|b| WindowPoint::from(b.origin))
            .unwrap_or_default()
    }

    pub fn to_canvas_point(&self, position: WindowPoint) -> CanvasPoint {
        CanvasPoint::from_window(position, self.origin())
    }

    fn contains(&self, position: WindowPoint) -> bool {
        let Some(bounds) = self.bounds else {
            return true;
        };
        bounds.contains(&gpui::point(px(position.x()), px(position.y())))
    }

    /// A palette drag started.
    pub fn arm(&mut self, kind: ElementKind, cx: &mut Context<Self>) {
        log::debug!("armed {kind}");
        self.state = self.state.arm(kind);
        cx.notify();
    }

    /// Something was dropped at a window position.
    pub fn drop_payload(
        &mut self,
        payload: DropPayload,
        position: WindowPoint,
        cx: &mut Context<Self>,
    ) {
        let at = self.to_canvas_point(position);
        let (state, event) = self.state.drop_payload(&payload, at);
        self.replace(state, Some(event), cx);
    }

    /// Place clipboard text where the pointer was last seen on the canvas.
    pub fn paste_text(&mut self, text: String, cx: &mut Context<Self>) {
        let position = self.last_pointer.unwrap_or_else(|| self.origin());
        self.drop_payload(DropPayload::text(text), position, cx);
    }

    pub fn pointer_down(
        &mut self,
        id: ElementId,
        position: WindowPoint,
        cx: &mut Context<Self>,
    ) {
        let at = self.to_canvas_point(position);
        let (state, event) = self.state.pointer_down(id, at);
        self.replace(state, event, cx);
    }

    pub fn pointer_move(&mut self, position: WindowPoint, cx: &mut Context<Self>) {
        if !self.contains(position) {
            if self.state.dragging_id().is_some() {
                let (state, event) = self.state.pointer_leave();
                self.replace(state, event, cx);
            }
            return;
        }

        self.last_pointer = Some(position);
        if self.state.dragging_id().is_none() {
            return;
        }
        let at = self.to_canvas_point(position);
        let (state, event) = self.state.pointer_move(at);
        self.replace(state, event, cx);
    }

    pub fn pointer_up(&mut self, cx: &mut Context<Self>) {
        if self.state.dragging_id().is_none() && self.state.armed().is_none() {
            return;
        }
        let (state, event) = self.state.pointer_up();
        self.replace(state, event, cx);
    }

    fn replace(&mut self, state: CanvasState, event: Option<CanvasEvent>, cx: &mut Context<Self>) {
        let changed = state != self.state;
        self.state = state;
        if let Some(event) = event {
            match &event {
                CanvasEvent::DropIgnored(reason) => log::info!("{reason}"),
                CanvasEvent::ElementMoved(_) => {}
                other => log::debug!("{other:?}"),
            }
            cx.emit(event);
        }
        if changed {
            cx.notify();
        }
    }
}

impl EventEmitter<CanvasEvent> for Canvas {}

impl Render for Canvas {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme.clone();
        let drop_target = theme.drop_target;
        let dragging = self.state.dragging_id();

        let elements: Vec<AnyElement> = self
            .state
            .elements()
            .iter()
            .map(|element| {
                let id = element.id;
                let is_dragging = dragging == Some(id);
                div()
                    .absolute()
                    .left(px(element.position.x))
                    .top(px(element.position.y))
                    .text_size(px(element.style.font_size))
                    .text_color(element.style.color)
                    .cursor_pointer()
                    .border_1()
                    .border_color(if is_dragging {
                        theme.drag_indicator
                    } else {
                        gpui::transparent_black()
                    })
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |canvas, event: &MouseDownEvent, _window, cx| {
                            canvas.pointer_down(id, WindowPoint::from(event.position), cx);
                            cx.stop_propagation();
                        }),
                    )
                    .child(render_content(&element.content, &theme))
                    .into_any_element()
            })
            .collect();

        div()
            .id("canvas")
            .relative()
            .w_full()
            .h(px(self.height))
            .overflow_hidden()
            .border_2()
            .border_color(theme.canvas_border)
            .drag_over::<PaletteDrag>(move |style, _, _, _| style.border_color(drop_target))
            .drag_over::<ExternalPaths>(move |style, _, _, _| style.border_color(drop_target))
            .on_drop(cx.listener(|canvas, drag: &PaletteDrag, window, cx| {
                let position = WindowPoint::from(window.mouse_position());
                canvas.drop_payload(DropPayload::palette(drag.kind), position, cx);
            }))
            .on_drop(cx.listener(|canvas, paths: &ExternalPaths, window, cx| {
                let position = WindowPoint::from(window.mouse_position());
                canvas.drop_payload(DropPayload::from_paths(paths.paths()), position, cx);
            }))
            .child(CanvasSurface::new(cx.entity()))
            .children(elements)
    }
}

/// One render rule per kind of content.
fn render_content(content: &ElementContent, theme: &Theme) -> AnyElement {
    match content {
        ElementContent::Text { text } => div()
            .min_w(px(24.0))
            .min_h(px(16.0))
            .child(SharedString::from(text.clone()))
            .into_any_element(),
        ElementContent::Image { image_url } => img(image_source(image_url))
            .w(px(IMAGE_WIDTH))
            .into_any_element(),
        ElementContent::Button { button_text } => div()
            .px(px(12.0))
            .py(px(6.0))
            .bg(theme.element_button_background)
            .border_1()
            .border_color(theme.element_button_border)
            .rounded(px(4.0))
            .child(SharedString::from(button_text.clone()))
            .into_any_element(),
    }
}

fn image_source(url: &str) -> ImageSource {
    match local_path(url) {
        Some(path) => path.into(),
        None => SharedString::from(url.to_string()).into(),
    }
}
