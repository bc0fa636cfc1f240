//! Palette of element types that can be dragged onto the canvas.

use assets::Assets;
use canvas::{Canvas, PaletteDrag};
use element::ElementKind;
use gpui::{
    div, prelude::*, px, svg, Context, Div, ElementId, Entity, IntoElement, Render, SharedString,
    Stateful, Subscription, Window,
};
use strum::IntoEnumIterator;
use theme::Theme;

use crate::panel;

/// Row of draggable tokens, one per element kind.
pub struct Palette {
    canvas: Entity<Canvas>,
    theme: Theme,
    _canvas_observer: Subscription,
}

impl Palette {
    pub fn new(canvas: Entity<Canvas>, theme: Theme, cx: &mut Context<Self>) -> Self {
        // Re-render when the armed kind changes.
        let _canvas_observer = cx.observe(&canvas, |_, _, cx| cx.notify());
        Self {
            canvas,
            theme,
            _canvas_observer,
        }
    }
}

impl Render for Palette {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let armed = self.canvas.read(cx).state().armed();

        panel(&self.theme)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(8.0))
            .children(ElementKind::iter().map(|kind| {
                PaletteToken::new(
                    kind,
                    armed == Some(kind),
                    self.theme.clone(),
                    self.canvas.clone(),
                )
            }))
    }
}

fn icon_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Text => "type",
        ElementKind::Image => "image",
        ElementKind::Button => "button",
    }
}

/// A single draggable token.
struct PaletteToken {
    id: ElementId,
    kind: ElementKind,
    is_armed: bool,
    theme: Theme,
    canvas: Entity<Canvas>,
}

impl PaletteToken {
    fn new(kind: ElementKind, is_armed: bool, theme: Theme, canvas: Entity<Canvas>) -> Self {
        Self {
            id: ElementId::Name(SharedString::from(format!("palette-{kind}"))),
            kind,
            is_armed,
            theme,
            canvas,
        }
    }
}

impl IntoElement for PaletteToken {
    type Element = Stateful<Div>;

    fn into_element(self) -> Self::Element {
        let border_color = if self.is_armed {
            self.theme.drop_target
        } else {
            self.theme.ui_border
        };
        let hover_bg = self.theme.hover;
        let theme = self.theme.clone();
        let canvas = self.canvas;

        div()
            .id(self.id)
            .flex()
            .flex_row()
            .items_center()
            .gap(px(6.0))
            .px(px(10.0))
            .py(px(6.0))
            .bg(self.theme.ui_background)
            .border_1()
            .border_color(border_color)
            .rounded(px(4.0))
            .cursor_grab()
            .hover(move |d| d.bg(hover_bg))
            .on_drag(
                PaletteDrag { kind: self.kind },
                move |drag: &PaletteDrag, _offset, _window, cx| {
                    let kind = drag.kind;
                    canvas.update(cx, |canvas, cx| canvas.arm(kind, cx));
                    let theme = theme.clone();
                    cx.new(|_| DragPreview { kind, theme })
                },
            )
            .child(
                svg()
                    .path(Assets::icon_path(icon_name(self.kind)))
                    .size(px(14.0))
                    .text_color(self.theme.ui_text_muted),
            )
            .child(format!("Drag {}", self.kind.label()))
    }
}

/// What follows the pointer while a token is dragged.
pub struct DragPreview {
    kind: ElementKind,
    theme: Theme,
}

impl Render for DragPreview {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px(px(10.0))
            .py(px(6.0))
            .bg(self.theme.ui_background.opacity(0.9))
            .border_1()
            .border_color(self.theme.drop_target)
            .rounded(px(4.0))
            .text_color(self.theme.ui_text)
            .child(self.kind.label())
    }
}
