//! Basic UI components.

use gpui::{div, prelude::*, px, Div, ElementId, Hsla, SharedString, Stateful};
use theme::Theme;

/// Horizontal stack layout.
pub fn h_stack() -> Div {
    div().flex().flex_row().items_center()
}

/// Vertical stack layout.
pub fn v_stack() -> Div {
    div().flex().flex_col()
}

/// A panel container with background and border.
pub fn panel(theme: &Theme) -> Div {
    div()
        .bg(theme.ui_background)
        .border_1()
        .border_color(theme.ui_border)
        .rounded(px(8.0))
        .p(px(8.0))
}

/// A simple button. Callers attach `on_click`.
pub fn button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    background: Hsla,
    text: Hsla,
) -> Stateful<Div> {
    let label = label.into();
    let hover_bg = background.opacity(0.85);

    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .bg(background)
        .rounded(px(4.0))
        .text_color(text)
        .text_sm()
        .cursor_pointer()
        .hover(move |d| d.bg(hover_bg))
        .child(label)
}
