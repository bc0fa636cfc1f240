//! Minimal theming for Easel.
//!
//! Provides colors for the canvas, the palette and the chrome around them.

use gpui::Hsla;
use strum_macros::{Display, EnumString};

/// Light or dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Theme colors for the canvas editor.
#[derive(Clone, Debug)]
pub struct Theme {
    pub appearance: Appearance,

    /// Canvas background
    pub canvas_background: Hsla,

    /// Canvas border
    pub canvas_border: Hsla,

    /// Canvas border while a palette token hovers over it
    pub drop_target: Hsla,

    /// Outline around the element being dragged
    pub drag_indicator: Hsla,

    /// Hover indicator color
    pub hover: Hsla,

    /// Background of button elements
    pub element_button_background: Hsla,

    /// Border of button elements
    pub element_button_border: Hsla,

    /// UI background
    pub ui_background: Hsla,

    /// UI border
    pub ui_border: Hsla,

    /// UI text
    pub ui_text: Hsla,

    /// UI text muted
    pub ui_text_muted: Hsla,

    /// Primary action (submit)
    pub accent: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            canvas_background: gpui::white(),
            canvas_border: hsla(0.0, 0.0, 0.87, 1.0), // #ddd
            drop_target: hsla(0.58, 0.9, 0.5, 1.0),   // Blue
            drag_indicator: hsla(0.58, 0.9, 0.5, 1.0),
            hover: hsla(0.58, 0.9, 0.5, 0.3), // Blue transparent
            element_button_background: hsla(0.0, 0.0, 0.94, 1.0),
            element_button_border: hsla(0.0, 0.0, 0.7, 1.0),
            ui_background: hsla(0.0, 0.0, 0.98, 1.0),
            ui_border: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text: hsla(0.0, 0.0, 0.1, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
            accent: hsla(0.58, 0.8, 0.45, 1.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            canvas_background: hsla(0.0, 0.0, 0.1, 1.0),
            canvas_border: hsla(0.0, 0.0, 0.25, 1.0),
            drop_target: hsla(0.58, 0.9, 0.6, 1.0),
            drag_indicator: hsla(0.58, 0.9, 0.6, 1.0),
            hover: hsla(0.58, 0.9, 0.5, 0.3),
            element_button_background: hsla(0.0, 0.0, 0.2, 1.0),
            element_button_border: hsla(0.0, 0.0, 0.35, 1.0),
            ui_background: hsla(0.0, 0.0, 0.12, 1.0),
            ui_border: hsla(0.0, 0.0, 0.2, 1.0),
            ui_text: hsla(0.0, 0.0, 0.9, 1.0),
            ui_text_muted: hsla(0.0, 0.0, 0.5, 1.0),
            accent: hsla(0.58, 0.8, 0.55, 1.0),
        }
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
