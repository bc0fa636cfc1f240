use crate::coords::CanvasPoint;
use crate::ElementId;
use gpui::Hsla;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Image shown for image elements created from the palette.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Label given to button elements created from the palette.
pub const DEFAULT_BUTTON_TEXT: &str = "Click Me";

/// Font size in pixels applied to new elements.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// The kind of element. Closed set; one render rule per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Button,
}

impl ElementKind {
    /// Label shown on the palette token for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Button => "Button",
        }
    }

    /// Content for a freshly created element of this kind.
    pub fn default_content(&self) -> ElementContent {
        match self {
            ElementKind::Text => ElementContent::Text {
                text: String::new(),
            },
            ElementKind::Image => ElementContent::Image {
                image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            },
            ElementKind::Button => ElementContent::Button {
                button_text: DEFAULT_BUTTON_TEXT.to_string(),
            },
        }
    }
}

/// Type-specific display data.
///
/// Only the field belonging to the element's kind exists, so there is no
/// inert placeholder data to keep in sync.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    Text {
        text: String,
    },
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    Button {
        #[serde(rename = "buttonText")]
        button_text: String,
    },
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text { .. } => ElementKind::Text,
            ElementContent::Image { .. } => ElementKind::Image,
            ElementContent::Button { .. } => ElementKind::Button,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ElementContent::Text { text: text.into() }
    }

    pub fn image(image_url: impl Into<String>) -> Self {
        ElementContent::Image {
            image_url: image_url.into(),
        }
    }

    pub fn button(button_text: impl Into<String>) -> Self {
        ElementContent::Button {
            button_text: button_text.into(),
        }
    }
}

/// Styling shared by every kind of element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    pub font_size: f32,
    #[serde(with = "hex_color")]
    pub color: Hsla,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color: gpui::rgb(0x333333).into(),
        }
    }
}

/// An element placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub content: ElementContent,
    /// Top-left corner in canvas space.
    pub position: CanvasPoint,
    pub style: ElementStyle,
}

impl Element {
    pub fn new(id: ElementId, content: ElementContent, position: CanvasPoint) -> Self {
        Self {
            id,
            content,
            position,
            style: ElementStyle::default(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Copy of this element at a new position.
    pub fn moved_to(&self, position: CanvasPoint) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

/// Serializes colors as `#rrggbb` (or `#rrggbbaa` when translucent).
mod hex_color {
    use gpui::{Hsla, Rgba};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Hsla, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hsla, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s)
            .map(Hsla::from)
            .ok_or_else(|| de::Error::custom(format!("invalid hex color: {s}")))
    }

    pub(super) fn to_hex(color: Hsla) -> String {
        let rgba: Rgba = color.into();
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(rgba.r),
            channel(rgba.g),
            channel(rgba.b),
            channel(rgba.a),
        );
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
    pub(super) fn parse_hex(s: &str) -> Option<Rgba> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).chain("ff".chars()).collect(),
            6 => format!("{hex}ff"),
            8 => hex.to_string(),
            _ => return None,
        };
        let value = u32::from_str_radix(&expanded, 16).ok()?;
        Some(gpui::rgba(value))
    }
}
