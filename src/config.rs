//! Render configuration with environment overrides.

use std::str::FromStr;

use crate::Pt;
use crate::geom::PixelPoint;

/// Fill color and size for clipped text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub(crate) font_size: Pt,
    pub(crate) color: [f32; 4],
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Pt(16.0),
            color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: Pt) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,
    pub width: Pt,
    pub height: Pt,
    pub text: TextStyle,
    /// Top-left corner of the text box.
    pub text_origin: PixelPoint,
    /// Height of the text box; its width follows the viewport.
    pub text_height: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "hello textclip".to_string(),
            width: Pt(640.0),
            height: Pt(480.0),
            text: TextStyle::default(),
            text_origin: PixelPoint::new(10, 10),
            text_height: 100,
        }
    }
}

impl RenderConfig {
    /// Defaults overridden by `TEXTCLIP_*` environment variables.
    ///
    /// Recognized: `TEXTCLIP_FONT_SIZE`, `TEXTCLIP_TEXT_HEIGHT`,
    /// `TEXTCLIP_WIDTH`, `TEXTCLIP_HEIGHT`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = parse_var::<f32>("TEXTCLIP_FONT_SIZE", &lookup).filter(|v| *v > 0.0) {
            self.text.font_size = Pt::from(v);
        }
        if let Some(v) = parse_var::<i32>("TEXTCLIP_TEXT_HEIGHT", &lookup) {
            self.text_height = v.max(0);
        }
        if let Some(v) = parse_var::<u32>("TEXTCLIP_WIDTH", &lookup) {
            self.width = Pt::from(v);
        }
        if let Some(v) = parse_var::<u32>("TEXTCLIP_HEIGHT", &lookup) {
            self.height = Pt::from(v);
        }
        self
    }

    /// Viewport size in whole pixels.
    pub fn viewport(&self) -> PixelPoint {
        PixelPoint::new(self.width.as_i32(), self.height.as_i32())
    }
}

fn parse_var<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
