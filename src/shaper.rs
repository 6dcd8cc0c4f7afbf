//! Single-line shaping on top of `ab_glyph`.

use std::path::Path;

use ab_glyph::{Font as _, FontArc, Glyph, PxScale, ScaleFont as _};

use crate::fixed::{Fixed, FixedPoint, FixedRect};
use crate::line::ShapedLine;

/// Owns a parsed font and turns strings into [`ShapedLine`]s.
///
/// Build one per font and pass it by reference into each frame.
#[derive(Clone)]
pub struct Shaper {
    font: FontArc,
}

impl std::fmt::Debug for Shaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shaper")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Shaper {
    pub fn from_font(font: FontArc) -> Self {
        Self { font }
    }

    /// Parses TrueType/OpenType font data.
    pub fn from_bytes(data: Vec<u8>) -> anyhow::Result<Self> {
        let font = FontArc::try_from_vec(data)
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
        Ok(Self { font })
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to load font from {}: {}", path.display(), e))?;
        Self::from_bytes(data)
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Shapes the first line of `text` at `px_size` pixels.
    ///
    /// Everything from the first `'\n'` on is ignored. Returns `None` for an
    /// empty line. Kerning between a pair is folded into the advance of the
    /// first glyph of the pair. Glyphs without an outline (spaces) only
    /// advance the pen; if no glyph has ink the nominal box is used as the
    /// ink box.
    pub fn layout_line(&self, text: &str, px_size: f32) -> Option<ShapedLine> {
        let line = text.split('\n').next().unwrap_or_default();
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return None;
        }

        let scale = PxScale::from(px_size.max(1.0));
        let scaled = self.font.as_scaled(scale);

        // Pen positions in float pixels; advances are taken as differences of
        // the rounded positions so their sum equals the rounded width.
        let mut pens: Vec<f32> = Vec::with_capacity(line.len() + 1);
        let mut ink: Option<FixedRect> = None;
        let mut caret = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;

        for ch in line.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            prev = Some(id);
            pens.push(caret);

            if let Some(outlined) = scaled.outline_glyph(Glyph {
                id,
                scale,
                position: ab_glyph::point(caret, 0.0),
            }) {
                let b = outlined.px_bounds();
                let glyph_ink = FixedRect::new(
                    FixedPoint::new(Fixed::from_f32(b.min.x), Fixed::from_f32(b.min.y)),
                    FixedPoint::new(Fixed::from_f32(b.max.x), Fixed::from_f32(b.max.y)),
                );
                ink = Some(ink.map_or(glyph_ink, |acc| acc.union(glyph_ink)));
            }

            caret += scaled.h_advance(id);
        }
        pens.push(caret);

        // Kerning was added to the caret before the second glyph's pen, so
        // the difference of consecutive pens already carries it.
        let advances: Vec<Fixed> = pens
            .windows(2)
            .map(|w| Fixed::from_f32(w[1]) - Fixed::from_f32(w[0]))
            .collect();

        let ascent = Fixed::from_f32(scaled.ascent());
        let descent = Fixed::from_f32(-scaled.descent());
        let width: Fixed = advances.iter().sum();
        let bounds = ink.unwrap_or(FixedRect::new(
            FixedPoint::new(Fixed::ZERO, -ascent),
            FixedPoint::new(width, descent),
        ));

        match ShapedLine::from_parts(line, advances, width, ascent, descent, bounds) {
            Ok(shaped) => {
                tracing::trace!(
                    glyphs = shaped.glyph_count(),
                    width = %shaped.width(),
                    "shaped line"
                );
                Some(shaped)
            }
            Err(e) => {
                tracing::warn!("shaping produced an inconsistent line: {}", e);
                None
            }
        }
    }
}
