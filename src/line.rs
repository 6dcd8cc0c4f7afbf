use std::ops::Range;

use crate::fixed::{Fixed, FixedPoint, FixedRect};
use crate::geom::PixelRect;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line has {advances} advances but {codepoints} codepoints")]
    AdvanceCountMismatch { advances: usize, codepoints: usize },
    #[error("glyph range {start}..{end} out of bounds for line of {len} glyphs")]
    GlyphRangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// One shaped line of text.
///
/// Holds one advance per codepoint of `text`, the nominal box
/// (`width` x `ascent + descent`) and the ink box `bounds`, which is
/// relative to the line's baseline origin and may exceed the nominal box.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedLine {
    pub(crate) text: String,
    pub(crate) advances: Vec<Fixed>,
    pub(crate) width: Fixed,
    pub(crate) ascent: Fixed,
    pub(crate) descent: Fixed,
    pub(crate) bounds: FixedRect,
}

impl ShapedLine {
    /// Builds a line whose width is the sum of `advances`.
    ///
    /// # Errors
    /// Returns [`LineError::AdvanceCountMismatch`] if the number of advances
    /// differs from the number of codepoints in `text`.
    pub fn new(
        text: impl Into<String>,
        advances: Vec<Fixed>,
        ascent: Fixed,
        descent: Fixed,
        bounds: FixedRect,
    ) -> Result<Self, LineError> {
        let width = advances.iter().sum();
        Self::from_parts(text, advances, width, ascent, descent, bounds)
    }

    /// Builds a line with an explicit nominal width.
    pub fn from_parts(
        text: impl Into<String>,
        advances: Vec<Fixed>,
        width: Fixed,
        ascent: Fixed,
        descent: Fixed,
        bounds: FixedRect,
    ) -> Result<Self, LineError> {
        let text = text.into();
        let codepoints = text.chars().count();
        if advances.len() != codepoints {
            return Err(LineError::AdvanceCountMismatch {
                advances: advances.len(),
                codepoints,
            });
        }
        Ok(Self {
            text,
            advances,
            width,
            ascent,
            descent,
            bounds,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn advances(&self) -> &[Fixed] {
        &self.advances
    }

    pub fn width(&self) -> Fixed {
        self.width
    }

    pub fn ascent(&self) -> Fixed {
        self.ascent
    }

    pub fn descent(&self) -> Fixed {
        self.descent
    }

    pub fn bounds(&self) -> FixedRect {
        self.bounds
    }

    pub fn glyph_count(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Nominal layout box: `(0, -ascent)` to `(width, descent)`.
    pub fn nominal_bounds(&self) -> FixedRect {
        FixedRect::new(
            FixedPoint::new(Fixed::ZERO, -self.ascent),
            FixedPoint::new(self.width, self.descent),
        )
    }

    /// Ink bounds widened to whole pixels so the result always covers the ink.
    pub fn bounds_as_pixel_rect(&self) -> PixelRect {
        PixelRect::new(
            self.bounds.min.x.floor(),
            self.bounds.min.y.floor(),
            self.bounds.max.x.ceil(),
            self.bounds.max.y.ceil(),
        )
    }

    pub fn height_pixels(&self) -> i32 {
        (self.ascent + self.descent).ceil()
    }

    pub fn width_pixels(&self) -> i32 {
        self.width.ceil()
    }

    /// Rebuilds the line restricted to `glyphs`.
    ///
    /// The ink overhang on both ends is carried over unchanged: the left
    /// overhang stays relative to the new pen origin and the right overhang
    /// stays relative to the new width.
    pub fn sub_line(&self, glyphs: Range<usize>) -> Result<ShapedLine, LineError> {
        let len = self.advances.len();
        if glyphs.start > glyphs.end || glyphs.end > len {
            return Err(LineError::GlyphRangeOutOfBounds {
                start: glyphs.start,
                end: glyphs.end,
                len,
            });
        }
        let start = byte_offset(&self.text, glyphs.start);
        let end = byte_offset(&self.text, glyphs.end);
        let advances = self.advances[glyphs].to_vec();
        let width: Fixed = advances.iter().sum();

        let right_overhang = self.bounds.max.x - self.width;
        let bounds = FixedRect::new(
            self.bounds.min,
            FixedPoint::new(width + right_overhang, self.bounds.max.y),
        );

        Ok(ShapedLine {
            text: self.text[start..end].to_owned(),
            advances,
            width,
            ascent: self.ascent,
            descent: self.descent,
            bounds,
        })
    }
}

/// Byte offset of the `index`-th codepoint, or the text length past the end.
pub(crate) fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(v: i32) -> Fixed {
        Fixed::from_int(v)
    }

    #[test]
    fn test_width_is_sum_of_advances() {
        let line = ShapedLine::new(
            "abc",
            vec![px(5), Fixed::from_bits(100), px(7)],
            px(12),
            px(4),
            FixedRect::from_px(0, -12, 20, 4),
        )
        .unwrap();
        assert_eq!(line.width(), Fixed::from_bits(5 * 64 + 100 + 7 * 64));
        assert_eq!(line.glyph_count(), 3);
    }

    #[test]
    fn test_advance_count_checked_per_codepoint() {
        // "é" is two bytes but one codepoint.
        let ok = ShapedLine::new("é!", vec![px(8), px(4)], px(10), px(2), FixedRect::default());
        assert!(ok.is_ok());

        let err = ShapedLine::new("é!", vec![px(8), px(4), px(1)], px(10), px(2), FixedRect::default())
            .unwrap_err();
        assert_eq!(
            err,
            LineError::AdvanceCountMismatch {
                advances: 3,
                codepoints: 2
            }
        );
        assert_eq!(err.to_string(), "line has 3 advances but 2 codepoints");
    }

    #[test]
    fn test_pixel_projections() {
        let bounds = FixedRect::new(
            FixedPoint::new(Fixed::from_bits(-80), Fixed::from_bits(-700)),
            FixedPoint::new(Fixed::from_bits(3210), Fixed::from_bits(130)),
        );
        let line = ShapedLine::from_parts(
            "x",
            vec![Fixed::from_bits(3200)],
            Fixed::from_bits(3200),
            Fixed::from_bits(720),
            Fixed::from_bits(200),
            bounds,
        )
        .unwrap();
        assert_eq!(line.bounds_as_pixel_rect(), PixelRect::new(-2, -11, 51, 3));
        // 920 / 64 = 14.375
        assert_eq!(line.height_pixels(), 15);
        assert_eq!(line.width_pixels(), 50);
    }

    #[test]
    fn test_nominal_bounds() {
        let line = ShapedLine::new("ab", vec![px(3), px(4)], px(9), px(3), FixedRect::default()).unwrap();
        assert_eq!(line.nominal_bounds(), FixedRect::from_px(0, -9, 7, 3));
    }

    #[test]
    fn test_sub_line_keeps_overhang() {
        let line = ShapedLine::new(
            "añbc",
            vec![px(10), px(10), px(10), px(10)],
            px(12),
            px(4),
            FixedRect::from_px(-2, -14, 43, 5),
        )
        .unwrap();
        let sub = line.sub_line(1..3).unwrap();
        assert_eq!(sub.text(), "ñb");
        assert_eq!(sub.width(), px(20));
        assert_eq!(sub.bounds(), FixedRect::from_px(-2, -14, 23, 5));

        let empty = line.sub_line(4..4).unwrap();
        assert_eq!(empty.text(), "");
        assert!(empty.is_empty());

        assert!(matches!(
            line.sub_line(2..5),
            Err(LineError::GlyphRangeOutOfBounds { len: 4, .. })
        ));
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("aé€", 0), 0);
        assert_eq!(byte_offset("aé€", 2), 3);
        assert_eq!(byte_offset("aé€", 3), 6);
        assert_eq!(byte_offset("aé€", 9), 6);
    }
}
