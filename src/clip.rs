//! Horizontal visibility clipping of a shaped line.
//!
//! [`clip_line`] keeps the smallest contiguous run of glyphs whose ink can
//! reach the clip rectangle and reports the pen offset the run must be drawn
//! at. The scan never mutates the line; it only narrows glyph and byte
//! ranges over the line's immutable slices.

use std::ops::Range;

use crate::fixed::{Fixed, FixedPoint};
use crate::geom::PixelRect;
use crate::line::ShapedLine;
use crate::pt::Pt;

/// Visible part of a [`ShapedLine`], borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedLine<'a> {
    text: &'a str,
    advances: &'a [Fixed],
    glyphs: Range<usize>,
    bytes: Range<usize>,
    pen: FixedPoint,
    visible: bool,
}

impl<'a> ClippedLine<'a> {
    fn new(line: &'a ShapedLine, glyphs: Range<usize>, bytes: Range<usize>, pen: FixedPoint) -> Self {
        Self {
            text: &line.text[bytes.clone()],
            advances: &line.advances[glyphs.clone()],
            glyphs,
            bytes,
            pen,
            visible: true,
        }
    }

    /// Visible substring; always whole codepoints.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn advances(&self) -> &'a [Fixed] {
        self.advances
    }

    /// Advances as raw 26.6 integers for renderer submission.
    pub fn raw_advances(&self) -> &'a [i32] {
        bytemuck::cast_slice(self.advances)
    }

    /// Glyph index range within the source line.
    pub fn glyphs(&self) -> Range<usize> {
        self.glyphs.clone()
    }

    /// Byte range within the source line's text.
    pub fn bytes(&self) -> Range<usize> {
        self.bytes.clone()
    }

    /// Pen offset in fixed-point units.
    pub fn pen(&self) -> FixedPoint {
        self.pen
    }

    /// Pen offset in float pixels, relative to the line origin.
    pub fn offset(&self) -> [Pt; 2] {
        self.pen.to_pt()
    }

    /// Always true; an empty run is a valid "nothing visible" result.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }

    /// Nominal advance width of the kept run.
    pub fn width(&self) -> Fixed {
        self.advances.iter().sum()
    }
}

/// Trims `line` to the glyphs whose ink may intersect `clip` horizontally.
///
/// `clip` is in the line's own pixel space and should already include the
/// ink padding from [`crate::compute_padding`]. The vertical pen offset is the
/// line's ascent rounded up; vertical extent is not used for trimming.
///
/// A leading glyph is dropped while the right edge of its ink stays strictly
/// left of `clip.min.x`; the run ends at the first glyph whose ink starts
/// strictly right of `clip.max.x`. An empty or inverted `clip` keeps nothing.
pub fn clip_line(line: &ShapedLine, clip: PixelRect) -> ClippedLine<'_> {
    let mut off = FixedPoint::new(Fixed::ZERO, Fixed::from_int(line.ascent.ceil()));

    if line.advances.is_empty() || clip.is_empty() {
        tracing::trace!(
            glyphs = line.advances.len(),
            clip_empty = clip.is_empty(),
            "clip_line: nothing to scan"
        );
        return ClippedLine::new(line, 0..0, 0..0, off);
    }

    let text = line.text.as_str();
    let advances = line.advances.as_slice();
    let right_overhang = line.bounds.max.x - line.width;

    let mut first = 0;
    let mut start = 0;
    for &adv in advances {
        if (off.x + adv + right_overhang).ceil() >= clip.min.x {
            break;
        }
        off.x += adv;
        start += codepoint_len(&text[start..]);
        first += 1;
    }

    let mut last = advances.len();
    let mut end = start;
    let mut end_x = off.x;
    for (i, &adv) in advances.iter().enumerate().skip(first) {
        if (end_x + line.bounds.min.x).floor() > clip.max.x {
            last = i;
            break;
        }
        end += codepoint_len(&text[end..]);
        end_x += adv;
    }

    tracing::trace!(
        first,
        last,
        pen_x = %off.x,
        clip_min_x = clip.min.x,
        clip_max_x = clip.max.x,
        "clip_line"
    );
    ClippedLine::new(line, first..last, start..end, off)
}

/// UTF-8 length of the codepoint at the start of `s`.
fn codepoint_len(s: &str) -> usize {
    s.chars().next().map_or(0, char::len_utf8)
}
