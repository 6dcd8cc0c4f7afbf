//! Ink overflow padding for clip rectangles.

use crate::fixed::Fixed;
use crate::geom::PixelRect;
use crate::line::ShapedLine;

/// Computes how far the ink of `lines` protrudes past their nominal box.
///
/// The top and left margins come from the first line, the bottom margin from
/// the last line and the right margin from the first line again. Margins are
/// rounded outward to whole pixels; ink exactly flush with the nominal box
/// contributes nothing. An empty slice yields [`PixelRect::ZERO`].
pub fn compute_padding(lines: &[ShapedLine]) -> PixelRect {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return PixelRect::ZERO;
    };

    let mut padding = PixelRect::ZERO;
    if let Some(d) = negative(first.ascent + first.bounds.min.y) {
        padding.min.y = d.floor();
    }
    if let Some(d) = positive(last.bounds.max.y - last.descent) {
        padding.max.y = d.ceil();
    }
    if let Some(d) = negative(first.bounds.min.x) {
        padding.min.x = d.floor();
    }
    if let Some(d) = positive(first.bounds.max.x - first.width) {
        padding.max.x = d.ceil();
    }
    padding
}

fn negative(v: Fixed) -> Option<Fixed> {
    v.is_negative().then_some(v)
}

fn positive(v: Fixed) -> Option<Fixed> {
    v.is_positive().then_some(v)
}
