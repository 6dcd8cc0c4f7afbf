//! Integer pixel geometry for clip rectangles and padding.

use crate::pt::Pt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned pixel rectangle.
///
/// Used both as a clip rectangle and as a padding, in which case `min` holds
/// the (non-positive) left/top margins and `max` the (non-negative)
/// right/bottom margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub min: PixelPoint,
    pub max: PixelPoint,
}

impl PixelRect {
    pub const ZERO: PixelRect = PixelRect::new(0, 0, 0, 0);

    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: PixelPoint::new(min_x, min_y),
            max: PixelPoint::new(max_x, max_y),
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Signed width; negative for inverted rectangles.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> PixelPoint {
        PixelPoint::new(self.width(), self.height())
    }

    /// True when the rectangle covers no pixel on at least one axis.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Adds `padding` edge by edge.
    pub fn expand(self, padding: PixelRect) -> PixelRect {
        PixelRect {
            min: self.min.add(padding.min),
            max: self.max.add(padding.max),
        }
    }

    /// Moves only the `max` corner by `size`.
    pub fn grow(self, size: PixelPoint) -> PixelRect {
        PixelRect {
            min: self.min,
            max: self.max.add(size),
        }
    }

    pub fn translate(self, by: PixelPoint) -> PixelRect {
        PixelRect {
            min: self.min.add(by),
            max: self.max.add(by),
        }
    }

    /// `[x, y, width, height]` in float pixels.
    pub fn to_pt_bounds(self) -> [Pt; 4] {
        [
            Pt::from(self.min.x),
            Pt::from(self.min.y),
            Pt::from(self.width()),
            Pt::from(self.height()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_inverted() {
        assert!(PixelRect::ZERO.is_empty());
        assert!(PixelRect::new(10, 0, 5, 20).is_empty());
        assert!(PixelRect::new(0, 5, 10, 5).is_empty());
        assert!(!PixelRect::from_size(1, 1).is_empty());
        assert_eq!(PixelRect::new(10, 0, 5, 20).width(), -5);
    }

    #[test]
    fn test_padding_application() {
        let padding = PixelRect::new(-3, -1, 2, 4);
        let clip = padding.grow(PixelPoint::new(50, 20));
        assert_eq!(clip, PixelRect::new(-3, -1, 52, 24));
        assert_eq!(PixelRect::from_size(50, 20).expand(padding), clip);
    }

    #[test]
    fn test_translate_and_pt_bounds() {
        let r = PixelRect::new(1, 2, 11, 7).translate(PixelPoint::new(-1, 3));
        assert_eq!(r, PixelRect::new(0, 5, 10, 10));
        assert_eq!(
            r.to_pt_bounds(),
            [Pt::from(0i32), Pt::from(5i32), Pt::from(10i32), Pt::from(5i32)]
        );
    }
}
