//! 26.6 fixed-point scalars used by shaped line metrics.
//!
//! Every advance, ascent, descent and ink bound produced by shaping is kept in
//! 1/64 pixel units so that summing advances never drifts.

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::pt::Pt;

pub(crate) const FRACTION_BITS: u32 = 6;
pub(crate) const SCALE: i32 = 1 << FRACTION_BITS;
const FRACTION_MASK: i64 = (SCALE as i64) - 1;

/// Signed fixed-point scalar with 6 fractional bits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);

    /// Whole pixel count as a fixed-point value.
    pub const fn from_int(px: i32) -> Self {
        Fixed(px.saturating_mul(SCALE))
    }

    pub const fn from_bits(bits: i32) -> Self {
        Fixed(bits)
    }

    pub const fn to_bits(self) -> i32 {
        self.0
    }

    pub fn from_f32(px: f32) -> Self {
        let v = if px.is_finite() { px } else { 0.0 };
        Fixed((v * SCALE as f32).round() as i32)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / SCALE as f32
    }

    /// Greatest integer pixel less than or equal to `self`.
    pub const fn floor(self) -> i32 {
        self.0 >> FRACTION_BITS
    }

    /// Least integer pixel greater than or equal to `self`.
    pub const fn ceil(self) -> i32 {
        ((self.0 as i64 + FRACTION_MASK) >> FRACTION_BITS) as i32
    }

    /// Nearest integer pixel, halves rounded up.
    pub const fn round(self) -> i32 {
        ((self.0 as i64 + (SCALE as i64 / 2)) >> FRACTION_BITS) as i32
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 + rhs.0)
    }
}

impl Sub for Fixed {
    type Output = Fixed;
    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0 - rhs.0)
    }
}

impl Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Fixed) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Fixed {
    fn sub_assign(&mut self, rhs: Fixed) {
        self.0 -= rhs.0;
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Fixed>>(iter: I) -> Fixed {
        iter.fold(Fixed::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fixed> for Fixed {
    fn sum<I: Iterator<Item = &'a Fixed>>(iter: I) -> Fixed {
        iter.copied().sum()
    }
}

impl From<Fixed> for Pt {
    fn from(value: Fixed) -> Self {
        Pt::from(value.to_f32())
    }
}

/// Pen-relative fixed-point position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl FixedPoint {
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Float pixel position, as the renderer expects it.
    pub fn to_pt(self) -> [Pt; 2] {
        [Pt::from(self.x), Pt::from(self.y)]
    }
}

/// Fixed-point rectangle relative to a line's baseline origin. Y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedRect {
    pub min: FixedPoint,
    pub max: FixedPoint,
}

impl FixedRect {
    pub const fn new(min: FixedPoint, max: FixedPoint) -> Self {
        Self { min, max }
    }

    /// Builds a rectangle from whole-pixel edges.
    pub const fn from_px(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: FixedPoint::new(Fixed::from_int(min_x), Fixed::from_int(min_y)),
            max: FixedPoint::new(Fixed::from_int(max_x), Fixed::from_int(max_y)),
        }
    }

    pub fn union(self, other: FixedRect) -> FixedRect {
        FixedRect {
            min: FixedPoint::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: FixedPoint::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}
