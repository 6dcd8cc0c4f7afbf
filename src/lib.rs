//! textclip - show only the visible part of a single shaped line of text.
//!
//! A line shaped into fixed-point advances and an ink box is trimmed to the
//! glyphs that can touch a clip rectangle. [`compute_padding`] sizes the clip
//! rectangle so ink overhang (italics, kerning bleed) is never cut off, and
//! [`clip_line`] returns the visible substring together with the pen offset it
//! has to be drawn at.
//!
//! # Example
//! ```
//! use textclip::{Fixed, FixedRect, PixelPoint, ShapedLine, clip_line, compute_padding};
//!
//! let px = Fixed::from_int;
//! let line = ShapedLine::new(
//!     "hello",
//!     vec![px(10); 5],
//!     px(12),
//!     px(4),
//!     FixedRect::from_px(-1, -12, 52, 4),
//! )
//! .unwrap();
//!
//! // A 25px wide viewport, grown by the line's ink overhang.
//! let clip = compute_padding(std::slice::from_ref(&line)).grow(PixelPoint::new(25, 16));
//! let visible = clip_line(&line, clip);
//! assert_eq!(visible.text(), "hel");
//! ```
//!
//! The [`Frame`] draw list wires the two together with a [`Shaper`] for
//! renderers that want ready-made text commands.

#[cfg(feature = "utils")]
mod background;
mod clip;
mod config;
mod fixed;
mod frame;
mod geom;
mod line;
mod padding;
mod pt;
mod shaper;

#[cfg(feature = "utils")]
pub use background::BackgroundImage;
pub use clip::{ClippedLine, clip_line};
pub use config::{RenderConfig, TextStyle};
pub use fixed::{Fixed, FixedPoint, FixedRect};
pub use frame::{Background, DrawCommand, Frame, FrameInput, ImageId, Scene, render_frame};
pub use geom::{PixelPoint, PixelRect};
pub use line::{LineError, ShapedLine};
pub use padding::compute_padding;
pub use pt::Pt;
pub use shaper::Shaper;

#[cfg(test)]
mod tests {
    use super::*;

    fn px(v: i32) -> Fixed {
        Fixed::from_int(v)
    }

    #[test]
    fn test_padding_example() {
        // 3px of left ink, 2px of right ink past a 50px advance.
        let line = ShapedLine::new(
            "ab",
            vec![px(25), px(25)],
            px(12),
            px(4),
            FixedRect::from_px(-3, -12, 52, 4),
        )
        .unwrap();
        let padding = compute_padding(std::slice::from_ref(&line));
        assert_eq!(padding.min.x, -3);
        assert_eq!(padding.max.x, 2);
        assert!(padding.min.y <= 0 && padding.max.y >= 0);
    }

    #[test]
    fn test_padding_then_clip_pipeline() {
        let line = ShapedLine::new(
            "overflowing",
            vec![px(9); 11],
            px(12),
            px(4),
            FixedRect::from_px(-1, -14, 101, 5),
        )
        .unwrap();
        let viewport = PixelPoint::new(30, 100);
        let size = PixelPoint::new(
            line.width_pixels().min(viewport.x),
            line.height_pixels().min(viewport.y),
        );
        let clip = compute_padding(std::slice::from_ref(&line)).grow(size);
        assert_eq!(clip, PixelRect::new(-1, -2, 32, 17));

        let visible = clip_line(&line, clip);
        // Glyph 4 starts at 36, its ink at 35 > 32.
        assert_eq!(visible.text(), "over");
        assert_eq!(visible.offset(), [Pt::from(0i32), Pt::from(12i32)]);
    }

    #[test]
    fn test_shared_line_across_threads() {
        let line = std::sync::Arc::new(
            ShapedLine::new("abcdef", vec![px(10); 6], px(12), px(4), FixedRect::from_px(0, -12, 60, 4))
                .unwrap(),
        );
        let handles: Vec<_> = [0, 15, 30]
            .into_iter()
            .map(|min_x| {
                let line = line.clone();
                std::thread::spawn(move || {
                    clip_line(&line, PixelRect::new(min_x, 0, min_x + 20, 16))
                        .text()
                        .to_owned()
                })
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, ["abc", "bcd", "cdef"]);
    }
}
