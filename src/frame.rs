//! Per-frame draw list handed to a renderer.
//!
//! A [`Frame`] records image blits and clipped text runs. Text runs carry the
//! visible substring, its pen offset and a scissor expressed in the same local
//! space as the shaped glyphs, which is everything a renderer needs to paint
//! the visible part of a line and nothing more.

use crate::Pt;
use crate::clip::clip_line;
use crate::config::{RenderConfig, TextStyle};
use crate::geom::{PixelPoint, PixelRect};
use crate::line::ShapedLine;
use crate::padding::compute_padding;
use crate::shaper::Shaper;

pub type ImageId = u32;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Blit `image` into `rect` (`[x, y, width, height]`).
    Image { image: ImageId, rect: [Pt; 4] },
    /// Paint `text` in a solid `color`.
    ///
    /// The renderer translates to `origin + offset` and shapes `text` there;
    /// `scissor` (`[x, y, width, height]`) is relative to that point.
    Text {
        text: String,
        origin: [Pt; 2],
        offset: [Pt; 2],
        color: [f32; 4],
        scissor: [Pt; 4],
    },
}

/// Background image as placed in the scene; pixels live with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub image: ImageId,
    pub size: PixelPoint,
}

/// Long-lived values a frame is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub shaper: &'a Shaper,
    pub config: &'a RenderConfig,
    pub background: Option<Background>,
}

/// Values that change from frame to frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Viewport size in pixels.
    pub viewport: PixelPoint,
    /// Last pointer position; the background follows it.
    pub pointer: [Pt; 2],
    /// Profiler timings observed for the previous frame.
    pub profile: &'a str,
}

#[derive(Debug, Default)]
pub struct Frame {
    draw_list: Vec<DrawCommand>,
    debug_draw: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            draw_list: Vec::new(),
            debug_draw: std::env::var("TEXTCLIP_DEBUG_DRAW").is_ok(),
        }
    }

    /// Drops the commands of the previous frame.
    pub fn begin(&mut self) {
        self.draw_list.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_list
    }

    pub fn draw_image(&mut self, image: ImageId, rect: PixelRect) {
        self.push(DrawCommand::Image {
            image,
            rect: rect.to_pt_bounds(),
        });
    }

    /// Shapes `text` as a single line and records its visible part inside
    /// `area`. Returns whether a command was recorded.
    pub fn draw_text(&mut self, shaper: &Shaper, style: &TextStyle, area: PixelRect, text: &str) -> bool {
        let Some(line) = shaper.layout_line(text, style.font_size.as_f32()) else {
            return false;
        };
        self.draw_line(&line, style, area)
    }

    /// Records the visible part of an already shaped `line` inside `area`.
    ///
    /// The nominal box of the line is capped to the size of `area`, grown by
    /// the ink padding, and the line is clipped against the result.
    pub fn draw_line(&mut self, line: &ShapedLine, style: &TextStyle, area: PixelRect) -> bool {
        let size = PixelPoint::new(
            line.width_pixels().min(area.width()),
            line.height_pixels().min(area.height()),
        );
        let clip = compute_padding(std::slice::from_ref(line)).grow(size);

        let clipped = clip_line(line, clip);
        if !clipped.is_visible() {
            return false;
        }

        let offset = clipped.offset();
        let [x, y, w, h] = clip.to_pt_bounds();
        self.push(DrawCommand::Text {
            text: clipped.text().to_owned(),
            origin: [Pt::from(area.min.x), Pt::from(area.min.y)],
            offset,
            color: style.color,
            scissor: [x - offset[0], y - offset[1], w, h],
        });
        true
    }

    fn push(&mut self, command: DrawCommand) {
        if self.debug_draw {
            match &command {
                DrawCommand::Image { image, rect } => {
                    tracing::debug!("[textclip][debug] draw image id={} rect={:?}", image, rect);
                }
                DrawCommand::Text {
                    text,
                    offset,
                    scissor,
                    ..
                } => {
                    tracing::debug!(
                        "[textclip][debug] draw text {:?} offset={:?} scissor={:?}",
                        text,
                        offset,
                        scissor
                    );
                }
            }
        }
        self.draw_list.push(command);
    }
}

/// Builds the draw list for one frame: the background at the pointer and the
/// profile timings in the configured text box.
pub fn render_frame(frame: &mut Frame, scene: &Scene<'_>, input: &FrameInput<'_>) {
    frame.begin();

    if let Some(bg) = scene.background {
        let at = PixelPoint::new(input.pointer[0].as_i32(), input.pointer[1].as_i32());
        frame.draw_image(bg.image, PixelRect::from_size(bg.size.x, bg.size.y).translate(at));
    }

    let origin = scene.config.text_origin;
    let area = PixelRect::from_size(input.viewport.x, scene.config.text_height).translate(origin);
    frame.draw_text(scene.shaper, &scene.config.text, area, input.profile);

    tracing::trace!(commands = frame.commands().len(), "frame built");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{Fixed, FixedRect};

    fn line(text: &str, advance: i32, bounds: FixedRect) -> ShapedLine {
        let n = text.chars().count();
        ShapedLine::new(
            text,
            vec![Fixed::from_int(advance); n],
            Fixed::from_int(12),
            Fixed::from_int(4),
            bounds,
        )
        .unwrap()
    }

    #[test]
    fn test_draw_line_fits() {
        let mut frame = Frame::new();
        let l = line("abc", 10, FixedRect::from_px(0, -12, 30, 4));
        assert!(frame.draw_line(&l, &TextStyle::default(), PixelRect::new(10, 10, 650, 110)));

        assert_eq!(
            frame.commands(),
            &[DrawCommand::Text {
                text: "abc".to_string(),
                origin: [Pt::from(10i32), Pt::from(10i32)],
                offset: [Pt::from(0i32), Pt::from(12i32)],
                color: [0.0, 0.0, 0.0, 1.0],
                scissor: [Pt::from(0i32), Pt::from(-12i32), Pt::from(30i32), Pt::from(16i32)],
            }]
        );
    }

    #[test]
    fn test_draw_line_capped_by_area() {
        let mut frame = Frame::new();
        let l = line("abcdefghij", 10, FixedRect::from_px(-2, -13, 101, 4));
        assert!(frame.draw_line(&l, &TextStyle::default(), PixelRect::from_size(45, 100)));

        let DrawCommand::Text { text, scissor, .. } = &frame.commands()[0] else {
            panic!("expected a text command");
        };
        // Padding (-2, -1, 1, 0) grown by (45, 16) gives x in [-2, 46].
        assert_eq!(text, "abcde");
        assert_eq!(scissor[0], Pt::from(-2i32));
        assert_eq!(scissor[2], Pt::from(48i32));
    }

    #[test]
    fn test_zero_width_area_draws_nothing_visible() {
        let mut frame = Frame::new();
        let l = line("abc", 10, FixedRect::from_px(0, -12, 30, 4));
        assert!(frame.draw_line(&l, &TextStyle::default(), PixelRect::from_size(0, 100)));
        let DrawCommand::Text { text, .. } = &frame.commands()[0] else {
            panic!("expected a text command");
        };
        assert!(text.is_empty());
    }

    #[test]
    fn test_draw_image_and_begin() {
        let mut frame = Frame::new();
        frame.draw_image(7, PixelRect::new(150, 150, 250, 200));
        assert_eq!(
            frame.commands(),
            &[DrawCommand::Image {
                image: 7,
                rect: [Pt::from(150i32), Pt::from(150i32), Pt::from(100i32), Pt::from(50i32)],
            }]
        );
        frame.begin();
        assert!(frame.commands().is_empty());
    }

    #[test]
    fn test_render_frame_with_font() {
        let Ok(path) = std::env::var("TEXTCLIP_TEST_FONT") else {
            return;
        };
        let shaper = Shaper::from_file(path).unwrap();
        let config = RenderConfig::default();
        let scene = Scene {
            shaper: &shaper,
            config: &config,
            background: Some(Background {
                image: 1,
                size: PixelPoint::new(64, 32),
            }),
        };
        let mut frame = Frame::new();
        render_frame(
            &mut frame,
            &scene,
            &FrameInput {
                viewport: PixelPoint::new(40, 480),
                pointer: [Pt::from(150i32), Pt::from(150i32)],
                profile: "tot: 1.2ms draw: 0.4ms gpu: 0.1ms",
            },
        );
        assert_eq!(frame.commands().len(), 2);
        let DrawCommand::Text { text, .. } = &frame.commands()[1] else {
            panic!("expected a text command");
        };
        assert!(!text.is_empty());
        assert!("tot: 1.2ms draw: 0.4ms gpu: 0.1ms".starts_with(text.as_str()));
    }

    #[test]
    fn test_render_frame_empty_profile_skips_text() {
        let Ok(path) = std::env::var("TEXTCLIP_TEST_FONT") else {
            return;
        };
        let shaper = Shaper::from_file(path).unwrap();
        let config = RenderConfig::default();
        let scene = Scene {
            shaper: &shaper,
            config: &config,
            background: None,
        };
        let mut frame = Frame::new();
        render_frame(
            &mut frame,
            &scene,
            &FrameInput {
                viewport: config.viewport(),
                pointer: [Pt::from(0i32), Pt::from(0i32)],
                profile: "",
            },
        );
        assert!(frame.commands().is_empty());
    }
}
