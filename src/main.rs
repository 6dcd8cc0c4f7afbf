use anyhow::Context as _;
use textclip::{Background, DrawCommand, Frame, FrameInput, PixelPoint, Pt, RenderConfig, Scene, Shaper};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: textclip <font.ttf> [text] [background-image]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let font_path = args.next().context(USAGE)?;
    let text = args
        .next()
        .unwrap_or_else(|| "frame: 16.6ms draw: 2.4ms gpu: 1.1ms".to_string());
    let image_path = args.next();

    let shaper = Shaper::from_file(&font_path)?;
    let config = RenderConfig::from_env();
    let background = load_background(image_path.as_deref())?;
    tracing::info!(title = %config.title, font = %font_path, "starting");

    let scene = Scene {
        shaper: &shaper,
        config: &config,
        background,
    };

    // Shrink the viewport over a few frames to show the clipping at work.
    let full = config.viewport();
    let mut frame = Frame::new();
    for width in [full.x, full.x / 4, 40, 0] {
        let input = FrameInput {
            viewport: PixelPoint::new(width, full.y),
            pointer: [Pt::from(150i32), Pt::from(150i32)],
            profile: &text,
        };
        textclip::render_frame(&mut frame, &scene, &input);

        for command in frame.commands() {
            match command {
                DrawCommand::Image { image, rect } => {
                    tracing::info!(width, image, ?rect, "image");
                }
                DrawCommand::Text {
                    text,
                    offset,
                    scissor,
                    ..
                } => {
                    tracing::info!(width, ?text, ?offset, ?scissor, "text");
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "utils")]
fn load_background(path: Option<&str>) -> anyhow::Result<Option<Background>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let image = textclip::BackgroundImage::open(path)?;
    Ok(Some(Background {
        image: 0,
        size: image.size(),
    }))
}

#[cfg(not(feature = "utils"))]
fn load_background(path: Option<&str>) -> anyhow::Result<Option<Background>> {
    if let Some(path) = path {
        tracing::warn!("built without the `utils` feature; ignoring background {}", path);
    }
    Ok(None)
}
