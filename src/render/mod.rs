//! Stage 3 — burn the caption into the image.
//!
//! Two text blocks are anchored to the bottom corners: camera, lens and the
//! exposure summary on the left, the capture date on the right. Each line is
//! drawn as 24 black shadow copies offset up to two pixels in every
//! direction with a white fill on top, which keeps the text readable over
//! any background.

mod font;

pub use font::resolve_font;

use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::config::OverlayConfig;
use crate::metadata::PhotoMetadata;

/// Shadow offsets cover `[-SHADOW_REACH, SHADOW_REACH]` in both axes.
const SHADOW_REACH: i32 = 2;

const FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Where each caption line lands, in pixels from the top-left corner.
///
/// Pure function of the image dimensions, the overlay settings and the
/// measured datetime width; computing it twice for the same inputs yields
/// identical placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionLayout {
    /// Camera, lens, and exposure summary, stacked from the top placement.
    pub left: [(i32, i32); 3],
    /// The datetime line.
    pub right: (i32, i32),
}

/// Compute the caption layout.
///
/// `datetime_width` is the measured pixel width of the datetime line when a
/// measurement is available. Without one, or when the measured line cannot
/// fit right-aligned inside the margins, the line falls back to the left
/// margin instead of failing.
pub fn caption_layout(
    width: u32,
    height: u32,
    datetime_width: Option<u32>,
    overlay: &OverlayConfig,
) -> CaptionLayout {
    let margin = overlay.margin;
    let line_height = overlay.line_height;

    let left_top = height as i32 - margin - 3 * line_height;
    let left = [
        (margin, left_top),
        (margin, left_top + line_height),
        (margin, left_top + 2 * line_height),
    ];

    let right_y = height as i32 - margin - line_height;
    let right_x = match datetime_width {
        Some(w) if w as i32 + 2 * margin <= width as i32 => width as i32 - margin - w as i32,
        _ => margin,
    };

    CaptionLayout {
        left,
        right: (right_x, right_y),
    }
}

/// Render `metadata` onto a copy of `image`.
///
/// The input buffer is left untouched; the caller owns the returned image.
///
/// # Example
///
/// ```rust,no_run
/// use exif_overlay::config::Config;
/// use exif_overlay::metadata::{ExifTagSet, PhotoMetadata};
/// use exif_overlay::render::{render_caption, resolve_font};
///
/// let config = Config::default();
/// let image = image::open("photo.jpg").unwrap();
/// let metadata = PhotoMetadata::from_tags(&ExifTagSet::default()).unwrap();
///
/// let font = resolve_font(&config.overlay.font_paths);
/// let captioned = render_caption(&image, &metadata, &font, &config.overlay);
/// ```
pub fn render_caption(
    image: &DynamicImage,
    metadata: &PhotoMetadata,
    font: &FontVec,
    overlay: &OverlayConfig,
) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    let scale = PxScale::from(overlay.font_size);

    let exposure = metadata.exposure_line();
    let left_lines = [metadata.camera.as_str(), metadata.lens.as_str(), &exposure];

    let datetime_width = measure_line(scale, font, &metadata.datetime);
    let layout = caption_layout(canvas.width(), canvas.height(), datetime_width, overlay);

    for (line, &(x, y)) in left_lines.iter().zip(layout.left.iter()) {
        draw_line_with_halo(&mut canvas, x, y, scale, font, line);
    }

    let (x, y) = layout.right;
    draw_line_with_halo(&mut canvas, x, y, scale, font, &metadata.datetime);

    canvas
}

/// Measure the rendered width of a line, if a measurement is available.
fn measure_line(scale: PxScale, font: &FontVec, text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    Some(text_size(scale, font, text).0)
}

/// Draw one caption line: 24 black shadow copies at every offset within
/// [`SHADOW_REACH`], then the white fill on top.
fn draw_line_with_halo(
    canvas: &mut RgbaImage,
    x: i32,
    y: i32,
    scale: PxScale,
    font: &FontVec,
    text: &str,
) {
    for dx in -SHADOW_REACH..=SHADOW_REACH {
        for dy in -SHADOW_REACH..=SHADOW_REACH {
            if dx != 0 || dy != 0 {
                draw_text_mut(canvas, SHADOW, x + dx, y + dy, scale, font, text);
            }
        }
    }
    draw_text_mut(canvas, FILL, x, y, scale, font, text);
}
