use std::path::PathBuf;
use std::time::Duration;

use image::GenericImageView;

use crate::config::Config;
use crate::error::OverlayError;
use crate::fetch;
use crate::metadata::{self, PhotoMetadata};
use crate::output;
use crate::render;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    /// The normalized caption fields burned into the output.
    pub metadata: PhotoMetadata,
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    /// Size of the downloaded payload.
    pub bytes_fetched: usize,
    /// Where the composited JPEG was written.
    pub output_path: PathBuf,
}

/// Execute the full pipeline once: download → parse → render → save.
///
/// The configured URL is fetched a single time; both the pixel decode and the
/// EXIF decode read that one buffer. Either a fully composited image is
/// written to the configured path, or nothing is written.
///
/// # Example
///
/// ```rust,no_run
/// use exif_overlay::config::Config;
/// use exif_overlay::pipeline;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::load(Some("config.json".as_ref()))?;
/// let report = pipeline::run(&config).await?;
/// println!(
///     "Wrote {} ({}x{})",
///     report.output_path.display(),
///     report.width,
///     report.height,
/// );
/// # Ok(())
/// # }
/// ```
pub async fn run(config: &Config) -> Result<RunReport, OverlayError> {
    let client = reqwest::Client::new();
    let timeout = Duration::from_secs(config.source.timeout_secs);
    let bytes = fetch::fetch_image(&client, &config.source.url, timeout).await?;

    let image =
        image::load_from_memory(&bytes).map_err(|e| OverlayError::Decode(e.to_string()))?;
    let (width, height) = image.dimensions();
    log::info!("Decoded {width}x{height} image");

    log::info!("Extracting EXIF metadata...");
    let tags = metadata::read_tag_set(&bytes)?;
    let meta = PhotoMetadata::from_tags(&tags)?;
    log::debug!("Caption fields: {meta:?}");

    log::info!("Overlaying metadata onto image...");
    let font = render::resolve_font(&config.overlay.font_paths);
    let composited = render::render_caption(&image, &meta, &font, &config.overlay);

    output::save_jpeg(&composited, &config.output.path, config.output.jpeg_quality)?;

    Ok(RunReport {
        metadata: meta,
        width,
        height,
        bytes_fetched: bytes.len(),
        output_path: config.output.path.clone(),
    })
}
