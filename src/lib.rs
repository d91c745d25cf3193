//! # exif-overlay
//!
//! Fetch a photograph over HTTP, read its embedded EXIF metadata, and burn a
//! human-readable caption — camera, lens, exposure settings, and capture
//! date — into the image itself, saved as a new JPEG.
//!
//! The whole tool is a single linear pipeline: download → parse → render →
//! save. One HTTP GET per run; both the pixel decode and the EXIF decode
//! read the same byte buffer. There is no persistent state and no retry
//! logic — either a fully composited image is written, or nothing is.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exif_overlay::config::Config;
//! use exif_overlay::pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Defaults fetch a sample image; point the config at your own photo.
//!     let mut config = Config::default();
//!     config.source.url = "https://example.com/photo.jpg".into();
//!     config.output.path = "captioned.jpg".into();
//!
//!     let report = pipeline::run(&config).await?;
//!     println!(
//!         "Wrote {} ({}x{})",
//!         report.output_path.display(),
//!         report.width,
//!         report.height,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The pipeline stages are plain functions and can be called individually,
//! e.g. to caption bytes you already have in hand:
//!
//! ```rust,no_run
//! use exif_overlay::config::Config;
//! use exif_overlay::metadata::{PhotoMetadata, read_tag_set};
//! use exif_overlay::render::{render_caption, resolve_font};
//!
//! fn caption(bytes: &[u8]) -> anyhow::Result<image::RgbaImage> {
//!     let config = Config::default();
//!
//!     // 1. Decode pixels and EXIF tags from the same buffer
//!     let image = image::load_from_memory(bytes)?;
//!     let tags = read_tag_set(bytes)?;
//!
//!     // 2. Normalize — every caption field has a defined fallback
//!     let metadata = PhotoMetadata::from_tags(&tags)?;
//!
//!     // 3. Render onto a copy; the caller owns the result
//!     let font = resolve_font(&config.overlay.font_paths);
//!     Ok(render_caption(&image, &metadata, &font, &config.overlay))
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] — configuration types and loading/saving
//! - [`error`] — the pipeline error kinds
//! - [`fetch`] — HTTP retrieval of the source image
//! - [`metadata`] — EXIF tag extraction and caption normalization
//! - [`render`] — caption layout, font resolution, and drawing
//! - [`output`] — JPEG encoding and persistence
//! - [`pipeline`] — the download → parse → render → save entry point

pub mod config;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod render;
