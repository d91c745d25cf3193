use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sample photograph with EXIF data, used when no URL is configured.
const SAMPLE_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/ianare/exif-samples/master/jpg/Canon_40D.jpg";

/// Top-level configuration for the exif-overlay pipeline.
///
/// Controls where the source image is fetched from, where the composited
/// output is written, and how the caption is laid out.
///
/// # Loading
///
/// ```rust,no_run
/// use exif_overlay::config::Config;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.source.url = "https://example.com/photo.jpg".into();
/// config.output.path = "captioned.jpg".into();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where to fetch the source photograph from.
    pub source: SourceConfig,
    /// Where and how to write the composited image.
    pub output: OutputConfig,
    /// Caption layout and font settings.
    pub overlay: OverlayConfig,
}

/// Source image configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the photograph to fetch.
    pub url: String,
    /// Fetch timeout in seconds. The single GET is bounded by this; there
    /// are no retries.
    pub timeout_secs: u64,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path. Overwritten silently if it already exists.
    pub path: PathBuf,
    /// JPEG quality (1–100).
    pub jpeg_quality: u8,
}

/// Caption layout and font settings.
///
/// The caption sits in the bottom corners of the image: camera, lens and the
/// exposure summary on the left, the capture date on the right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Distance from the image edges, in pixels.
    pub margin: i32,
    /// Vertical distance between caption lines, in pixels.
    pub line_height: i32,
    /// Caption font size, in pixels.
    pub font_size: f32,
    /// Candidate font files, tried in order; first one that exists and
    /// parses wins. The embedded fallback face is used when none does.
    pub font_paths: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                url: SAMPLE_IMAGE_URL.to_string(),
                timeout_secs: 30,
            },
            output: OutputConfig {
                path: PathBuf::from("output_with_metadata.jpg"),
                jpeg_quality: 95,
            },
            overlay: OverlayConfig {
                margin: 20,
                line_height: 30,
                font_size: 24.0,
                font_paths: vec![
                    PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                    PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf"),
                    PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
                    PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
                ],
            },
        }
    }
}

impl Config {
    /// Resolve the config file path — same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::warn!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}
