use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use exif_overlay::metadata::ExifTagSet;
use exif_overlay::{config, fetch, metadata, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "exif-overlay",
    version,
    about = "Burn EXIF metadata captions into photos — camera, lens, exposure and capture date rendered onto the image"
)]
struct Cli {
    /// Source image URL (overrides the config)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Output file path (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Font file for the caption (tried before the configured candidates)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Display the extracted EXIF tags and exit without rendering
    #[arg(long = "show-exif")]
    show_exif: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    // Load config and apply CLI overrides
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.source.url = url;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if let Some(font) = cli.font {
        config.overlay.font_paths.insert(0, font);
    }

    // Handle --show-exif: fetch and print the raw tag set, no rendering
    if cli.show_exif {
        let client = reqwest::Client::new();
        let timeout = Duration::from_secs(config.source.timeout_secs);
        let bytes = fetch::fetch_image(&client, &config.source.url, timeout).await?;
        let tags = metadata::read_tag_set(&bytes)?;
        print_tag_set(&config.source.url, &tags);
        return Ok(());
    }

    let report = pipeline::run(&config).await?;

    log::info!(
        "Done: {} ({}x{}, {} bytes fetched)",
        report.output_path.display(),
        report.width,
        report.height,
        report.bytes_fetched
    );
    println!(
        "Caption: {} | {} | {}",
        report.metadata.camera,
        report.metadata.lens,
        report.metadata.exposure_line()
    );
    println!("Captured: {}", report.metadata.datetime);
    println!("Saved to {}", report.output_path.display());

    Ok(())
}

// ANSI color codes
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Print the raw tag table for --show-exif.
fn print_tag_set(url: &str, tags: &ExifTagSet) {
    println!();
    println!("{BOLD}Source:{RESET} {url}");
    println!("{DIM}{}{RESET}", "─".repeat(60));

    if tags.is_empty() {
        println!("  {DIM}(no EXIF metadata found){RESET}");
        println!();
        return;
    }

    for (name, value) in tags.iter() {
        println!("  {name:<28} : {value}");
    }
    println!();
}
