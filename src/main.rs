use clap::Parser;
use square_pad::process::{self, DEFAULT_RATIO_LIMIT, SquareConfig};
use square_pad::{output, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "square-pad")]
#[command(about = "Pad overly wide or tall images into white squares")]
#[command(long_about = "\
Pad overly wide or tall images into white squares

Every file below the source directory is tried as an image. JPEG and PNG
files whose width:height exceeds the ratio limit (or whose height:width
does) get a square copy next to them, with the original centered on a
white canvas:

  photos/
  ├── pano.jpg              # 3000x1000, over the 2.0 limit
  ├── pano_squared.jpg      # 3000x3000, written by square-pad
  ├── portrait.png          # 1000x1500, within the limit, left alone
  └── notes.txt             # not an image, skipped

Originals are never modified. Ratios exactly at the limit are not padded.")]
#[command(version = version_string())]
struct Cli {
    /// Ratio limit: pad images wider than LIMIT:1 or taller than 1:LIMIT
    #[arg(
        long = "ratiolimit",
        value_name = "LIMIT",
        default_value_t = DEFAULT_RATIO_LIMIT,
        allow_negative_numbers = true
    )]
    ratio_limit: f64,

    /// Directory to scan recursively
    #[arg(long, default_value = ".")]
    source: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = SquareConfig {
        ratio_limit: cli.ratio_limit,
        ..SquareConfig::default()
    };

    output::print_banner(&config, &cli.source);
    let candidates = scan::scan(&cli.source)?;
    for err in &candidates.unreadable {
        eprintln!("{}", output::format_unreadable(err));
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_process_event(&event);
        }
    });
    let summary = process::process(&candidates.files, &config, Some(tx));
    printer.join().map_err(|_| "output thread panicked")?;

    output::print_summary(&summary);
    Ok(())
}
