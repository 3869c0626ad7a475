use clap::Parser;
use makecards::output;
use makecards::process::{self, Quality};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "makecards")]
#[command(about = "Batch-build card gallery images and mosaic thumbnails")]
#[command(long_about = "\
Batch-build card gallery images and mosaic thumbnails

Walks a product catalog tree. Every directory containing the five raw card
photos is converted into the standard output set; everything else is left
alone.

Catalog structure:

  catalog/
  ├── spring/
  │   └── PRD-001/
  │       ├── f.jpg                # raw front shot
  │       ├── b.jpg                # raw back shot
  │       ├── 1.jpg                # raw detail shots
  │       ├── 2.jpg
  │       └── 3.jpg
  └── winter/
      └── PRD-002/
          ├── f.jpg ... 3.jpg
          └── thumbs.jpg           # already processed — skipped

Each processed directory gains front-large.jpg, back-large.jpg,
detail-1-large.jpg, detail-2-large.jpg, detail-3-large.jpg (856x1280) and
thumbs.jpg (600x600 mosaic). thumbs.jpg is written last and marks the
directory as done; delete it to force a rebuild.

Directories with an incomplete photo set are skipped and reported. Raw
inputs are never modified.")]
#[command(version)]
struct Cli {
    /// Catalog root to process (searched recursively)
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// JPEG quality for generated images (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u8,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,

    /// Write the run summary as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.yes {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!("Process catalog at {}?", cli.folder.display()))
            .default(true)
            .interact()?;
        if !proceed {
            return Ok(());
        }
    }

    println!("==> Processing {}", cli.folder.display());
    let summary = process::process_catalog(&cli.folder, Quality::new(cli.quality));
    output::print_summary(&summary);

    if let Some(report_path) = &cli.report {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(report_path, json)?;
        println!("Report written to {}", report_path.display());
    }

    Ok(())
}
