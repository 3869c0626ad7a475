//! Card processing: decode, assemble, encode.
//!
//! Takes the [`ScanReport`](crate::scan::ScanReport) and turns every
//! eligible directory into its six output files. Each card is independent;
//! a failure skips that directory and the run moves on. Output files land
//! next to the raw inputs:
//!
//! ```text
//! catalog/spring/PRD-001/
//! ├── f.jpg                  # raw inputs, untouched
//! ├── b.jpg
//! ├── 1.jpg
//! ├── 2.jpg
//! ├── 3.jpg
//! ├── front-large.jpg        # generated, 856×1280
//! ├── back-large.jpg
//! ├── detail-1-large.jpg
//! ├── detail-2-large.jpg
//! ├── detail-3-large.jpg
//! └── thumbs.jpg             # generated 600×600 mosaic, written LAST
//! ```
//!
//! `thumbs.jpg` doubles as the done-marker the scanner checks, so it is
//! always the final write: the sentinel can never exist without the gallery
//! files beside it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use serde::Serialize;
use thiserror::Error;

use crate::assemble::{InvalidInput, assemble_card};
use crate::card::{Card, CardView};
use crate::naming;
use crate::scan::{self, CardSource};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

/// JPEG encoding quality (1-100). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Outcome of one catalog run, serializable for `--report`.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Directories whose six outputs were written.
    pub processed: Vec<PathBuf>,
    /// Directories passed over, with a human-readable reason each.
    pub skipped: Vec<SkippedCard>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SkippedCard {
    pub dir: PathBuf,
    pub reason: String,
}

/// Scan `root` and process every eligible card directory, sequentially.
pub fn process_catalog(root: &Path, quality: Quality) -> RunSummary {
    let report = scan::scan(root);

    let mut summary = RunSummary::default();
    for (dir, reason) in report.skipped {
        summary.skipped.push(SkippedCard {
            dir,
            reason: reason.to_string(),
        });
    }

    for source in report.cards {
        match process_card(&source, quality) {
            Ok(()) => summary.processed.push(source.dir),
            Err(err) => summary.skipped.push(SkippedCard {
                dir: source.dir,
                reason: err.to_string(),
            }),
        }
    }

    summary
}

/// Decode one directory's five raw inputs, assemble the card, and write the
/// six outputs. Nothing is written unless assembly succeeds.
pub fn process_card(source: &CardSource, quality: Quality) -> Result<(), ProcessError> {
    let mut images: Vec<Option<RgbImage>> = Vec::with_capacity(source.inputs.len());
    for path in &source.inputs {
        // A decode failure becomes an absent view; the assembler rejects the
        // card and names the view in its error.
        images.push(image::open(path).ok().map(|img| img.into_rgb8()));
    }

    let card = assemble_card(images)?;
    write_card(&card, &source.dir, quality)
}

/// Write all six views into `dir`, the thumbnail sentinel last.
fn write_card(card: &Card, dir: &Path, quality: Quality) -> Result<(), ProcessError> {
    for view in CardView::GALLERY {
        write_view(card.view(view), &dir.join(naming::output_filename(view)), quality)?;
    }
    let thumbs_path = dir.join(naming::output_filename(CardView::Thumbs));
    write_view(card.view(CardView::Thumbs), &thumbs_path, quality)
}

fn write_view(image: &RgbImage, path: &Path, quality: Quality) -> Result<(), ProcessError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.value());
    image.write_with_encoder(encoder)?;
    Ok(())
}
