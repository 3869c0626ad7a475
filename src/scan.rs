//! Catalog traversal and card-set discovery.
//!
//! Walks a catalog tree and classifies every directory:
//!
//! - **Eligible**: all five raw inputs present and no `thumbs.jpg` — queued
//!   for processing as a [`CardSource`].
//! - **Already processed**: `thumbs.jpg` exists. The thumbnail is written
//!   last during processing, so its presence guarantees the full output set.
//! - **Incomplete**: some raw inputs present but not all five — skipped, with
//!   the missing views named in the report.
//! - **Container**: none of the five inputs — ignored silently. Catalog
//!   trees are deep (brand/season/product) and most directories just hold
//!   subdirectories.
//!
//! The walk itself never fails the run: unreadable directories become skip
//! entries so one bad mount point cannot hide the rest of the catalog.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::assemble::CARD_IMAGE_COUNT;
use crate::card::CardView;
use crate::naming;

/// A directory holding a complete set of raw card images.
#[derive(Debug, Clone)]
pub struct CardSource {
    pub dir: PathBuf,
    /// The five raw input paths in positional order: front, back, detail 1-3.
    pub inputs: [PathBuf; CARD_IMAGE_COUNT],
}

/// Why a directory was passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `thumbs.jpg` already present.
    AlreadyProcessed,
    /// Some raw inputs present, but these views are missing.
    IncompleteSet(Vec<CardView>),
    /// The directory (or an entry under it) could not be read.
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyProcessed => write!(f, "thumbs.jpg already exists"),
            SkipReason::IncompleteSet(missing) => {
                let names: Vec<String> = missing.iter().map(CardView::to_string).collect();
                write!(f, "missing {} image(s)", names.join(", "))
            }
            SkipReason::Unreadable(err) => write!(f, "unreadable: {err}"),
        }
    }
}

/// Everything the walk found: eligible card directories plus skips.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub cards: Vec<CardSource>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

/// Walk `root` recursively and classify every directory.
///
/// Directories are visited in walkdir's depth-first order, so the report is
/// deterministic for a given tree.
pub fn scan(root: &Path) -> ScanReport {
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                inspect_dir(entry.path(), &mut report);
            }
            Ok(_) => {}
            Err(err) => {
                let dir = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                report
                    .skipped
                    .push((dir, SkipReason::Unreadable(err.to_string())));
            }
        }
    }

    report
}

/// Classify one directory by the files directly inside it.
fn inspect_dir(dir: &Path, report: &mut ScanReport) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            report
                .skipped
                .push((dir.to_path_buf(), SkipReason::Unreadable(err.to_string())));
            return;
        }
    };

    let mut inputs: [Option<PathBuf>; CARD_IMAGE_COUNT] = Default::default();
    let mut has_thumbs = false;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if naming::matches(name, naming::output_filename(CardView::Thumbs)) {
            has_thumbs = true;
            continue;
        }
        for (slot, view) in inputs.iter_mut().zip(CardView::GALLERY) {
            if let Some(expected) = naming::input_filename(view)
                && naming::matches(name, expected)
            {
                *slot = Some(path.clone());
            }
        }
    }

    // Original early-return behavior: an existing thumbnail means done,
    // whatever else the directory holds.
    if has_thumbs {
        report
            .skipped
            .push((dir.to_path_buf(), SkipReason::AlreadyProcessed));
        return;
    }

    if inputs.iter().all(Option::is_none) {
        return;
    }

    match inputs {
        [Some(front), Some(back), Some(detail1), Some(detail2), Some(detail3)] => {
            report.cards.push(CardSource {
                dir: dir.to_path_buf(),
                inputs: [front, back, detail1, detail2, detail3],
            });
        }
        inputs => {
            let missing: Vec<CardView> = CardView::GALLERY
                .into_iter()
                .zip(&inputs)
                .filter(|(_, slot)| slot.is_none())
                .map(|(view, _)| view)
                .collect();
            report
                .skipped
                .push((dir.to_path_buf(), SkipReason::IncompleteSet(missing)));
        }
    }
}
