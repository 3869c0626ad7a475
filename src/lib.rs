//! # makecards
//!
//! Batch converter for greeting-card product photos. Each catalog directory
//! holding the five raw shots of one card (front, back, three details) is
//! turned into a standardized output set: five 856×1280 gallery JPEGs plus
//! one 600×600 composite mosaic thumbnail.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      catalog tree  →  eligible card directories + skips
//! 2. Assemble  5 rasters     →  Card (5 gallery images + thumbnail)
//! 3. Write     Card          →  six JPEGs, thumbs.jpg last
//! ```
//!
//! The scan and write stages are thin I/O around a pure core: assembly is a
//! synchronous in-memory computation with no shared state, so distinct cards
//! could be processed from any number of workers without coordination (this
//! binary deliberately runs them one at a time).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`card`] | Roles, sizes, mosaic layout table, the assembled [`card::Card`] value |
//! | [`imaging`] | Pure raster transforms: exact-fit resize, fill-color synthesis, mosaic composition |
//! | [`assemble`] | All-or-nothing assembly of five inputs into a six-view card |
//! | [`naming`] | Raw-input and generated-output filename conventions |
//! | [`scan`] | Catalog traversal, card-set discovery, skip classification |
//! | [`process`] | Decode → assemble → encode orchestration, run summary |
//! | [`output`] | CLI result formatting |
//!
//! # Design Decisions
//!
//! ## The thumbnail is the done-marker
//!
//! No manifest, no database: a directory is "processed" exactly when
//! `thumbs.jpg` exists. The processor therefore writes the thumbnail after
//! all five gallery files, and the scanner skips any directory that already
//! has one. Deleting `thumbs.jpg` is the supported way to force a rebuild.
//!
//! ## Previews are cut from gallery images, not raw inputs
//!
//! The mosaic is composed from the 856×1280 normalized images even though
//! the raw inputs are still at hand. Resizing twice costs a little quality
//! in theory; in exchange the thumbnail always previews exactly the pixels
//! the gallery ships, and regenerated thumbnails match the existing catalog
//! byte for byte.
//!
//! ## All-or-nothing assembly
//!
//! A [`card::Card`] has six non-optional image fields and only the
//! assembler constructs one, so a half-built card cannot leak out of any
//! API. Input defects surface as one typed error
//! ([`assemble::InvalidInput`]) naming the offending view.

pub mod assemble;
pub mod card;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
