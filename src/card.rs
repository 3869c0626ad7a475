//! Card roles, output sizes, and the fixed mosaic layout.
//!
//! A card is one product entry in the catalog: five photographs (front, back,
//! three detail shots) plus the composite thumbnail derived from them. This
//! module holds the shared vocabulary the rest of the pipeline is written
//! against:
//!
//! - [`CardView`] — the six roles, in the positional order raw uploads use
//! - [`Cell`] — a rectangle on the thumbnail canvas
//! - [`CardView::preview_cell`] — the role → cell layout lookup
//! - [`Card`] — a fully assembled six-image output set
//!
//! ## Output sizes
//!
//! | Output | Size |
//! |---|---|
//! | Gallery image (each of the five views) | 856×1280 |
//! | Thumbnail canvas | 600×600 |
//!
//! The six mosaic cells tile the 600×600 canvas exactly, with no overlap:
//! the front preview fills the left two thirds, the back sits top-right, and
//! the three detail previews plus the synthesized fill cell share the
//! bottom-right quadrant.

use image::RgbImage;
use std::fmt;

/// Width of every generated gallery image, in pixels.
pub const GALLERY_WIDTH: u32 = 856;
/// Height of every generated gallery image, in pixels.
pub const GALLERY_HEIGHT: u32 = 1280;
/// Edge length of the square thumbnail canvas, in pixels.
pub const THUMB_SIZE: u32 = 600;

/// One of the six roles an image plays within a card.
///
/// The declaration order of the five gallery views matches the positional
/// order of raw input lists (front first, detail 3 last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardView {
    Front,
    Back,
    Detail1,
    Detail2,
    Detail3,
    /// The composite mosaic preview; derived, never a raw input.
    Thumbs,
}

impl CardView {
    /// The five photographed views, in positional input order.
    pub const GALLERY: [CardView; 5] = [
        CardView::Front,
        CardView::Back,
        CardView::Detail1,
        CardView::Detail2,
        CardView::Detail3,
    ];

    /// All six views, gallery order then thumbnail.
    pub const ALL: [CardView; 6] = [
        CardView::Front,
        CardView::Back,
        CardView::Detail1,
        CardView::Detail2,
        CardView::Detail3,
        CardView::Thumbs,
    ];

    /// Where this view's preview lands on the thumbnail canvas.
    ///
    /// Returns `None` for [`CardView::Thumbs`] — the thumbnail is the canvas,
    /// not a cell on it. The sixth cell of the mosaic carries no image at
    /// all; see [`FILL_CELL`].
    pub fn preview_cell(self) -> Option<Cell> {
        let cell = match self {
            CardView::Front => Cell::new(0, 0, 400, 600),
            CardView::Back => Cell::new(400, 0, 200, 300),
            CardView::Detail1 => Cell::new(400, 300, 100, 150),
            CardView::Detail2 => Cell::new(500, 300, 100, 150),
            CardView::Detail3 => Cell::new(400, 450, 100, 150),
            CardView::Thumbs => return None,
        };
        Some(cell)
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardView::Front => "front",
            CardView::Back => "back",
            CardView::Detail1 => "detail 1",
            CardView::Detail2 => "detail 2",
            CardView::Detail3 => "detail 3",
            CardView::Thumbs => "thumbnail",
        };
        f.write_str(name)
    }
}

/// An axis-aligned rectangle on the thumbnail canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Cell {
            x,
            y,
            width,
            height,
        }
    }
}

/// The mosaic cell with no source image, colored by
/// [`fill_color`](crate::imaging::fill_color) for visual continuity with the
/// detail previews above and beside it.
pub const FILL_CELL: Cell = Cell::new(500, 450, 100, 150);

/// A fully assembled card: all six views present, every gallery view
/// 856×1280 and the thumbnail 600×600.
///
/// Only [`assemble_card`](crate::assemble::assemble_card) constructs these,
/// and only on complete success — a partially populated card cannot exist.
#[derive(Debug, Clone)]
pub struct Card {
    front: RgbImage,
    back: RgbImage,
    detail1: RgbImage,
    detail2: RgbImage,
    detail3: RgbImage,
    thumbs: RgbImage,
}

impl Card {
    pub(crate) fn new(
        front: RgbImage,
        back: RgbImage,
        detail1: RgbImage,
        detail2: RgbImage,
        detail3: RgbImage,
        thumbs: RgbImage,
    ) -> Self {
        Card {
            front,
            back,
            detail1,
            detail2,
            detail3,
            thumbs,
        }
    }

    /// The image filling the given role.
    pub fn view(&self, view: CardView) -> &RgbImage {
        match view {
            CardView::Front => &self.front,
            CardView::Back => &self.back,
            CardView::Detail1 => &self.detail1,
            CardView::Detail2 => &self.detail2,
            CardView::Detail3 => &self.detail3,
            CardView::Thumbs => &self.thumbs,
        }
    }

    /// All six `(role, image)` pairs in [`CardView::ALL`] order.
    pub fn views(&self) -> impl Iterator<Item = (CardView, &RgbImage)> {
        CardView::ALL.into_iter().map(|v| (v, self.view(v)))
    }
}
