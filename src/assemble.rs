//! All-or-nothing card assembly.
//!
//! [`assemble_card`] is the single entry point that turns five decoded raw
//! photographs into a complete [`Card`]: each input normalized to gallery
//! size, plus the mosaic thumbnail composed from the normalized set. Any
//! defect in the input list — wrong count, a missing or undecodable view, a
//! degenerate raster — rejects the whole card with [`InvalidInput`]; there
//! is no partial result to clean up after.

use image::RgbImage;
use thiserror::Error;

use crate::card::{Card, CardView, GALLERY_HEIGHT, GALLERY_WIDTH};
use crate::imaging::{compose_thumbnail, resize_exact};

/// Number of raw photographs a card is assembled from.
pub const CARD_IMAGE_COUNT: usize = 5;

/// Why a card could not be assembled.
///
/// These are input defects, not processing failures: the resize and
/// composition steps themselves cannot fail once their preconditions hold.
#[derive(Error, Debug)]
pub enum InvalidInput {
    #[error("expected {CARD_IMAGE_COUNT} card images (front, back, detail 1-3), got {0}")]
    WrongCount(usize),
    #[error("{0} image is missing or could not be decoded")]
    MissingView(CardView),
    #[error("{0} image has zero width or height")]
    EmptyView(CardView),
}

/// Assemble a card from exactly five rasters in positional order: front,
/// back, detail 1, detail 2, detail 3. `None` entries mark images an
/// upstream decoder failed to supply.
///
/// On success every gallery view is exactly 856×1280 and the thumbnail
/// 600×600. The thumbnail is composed from the *normalized* gallery images,
/// not the raw inputs — previews are cut down from the same pixels the
/// gallery ships, keeping both outputs visually consistent (and matching
/// the output of earlier generations of this tool).
pub fn assemble_card(images: Vec<Option<RgbImage>>) -> Result<Card, InvalidInput> {
    let count = images.len();
    let images: [Option<RgbImage>; CARD_IMAGE_COUNT] = images
        .try_into()
        .map_err(|_| InvalidInput::WrongCount(count))?;
    let [front, back, detail1, detail2, detail3] = images;

    let front = normalize(CardView::Front, front)?;
    let back = normalize(CardView::Back, back)?;
    let detail1 = normalize(CardView::Detail1, detail1)?;
    let detail2 = normalize(CardView::Detail2, detail2)?;
    let detail3 = normalize(CardView::Detail3, detail3)?;

    let thumbs = compose_thumbnail(&front, &back, &detail1, &detail2, &detail3);

    Ok(Card::new(front, back, detail1, detail2, detail3, thumbs))
}

/// Check one raw view and bring it to gallery size.
fn normalize(view: CardView, image: Option<RgbImage>) -> Result<RgbImage, InvalidInput> {
    let image = image.ok_or(InvalidInput::MissingView(view))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(InvalidInput::EmptyView(view));
    }
    Ok(resize_exact(&image, GALLERY_WIDTH, GALLERY_HEIGHT))
}
