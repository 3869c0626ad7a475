//! Thumbnail mosaic composition.

use image::imageops;
use image::{Rgb, RgbImage};

use super::fill::fill_color;
use super::resize::resize_exact;
use crate::card::{CardView, Cell, FILL_CELL, THUMB_SIZE};

/// Compose the 600×600 mosaic thumbnail from the five gallery images.
///
/// Each input is resized down to its preview cell independently and pasted
/// at the fixed position [`CardView::preview_cell`] prescribes — a plain
/// raster overwrite, no blending. The remaining cell is painted with the
/// color [`fill_color`] synthesizes from the detail-2 and detail-3
/// *previews* (not the full-size inputs), so the fill matches what is
/// actually on the canvas next to it.
pub fn compose_thumbnail(
    front: &RgbImage,
    back: &RgbImage,
    detail1: &RgbImage,
    detail2: &RgbImage,
    detail3: &RgbImage,
) -> RgbImage {
    let mut canvas = RgbImage::new(THUMB_SIZE, THUMB_SIZE);

    paste_preview(&mut canvas, CardView::Front, front);
    paste_preview(&mut canvas, CardView::Back, back);
    paste_preview(&mut canvas, CardView::Detail1, detail1);
    let above = paste_preview(&mut canvas, CardView::Detail2, detail2);
    let beside = paste_preview(&mut canvas, CardView::Detail3, detail3);

    if let (Some(above), Some(beside)) = (above, beside) {
        paint_cell(&mut canvas, FILL_CELL, fill_color(&above, &beside));
    }

    canvas
}

/// Resize `image` to `view`'s cell and paste it there; returns the preview
/// for callers that need it (fill synthesis). `None` only for the thumbnail
/// role, which has no cell.
fn paste_preview(canvas: &mut RgbImage, view: CardView, image: &RgbImage) -> Option<RgbImage> {
    let cell = view.preview_cell()?;
    let preview = resize_exact(image, cell.width, cell.height);
    imageops::replace(canvas, &preview, i64::from(cell.x), i64::from(cell.y));
    Some(preview)
}

fn paint_cell(canvas: &mut RgbImage, cell: Cell, color: Rgb<u8>) {
    for y in cell.y..cell.y + cell.height {
        for x in cell.x..cell.x + cell.width {
            canvas.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
    const MAGENTA: Rgb<u8> = Rgb([255, 0, 255]);

    fn solid(color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(300, 400, color)
    }

    fn compose_solid_set() -> RgbImage {
        compose_thumbnail(
            &solid(RED),
            &solid(GREEN),
            &solid(BLUE),
            &solid(YELLOW),
            &solid(MAGENTA),
        )
    }

    #[test]
    fn canvas_is_600_square() {
        let thumb = compose_solid_set();
        assert_eq!((thumb.width(), thumb.height()), (600, 600));
    }

    #[test]
    fn each_preview_lands_in_its_cell() {
        let thumb = compose_solid_set();
        // Sample the center of each placement rectangle.
        assert_eq!(*thumb.get_pixel(200, 300), RED, "front");
        assert_eq!(*thumb.get_pixel(500, 150), GREEN, "back");
        assert_eq!(*thumb.get_pixel(450, 375), BLUE, "detail 1");
        assert_eq!(*thumb.get_pixel(550, 375), YELLOW, "detail 2");
        assert_eq!(*thumb.get_pixel(450, 525), MAGENTA, "detail 3");
    }

    #[test]
    fn fill_cell_blends_its_neighbors() {
        let thumb = compose_solid_set();
        // floor((yellow + magenta) / 2) channel-wise
        let expected = Rgb([255, 127, 127]);
        assert_eq!(*thumb.get_pixel(550, 525), expected);
        // Whole cell is one flat color, corners included.
        assert_eq!(*thumb.get_pixel(500, 450), expected);
        assert_eq!(*thumb.get_pixel(599, 599), expected);
    }

    #[test]
    fn cell_edges_are_overwritten_not_blended() {
        let thumb = compose_solid_set();
        // Pixels straddling the front/back boundary belong wholly to one side.
        assert_eq!(*thumb.get_pixel(399, 10), RED);
        assert_eq!(*thumb.get_pixel(400, 10), GREEN);
    }

    #[test]
    fn preview_sized_inputs_skip_resampling() {
        // A 400x600 front input is already preview-sized; the fast path must
        // carry its pixels through untouched.
        let front = RgbImage::from_fn(400, 600, |x, y| Rgb([(x % 251) as u8, (y % 241) as u8, 3]));
        let thumb = compose_thumbnail(
            &front,
            &solid(GREEN),
            &solid(BLUE),
            &solid(YELLOW),
            &solid(MAGENTA),
        );
        for y in 0..600 {
            for x in 0..400 {
                assert_eq!(thumb.get_pixel(x, y), front.get_pixel(x, y));
            }
        }
    }
}
