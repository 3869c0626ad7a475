//! Fill color synthesis for the blank mosaic cell.
//!
//! The sixth cell of the thumbnail mosaic has no source image. Painting it a
//! fixed color would leave a jarring flat block, so its color is derived from
//! the edges the eye compares it against: the bottom row of the detail-2
//! preview directly above it, and the right column of the detail-3 preview
//! directly beside it.

use image::{Rgb, RgbImage};

/// Synthesize the fill color from the two previews bordering the blank cell.
///
/// Per channel: the arithmetic mean of `above`'s bottom row and the
/// arithmetic mean of `beside`'s right column are averaged together, and the
/// result is truncated to an integer. Truncation (not rounding) is load
/// bearing: generated thumbnails must stay byte-identical with the existing
/// catalog.
pub fn fill_color(above: &RgbImage, beside: &RgbImage) -> Rgb<u8> {
    let a = row_mean(above, above.height() - 1);
    let b = column_mean(beside, beside.width() - 1);
    Rgb([
        ((a[0] + b[0]) / 2.0) as u8,
        ((a[1] + b[1]) / 2.0) as u8,
        ((a[2] + b[2]) / 2.0) as u8,
    ])
}

/// Per-channel mean of the pixel row at `y`.
fn row_mean(image: &RgbImage, y: u32) -> [f64; 3] {
    let mut sum = [0.0f64; 3];
    for x in 0..image.width() {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        sum[0] += f64::from(r);
        sum[1] += f64::from(g);
        sum[2] += f64::from(b);
    }
    let n = f64::from(image.width());
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

/// Per-channel mean of the pixel column at `x`.
fn column_mean(image: &RgbImage, x: u32) -> [f64; 3] {
    let mut sum = [0.0f64; 3];
    for y in 0..image.height() {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        sum[0] += f64::from(r);
        sum[1] += f64::from(g);
        sum[2] += f64::from(b);
    }
    let n = f64::from(image.height());
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_inputs_give_exact_channel_average() {
        let above = RgbImage::from_pixel(4, 4, Rgb([255, 255, 0]));
        let beside = RgbImage::from_pixel(4, 4, Rgb([255, 0, 255]));
        // floor((255+255)/2), floor((255+0)/2), floor((0+255)/2)
        assert_eq!(fill_color(&above, &beside), Rgb([255, 127, 127]));
    }

    #[test]
    fn only_the_facing_edges_matter() {
        // Everything except the bottom row / right column is noise.
        let mut above = RgbImage::from_pixel(3, 3, Rgb([9, 9, 9]));
        for x in 0..3 {
            above.put_pixel(x, 2, Rgb([100, 40, 60]));
        }
        let mut beside = RgbImage::from_pixel(3, 3, Rgb([200, 200, 200]));
        for y in 0..3 {
            beside.put_pixel(2, y, Rgb([20, 80, 120]));
        }
        assert_eq!(fill_color(&above, &beside), Rgb([60, 60, 90]));
    }

    #[test]
    fn fractional_means_truncate_not_round() {
        // Bottom row of 10 and 11 → mean 10.5; right column solid 10.
        // Combined (10.5 + 10) / 2 = 10.25 → 10. Rounding would also give
        // 10 here, so use a case where they differ: means 11 and 10 →
        // 10.5 → must become 10, not 11.
        let mut above = RgbImage::new(2, 1);
        above.put_pixel(0, 0, Rgb([11, 11, 11]));
        above.put_pixel(1, 0, Rgb([11, 11, 11]));
        let beside = RgbImage::from_pixel(1, 2, Rgb([10, 10, 10]));
        assert_eq!(fill_color(&above, &beside), Rgb([10, 10, 10]));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let above = RgbImage::from_fn(7, 5, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 17]));
        let beside = RgbImage::from_fn(5, 7, |x, y| Rgb([(y * 30) as u8, (x * 40) as u8, 200]));
        assert_eq!(fill_color(&above, &beside), fill_color(&above, &beside));
    }

    #[test]
    fn differing_edge_lengths_average_independently() {
        // A wide row and a short column: each mean is over its own length.
        let above = RgbImage::from_pixel(10, 2, Rgb([40, 40, 40]));
        let beside = RgbImage::from_pixel(2, 3, Rgb([80, 80, 80]));
        assert_eq!(fill_color(&above, &beside), Rgb([60, 60, 60]));
    }
}
