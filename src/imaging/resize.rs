//! Exact-fit resampling.

use image::RgbImage;
use image::imageops::{self, FilterType};

/// Resize `image` to exactly `width`×`height`, stretching or squashing as
/// needed — the source aspect ratio is ignored.
///
/// When the image already has the target dimensions its pixels are returned
/// unchanged: re-running a resampler over an image that needs no work only
/// degrades it.
pub fn resize_exact(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
    }

    #[test]
    fn produces_exact_target_dimensions() {
        let img = gradient(300, 400);
        let out = resize_exact(&img, 856, 1280);
        assert_eq!((out.width(), out.height()), (856, 1280));
    }

    #[test]
    fn stretches_without_preserving_aspect() {
        // 100x100 square forced into a 50x200 box
        let img = gradient(100, 100);
        let out = resize_exact(&img, 50, 200);
        assert_eq!((out.width(), out.height()), (50, 200));
    }

    #[test]
    fn fast_path_returns_identical_pixels() {
        let img = gradient(120, 80);
        let out = resize_exact(&img, 120, 80);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn idempotent_at_target_size() {
        let img = gradient(300, 400);
        let once = resize_exact(&img, 200, 150);
        let twice = resize_exact(&once, 200, 150);
        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn solid_color_survives_resampling() {
        let img = RgbImage::from_pixel(90, 60, Rgb([10, 200, 77]));
        let out = resize_exact(&img, 45, 120);
        for pixel in out.pixels() {
            assert_eq!(*pixel, Rgb([10, 200, 77]));
        }
    }
}
