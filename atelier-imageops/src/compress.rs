use image::imageops::FilterType;
use image::DynamicImage;

use atelier_error::Result;

use crate::{encode_jpeg_data_url, MAX_PROJECT_EDGE, PROJECT_JPEG_QUALITY};

/// Scale proportionally so the longer edge is at most `max_edge`.
/// Images already within bounds pass through untouched.
pub fn shrink_to_fit(image: DynamicImage, max_edge: u32) -> DynamicImage {
    if image.width() <= max_edge && image.height() <= max_edge {
        return image;
    }
    image.resize(max_edge, max_edge, FilterType::Triangle)
}

/// The project-image replace transform: bound the longer edge to
/// [`MAX_PROJECT_EDGE`] and re-encode at [`PROJECT_JPEG_QUALITY`].
/// Deterministic for identical input bytes.
pub fn compress(image: DynamicImage) -> Result<String> {
    let bounded = shrink_to_fit(image, MAX_PROJECT_EDGE);
    encode_jpeg_data_url(&bounded, PROJECT_JPEG_QUALITY)
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage};

    use super::*;
    use crate::decode_data_url;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([180, 90, 40]),
        ))
    }

    #[test]
    fn wide_image_lands_on_the_max_edge() {
        let out = shrink_to_fit(solid(1600, 1000), 800);
        assert_eq!((out.width(), out.height()), (800, 500));
    }

    #[test]
    fn tall_image_lands_on_the_max_edge() {
        let out = shrink_to_fit(solid(500, 2000), 800);
        assert_eq!((out.width(), out.height()), (200, 800));
    }

    #[test]
    fn image_within_bounds_is_untouched() {
        let out = shrink_to_fit(solid(640, 480), 800);
        assert_eq!((out.width(), out.height()), (640, 480));
    }

    #[test]
    fn compress_produces_a_bounded_data_url() {
        let url = compress(solid(2400, 1200)).unwrap();
        let back = decode_data_url(&url).unwrap();
        assert_eq!((back.width(), back.height()), (800, 400));
    }
}
