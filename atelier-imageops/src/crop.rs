use image::imageops::FilterType;
use image::DynamicImage;

use atelier_error::Result;

use crate::{
    encode_jpeg_data_url, AVATAR_JPEG_QUALITY, AVATAR_SIZE, MAX_ZOOM,
    MIN_ZOOM,
};

/// User-adjustable pan/zoom state over a square crop window.
///
/// At zoom 1 the window is the largest centered square that fits the
/// image; zooming narrows it. Pan offsets are in source pixels and the
/// window is clamped to stay inside the image.
#[derive(Clone, Copy, Debug)]
pub struct CropState {
    pub pan_x: f32,
    pub pan_y: f32,
    pub zoom: f32,
}

impl Default for CropState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: MIN_ZOOM,
        }
    }
}

impl CropState {
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// The selected pixel rectangle as `(x, y, side)` for an image of the
    /// given dimensions.
    pub fn crop_rect(&self, width: u32, height: u32) -> (u32, u32, u32) {
        let short_edge = width.min(height).max(1) as f32;
        let side = (short_edge / self.zoom).round().max(1.0) as u32;
        let side = side.min(width).min(height);

        let clamp_axis = |span: u32, pan: f32| -> u32 {
            let max_offset = (span - side) as f32;
            let centered = max_offset / 2.0 + pan;
            centered.clamp(0.0, max_offset).round() as u32
        };

        (clamp_axis(width, self.pan_x), clamp_axis(height, self.pan_y), side)
    }
}

/// Sample the selected rectangle and scale it to the fixed avatar output.
/// Single-shot: the caller gets one encoded string per invocation.
pub fn render_avatar(
    image: &DynamicImage,
    state: &CropState,
) -> Result<String> {
    let (x, y, side) = state.crop_rect(image.width(), image.height());
    let avatar = image
        .crop_imm(x, y, side, side)
        .resize_exact(AVATAR_SIZE, AVATAR_SIZE, FilterType::Triangle);
    encode_jpeg_data_url(&avatar, AVATAR_JPEG_QUALITY)
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage};

    use super::*;
    use crate::decode_data_url;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn zoom_clamps_to_the_allowed_range() {
        let mut state = CropState::default();
        state.zoom_by(-5.0);
        assert_eq!(state.zoom, MIN_ZOOM);
        state.zoom_by(10.0);
        assert_eq!(state.zoom, MAX_ZOOM);
    }

    #[test]
    fn default_window_is_the_centered_short_edge_square() {
        let state = CropState::default();
        let (x, y, side) = state.crop_rect(800, 600);
        assert_eq!(side, 600);
        assert_eq!(x, 100);
        assert_eq!(y, 0);
    }

    #[test]
    fn zoom_narrows_the_window() {
        let mut state = CropState::default();
        state.zoom_by(1.0); // zoom = 2
        let (_, _, side) = state.crop_rect(800, 600);
        assert_eq!(side, 300);
    }

    #[test]
    fn pan_is_clamped_inside_the_image() {
        let mut state = CropState::default();
        state.pan_by(-10_000.0, 10_000.0);
        let (x, y, side) = state.crop_rect(800, 600);
        assert_eq!(x, 0);
        assert_eq!(y + side, 600);
    }

    #[test]
    fn rendered_avatar_is_the_fixed_square() {
        let url =
            render_avatar(&gradient(900, 500), &CropState::default()).unwrap();
        let back = decode_data_url(&url).unwrap();
        assert_eq!((back.width(), back.height()), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[test]
    fn tiny_images_still_produce_the_fixed_square() {
        let url =
            render_avatar(&gradient(20, 30), &CropState::default()).unwrap();
        let back = decode_data_url(&url).unwrap();
        assert_eq!((back.width(), back.height()), (AVATAR_SIZE, AVATAR_SIZE));
    }
}
