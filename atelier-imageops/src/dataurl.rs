use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use atelier_error::{AtelierError, Result};

const JPEG_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode an image as a JPEG data-URL at the given quality.
pub fn encode_jpeg_data_url(
    image: &DynamicImage,
    quality: u8,
) -> Result<String> {
    // The JPEG encoder has no alpha support; flatten first.
    let rgb = image.to_rgb8();

    let mut bytes = Vec::new();
    let mut encoder =
        JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality);
    encoder
        .encode_image(&rgb)
        .map_err(|err| AtelierError::Image(err.to_string()))?;

    Ok(format!("{}{}", JPEG_PREFIX, STANDARD.encode(&bytes)))
}

/// Decode a `data:*;base64,` string back into an image. A bare base64
/// payload without the prefix is accepted too.
pub fn decode_data_url(url: &str) -> Result<DynamicImage> {
    let payload = if url.starts_with("data:") {
        url.split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| {
                AtelierError::Image(
                    "data-URL without a payload separator".to_owned(),
                )
            })?
    } else {
        url
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|err| AtelierError::Image(err.to_string()))?;
    image::load_from_memory(&bytes)
        .map_err(|err| AtelierError::Image(err.to_string()))
}

/// Load an image file from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|err| {
        AtelierError::Image(format!("cannot open {:?}: {}", path, err))
    })
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage};

    use super::*;

    fn checker(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                image::Rgb([220, 220, 220])
            } else {
                image::Rgb([40, 40, 40])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn encode_then_decode_preserves_dimensions() {
        let img = checker(64, 48);
        let url = encode_jpeg_data_url(&img, 70).unwrap();
        assert!(url.starts_with(JPEG_PREFIX));

        let back = decode_data_url(&url).unwrap();
        assert_eq!(back.width(), 64);
        assert_eq!(back.height(), 48);
    }

    #[test]
    fn bare_base64_payload_is_accepted() {
        let img = checker(16, 16);
        let url = encode_jpeg_data_url(&img, 70).unwrap();
        let payload = url.strip_prefix(JPEG_PREFIX).unwrap();
        assert!(decode_data_url(payload).is_ok());
    }

    #[test]
    fn garbage_input_is_an_image_error() {
        assert!(decode_data_url("data:image/jpeg;base64,@@@@").is_err());
        assert!(decode_data_url("data:image/jpeg").is_err());
    }
}
