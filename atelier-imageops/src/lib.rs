//! Client-side image pipeline: bounded JPEG recompression for project
//! images and an interactive square crop for avatars. Both transforms
//! produce self-contained `data:image/jpeg;base64,...` strings that live
//! inside the portfolio document.

mod compress;
mod crop;
mod dataurl;

pub use compress::{compress, shrink_to_fit};
pub use crop::{render_avatar, CropState};
pub use dataurl::{decode_data_url, encode_jpeg_data_url, load_image};

/// Longest edge a stored project image may have.
pub const MAX_PROJECT_EDGE: u32 = 800;

/// JPEG quality for recompressed project images.
pub const PROJECT_JPEG_QUALITY: u8 = 50;

/// Output edge of the square avatar.
pub const AVATAR_SIZE: u32 = 400;

/// JPEG quality for the rendered avatar.
pub const AVATAR_JPEG_QUALITY: u8 = 70;

/// Zoom bounds of the crop window.
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 3.0;
