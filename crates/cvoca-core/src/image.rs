//! Image URL optimization for Cloudinary-hosted assets.
//!
//! Cloudinary applies transformations encoded in the URL path right after
//! `/upload/`. Event cards and team photos request automatic format and
//! quality, optionally resized to a preset width.

const CLOUDINARY_HOST: &str = "res.cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";

/// Common display widths, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Thumbnail,
    TeamPhoto,
    EventCard,
    Hero,
    Large,
}

impl ImageSize {
    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Thumbnail => 100,
            Self::TeamPhoto => 400,
            Self::EventCard => 800,
            Self::Hero => 1200,
            Self::Large => 1600,
        }
    }
}

/// Returns true if the URL points at Cloudinary.
pub fn is_cloudinary_url(url: &str) -> bool {
    url.contains(CLOUDINARY_HOST)
}

/// Returns true if the URL already carries width, format or quality transformations.
fn has_transformations(url: &str) -> bool {
    ["/upload/w_", "/upload/f_auto", "/upload/q_auto"]
        .iter()
        .any(|marker| url.contains(marker))
}

/// Injects `f_auto,q_auto` (and `w_<width>` when given) into a Cloudinary URL.
///
/// Non-Cloudinary URLs and URLs that already carry transformations are
/// returned unchanged.
pub fn optimized_image_url(url: &str, width: Option<u32>) -> String {
    if !is_cloudinary_url(url) || has_transformations(url) {
        return url.to_string();
    }

    let transformations = match width {
        Some(w) if w > 0 => format!("w_{},f_auto,q_auto", w),
        _ => "f_auto,q_auto".to_string(),
    };

    url.replacen(
        UPLOAD_SEGMENT,
        &format!("{}{}/", UPLOAD_SEGMENT, transformations),
        1,
    )
}

/// Optimizes a URL for one of the preset sizes.
pub fn optimized_image_url_for(url: &str, size: ImageSize) -> String {
    optimized_image_url(url, Some(size.width()))
}
