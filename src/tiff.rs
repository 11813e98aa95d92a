//! TIFF passthrough.
//!
//! TIFF decoding is delegated entirely to the `image` crate; this adapter's
//! only job is normalizing the library's color mode onto the two layouts
//! the rest of the engine produces.

use image::DynamicImage;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::sniff::dims_in_range;

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'static>, DecodeError> {
    let img = image::load_from_memory_with_format(data, image::ImageFormat::Tiff)
        .map_err(|e| DecodeError::Tiff(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if !dims_in_range(width, height) {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // 8-bit grayscale stays grayscale; every other mode normalizes to RGB.
    let channels = if matches!(img, DynamicImage::ImageLuma8(_)) {
        1
    } else {
        3
    };
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(width as usize * height as usize * channels)?;
    }

    Ok(match img {
        DynamicImage::ImageLuma8(gray) => {
            DecodedImage::owned(gray.into_raw(), width, height, PixelLayout::Gray8)
        }
        other => DecodedImage::owned(other.into_rgb8().into_raw(), width, height, PixelLayout::Rgb8),
    })
}
