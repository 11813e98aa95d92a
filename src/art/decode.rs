//! ART variant pipelines.

use alloc::vec::Vec;

use crate::bits;
use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::{Limits, check_output};
use crate::pixel::PixelLayout;
use crate::rle;
use crate::sniff::{ART_FALLBACK_RESOLUTIONS, Dimensions};

/// Uncompressed 1-bit bitmap: 16-byte header, word-aligned scanlines with
/// the shifted scanline start handled by [`bits::expand_art_row`].
pub(super) fn bitmap<'a>(
    data: &'a [u8],
    width: u32,
    height: u32,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, width, height, 1)?;
    let bpl = bits::bytes_per_line(width, true);
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height as usize {
        bits::expand_art_row(data, row, bpl, width as usize, &mut pixels);
    }
    Ok(DecodedImage::owned(pixels, width, height, PixelLayout::Gray8))
}

/// AOL-compressed: count-prefixed RLE grayscale body at offset 12.
pub(super) fn aol<'a>(
    data: &'a [u8],
    dims: Dimensions,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, dims.width, dims.height, 1)?;
    let pixels = rle::unpack_count_prefixed(&data[12..], dims.pixel_count());
    Ok(DecodedImage::owned(
        pixels,
        dims.width,
        dims.height,
        PixelLayout::Gray8,
    ))
}

/// PFS First Publisher: raw 1-bit body at offset 10.
pub(super) fn pfs<'a>(
    data: &'a [u8],
    dims: Dimensions,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, dims.width, dims.height, 1)?;
    let pixels = bits::expand_1bit_stream(&data[10..], dims.pixel_count());
    Ok(DecodedImage::owned(
        pixels,
        dims.width,
        dims.height,
        PixelLayout::Gray8,
    ))
}

/// Generic fallback: the leading bytes as raw 8-bit grayscale at the first
/// historical resolution the byte count supports, else a 320-wide crop of
/// whatever is present. Zero-copy — the pixel data is the input itself.
pub(super) fn generic<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    for (width, height) in ART_FALLBACK_RESOLUTIONS {
        let need = width as usize * height as usize;
        if data.len() >= need {
            check_output(limits, width, height, 1)?;
            return Ok(DecodedImage::borrowed(
                &data[..need],
                width,
                height,
                PixelLayout::Gray8,
            ));
        }
    }

    let width = 320u32;
    let height = (data.len() / 320).min(200) as u32;
    if height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    check_output(limits, width, height, 1)?;
    let need = width as usize * height as usize;
    Ok(DecodedImage::borrowed(
        &data[..need],
        width,
        height,
        PixelLayout::Gray8,
    ))
}
