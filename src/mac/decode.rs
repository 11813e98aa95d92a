//! MAC variant pipelines.

use super::{MAC_HEIGHT, MAC_WIDTH};
use crate::bits;
use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::{Limits, check_output};
use crate::pixel::PixelLayout;
use crate::rle;

/// PNTG body offset: past the 0x80-byte header and the 512-byte fill
/// pattern table.
const PNTG_BODY: usize = 0x280;

/// The canonical MacPaint body: past the 512-byte header, or the whole
/// buffer when the file is no longer than the header itself.
pub(super) fn body(data: &[u8]) -> &[u8] {
    if data.len() > 512 { &data[512..] } else { data }
}

pub(super) fn pntg<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, MAC_WIDTH, MAC_HEIGHT, 1)?;
    let body = data.get(PNTG_BODY..).unwrap_or(&[]);
    let pixels = rle::unpack_packbits(body, (MAC_WIDTH * MAC_HEIGHT) as usize);
    Ok(DecodedImage::owned(
        pixels,
        MAC_WIDTH,
        MAC_HEIGHT,
        PixelLayout::Gray8,
    ))
}

pub(super) fn packed<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, MAC_WIDTH, MAC_HEIGHT, 1)?;
    let pixels = rle::unpack_packbits(body(data), (MAC_WIDTH * MAC_HEIGHT) as usize);
    Ok(DecodedImage::owned(
        pixels,
        MAC_WIDTH,
        MAC_HEIGHT,
        PixelLayout::Gray8,
    ))
}

pub(super) fn raw<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, MAC_WIDTH, MAC_HEIGHT, 1)?;
    let pixels = bits::expand_1bit_stream_ink(body(data), (MAC_WIDTH * MAC_HEIGHT) as usize);
    Ok(DecodedImage::owned(
        pixels,
        MAC_WIDTH,
        MAC_HEIGHT,
        PixelLayout::Gray8,
    ))
}
