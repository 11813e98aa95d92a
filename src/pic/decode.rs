//! PIC variant pipelines.

use alloc::vec::Vec;

use crate::bits;
use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::{Limits, check_output};
use crate::mac::{MAC_HEIGHT, MAC_WIDTH};
use crate::palette::Palette;
use crate::pixel::PixelLayout;
use crate::reader;
use crate::rle;
use crate::sniff::{PIC_FALLBACK_RESOLUTIONS, dims_in_range};

/// Body offset past the PNTG fill pattern table, with a short-file
/// fallback past the bare header.
const PNTG_BODY: usize = 0x280;
const PNTG_BODY_SHORT: usize = 0x80;

/// 17-byte PICtor header followed by an optional 768-byte 6-bit palette.
const PICTOR_HEADER: usize = 17;
const PICTOR_PALETTE: usize = 768;

/// PICT/PNTG lineage: the header dimensions are unreliable, so the
/// canonical MacPaint canvas is forced.
pub(super) fn pntg_pict<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, MAC_WIDTH, MAC_HEIGHT, 1)?;
    let offset = if data.len() < PNTG_BODY {
        PNTG_BODY_SHORT
    } else {
        PNTG_BODY
    };
    let body = data.get(offset..).unwrap_or(&[]);
    let pixels = rle::unpack_packbits(body, (MAC_WIDTH * MAC_HEIGHT) as usize);
    Ok(DecodedImage::owned(
        pixels,
        MAC_WIDTH,
        MAC_HEIGHT,
        PixelLayout::Gray8,
    ))
}

/// Standard PICtor.
pub(super) fn pictor<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    let width = u32::from(reader::u16_le(data, 2));
    let height = u32::from(reader::u16_le(data, 4));
    if !dims_in_range(width, height) {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    let bits_per_pixel = reader::byte(data, 6);

    let mut offset = PICTOR_HEADER;
    let mut palette = None;
    if bits_per_pixel == 8 && data.len() >= PICTOR_HEADER + PICTOR_PALETTE {
        palette = Some(Palette::from_6bit_rgb(
            &data[PICTOR_HEADER..PICTOR_HEADER + PICTOR_PALETTE],
        ));
        offset += PICTOR_PALETTE;
    }
    check_output(
        limits,
        width,
        height,
        if palette.is_some() { 3 } else { 1 },
    )?;

    let body = &data[offset..];
    let target = width as usize * height as usize;
    let mut indices = Vec::with_capacity(target);
    rle::RunReader::new(body, true).read_into(&mut indices, target);
    if indices.len() < target {
        // The original encoder's decoder tops a shortfall up from the start
        // of the body, all or nothing; the rest is black.
        let remaining = target - indices.len();
        if body.len() >= remaining {
            indices.extend_from_slice(&body[..remaining]);
        }
    }
    indices.resize(target, 0);

    Ok(match palette {
        Some(pal) => {
            let mut pixels = Vec::with_capacity(target * 3);
            for &index in &indices {
                pixels.extend_from_slice(&pal.color(index));
            }
            DecodedImage::owned(pixels, width, height, PixelLayout::Rgb8).with_palette(pal)
        }
        None if bits_per_pixel == 1 => {
            for value in &mut indices {
                *value = if *value != 0 { 255 } else { 0 };
            }
            DecodedImage::owned(indices, width, height, PixelLayout::Gray8)
        }
        None => DecodedImage::owned(indices, width, height, PixelLayout::Gray8),
    })
}

/// Generic fallback: 1-bit data after an assumed 256-byte header at the
/// first historical resolution the byte count supports, else 320×200.
pub(super) fn generic<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    for (width, height) in PIC_FALLBACK_RESOLUTIONS {
        let need = width as usize * height as usize;
        if data.len() >= need + 256 {
            check_output(limits, width, height, 1)?;
            let pixels = bits::expand_1bit_stream(&data[256..], need);
            return Ok(DecodedImage::owned(pixels, width, height, PixelLayout::Gray8));
        }
    }

    let (width, height) = (320u32, 200u32);
    check_output(limits, width, height, 1)?;
    let body = data.get(256..).unwrap_or(&[]);
    let pixels = bits::expand_1bit_stream(body, (width * height) as usize);
    Ok(DecodedImage::owned(pixels, width, height, PixelLayout::Gray8))
}
