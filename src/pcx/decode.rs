//! PCX header parsing and pixel-mode pipelines.

use alloc::vec::Vec;

use crate::bits;
use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::{Limits, check_output};
use crate::palette::Palette;
use crate::pixel::PixelLayout;
use crate::planes;
use crate::reader;
use crate::rle::RunReader;
use crate::sniff::MAX_DIMENSION;

const HEADER_LEN: usize = 128;

/// Fields consumed from the 128-byte PCX prologue.
pub(crate) struct PcxHeader {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
    pub nplanes: u8,
    pub bytes_per_line: usize,
    pub compressed: bool,
}

pub(crate) fn parse_header(data: &[u8]) -> Result<PcxHeader, DecodeError> {
    if data.len() < HEADER_LEN {
        return Err(DecodeError::TooSmall {
            needed: HEADER_LEN,
            actual: data.len(),
        });
    }
    if data[0] != 0x0A {
        return Err(DecodeError::BadSignature("PCX"));
    }

    let xmin = i64::from(reader::u16_le(data, 4));
    let ymin = i64::from(reader::u16_le(data, 6));
    let xmax = i64::from(reader::u16_le(data, 8));
    let ymax = i64::from(reader::u16_le(data, 10));
    let width = xmax - xmin + 1;
    let height = ymax - ymin + 1;
    if width <= 0 || height <= 0 || width > i64::from(MAX_DIMENSION) || height > i64::from(MAX_DIMENSION)
    {
        return Err(DecodeError::InvalidDimensions {
            width: width.clamp(0, i64::from(u32::MAX)) as u32,
            height: height.clamp(0, i64::from(u32::MAX)) as u32,
        });
    }

    Ok(PcxHeader {
        width: width as u32,
        height: height as u32,
        bits_per_pixel: data[3],
        nplanes: data[65],
        bytes_per_line: usize::from(reader::u16_le(data, 66)),
        compressed: data[2] == 1,
    })
}

pub(super) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    let header = parse_header(data)?;
    let body = &data[HEADER_LEN..];
    match (header.bits_per_pixel, header.nplanes) {
        (8, 1) => decode_8bit(data, body, &header, limits),
        (1, 1) => decode_1bit(body, &header, limits),
        (4, 1) => decode_4bit(data, body, &header, limits),
        (1, 3) | (1, 4) => decode_planar(data, body, &header, limits),
        (bpp, planes) => Err(DecodeError::UnrecognizedVariant(alloc::format!(
            "PCX with {bpp} bpp and {planes} planes"
        ))),
    }
}

/// Row-at-a-time scanline decoder. Each row is decoded with a fresh
/// `row_len` budget into a reusable buffer, padded or clipped to exactly
/// that length, so a malformed run neither bleeds across rows nor drives
/// allocation beyond a single scanline.
struct Scanlines<'a> {
    reader: RunReader<'a>,
    row_len: usize,
    line: Vec<u8>,
}

impl<'a> Scanlines<'a> {
    fn new(body: &'a [u8], row_len: usize, compressed: bool) -> Self {
        Self {
            reader: RunReader::new(body, compressed),
            row_len,
            line: Vec::with_capacity(row_len),
        }
    }

    fn next_row(&mut self) -> &[u8] {
        self.line.clear();
        self.reader.read_into(&mut self.line, self.row_len);
        self.line.resize(self.row_len, 0);
        &self.line
    }
}

/// 256-color: one 8-bit index per pixel, resolved through the trailing VGA
/// palette block when present, grayscale indices otherwise.
fn decode_8bit<'a>(
    data: &'a [u8],
    body: &[u8],
    header: &PcxHeader,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    let palette = Palette::from_pcx_trailer(data);
    check_output(
        limits,
        header.width,
        header.height,
        if palette.is_some() { 3 } else { 1 },
    )?;

    let width = header.width as usize;
    let height = header.height as usize;
    let mut rows = Scanlines::new(body, header.bytes_per_line, header.compressed);

    match palette {
        Some(pal) => {
            let mut pixels = Vec::with_capacity(width * height * 3);
            for _ in 0..height {
                let line = rows.next_row();
                for col in 0..width {
                    let index = line.get(col).copied().unwrap_or(0);
                    pixels.extend_from_slice(&pal.color(index));
                }
            }
            Ok(
                DecodedImage::owned(pixels, header.width, header.height, PixelLayout::Rgb8)
                    .with_palette(pal),
            )
        }
        None => {
            let mut pixels = Vec::with_capacity(width * height);
            for _ in 0..height {
                let line = rows.next_row();
                for col in 0..width {
                    pixels.push(line.get(col).copied().unwrap_or(0));
                }
            }
            Ok(DecodedImage::owned(
                pixels,
                header.width,
                header.height,
                PixelLayout::Gray8,
            ))
        }
    }
}

/// Monochrome: 1-bit samples, set bit = white.
fn decode_1bit<'a>(
    body: &[u8],
    header: &PcxHeader,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, header.width, header.height, 1)?;

    let width = header.width as usize;
    let height = header.height as usize;
    let mut rows = Scanlines::new(body, header.bytes_per_line, header.compressed);

    let mut pixels = Vec::with_capacity(width * height);
    for _ in 0..height {
        bits::expand_1bit_row(rows.next_row(), width, &mut pixels);
    }
    Ok(DecodedImage::owned(
        pixels,
        header.width,
        header.height,
        PixelLayout::Gray8,
    ))
}

/// 16-color packed: two 4-bit indices per byte, resolved through the
/// 16-entry palette embedded in the header at bytes 16–63.
fn decode_4bit<'a>(
    data: &'a [u8],
    body: &[u8],
    header: &PcxHeader,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, header.width, header.height, 3)?;

    let palette = Palette::from_raw_rgb(&data[16..64]);
    let width = header.width as usize;
    let height = header.height as usize;
    let mut rows = Scanlines::new(body, header.bytes_per_line, header.compressed);

    let mut pixels = Vec::with_capacity(width * height * 3);
    let mut nibbles = Vec::with_capacity(width);
    for _ in 0..height {
        nibbles.clear();
        bits::expand_4bit_row(rows.next_row(), width, &mut nibbles);
        for &index in &nibbles {
            pixels.extend_from_slice(&palette.color(index));
        }
    }
    Ok(
        DecodedImage::owned(pixels, header.width, header.height, PixelLayout::Rgb8)
            .with_palette(palette),
    )
}

/// EGA/VGA planar: each physical scanline holds `nplanes` consecutive
/// 1-bit planes. Four planes form a palette index per pixel; three planes
/// map directly onto RGB channels.
fn decode_planar<'a>(
    data: &'a [u8],
    body: &[u8],
    header: &PcxHeader,
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    check_output(limits, header.width, header.height, 3)?;

    let width = header.width as usize;
    let height = header.height as usize;
    let nplanes = usize::from(header.nplanes);
    let mut rows = Scanlines::new(body, header.bytes_per_line * nplanes, header.compressed);

    // The 16-entry header palette is always present in a full-size header;
    // the EGA table covers headerless fragments.
    let palette = if data.len() >= 64 {
        Palette::from_raw_rgb(&data[16..64])
    } else {
        Palette::ega()
    };

    let mut pixels = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        let line = rows.next_row();
        if nplanes == 4 {
            planes::compose_ega_row(line, header.bytes_per_line, width, &palette, &mut pixels);
        } else {
            planes::compose_rgb_row(line, header.bytes_per_line, width, &mut pixels);
        }
    }

    let out = DecodedImage::owned(pixels, header.width, header.height, PixelLayout::Rgb8);
    Ok(if nplanes == 4 {
        out.with_palette(palette)
    } else {
        out
    })
}
