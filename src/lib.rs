//! # retrobitmaps
//!
//! Decoder for five legacy raster image formats: AOL ART, MacPaint MAC,
//! PICtor/PNTG PIC, PC Paintbrush PCX, and (by delegation) TIFF.
//!
//! These formats predate standardization: each has several loosely
//! documented variants told apart only by magic-byte heuristics, and each
//! uses its own bit-packing or run-length scheme. The decoders here target
//! best-effort decoding of the common variants with deterministic,
//! documented fallback behavior when a header is ambiguous or a file is
//! truncated — malformed input degrades image quality, it never panics.
//!
//! ## Supported formats
//!
//! - **ART** — AOL bitmap, `"ART\0"` RLE, PFS First Publisher, and a raw
//!   grayscale fallback at common historical resolutions
//! - **MAC** — MacPaint, PackBits-compressed or raw, plus the PNTG
//!   container sub-variant; always the canonical 576×720 canvas
//! - **PIC** — PICT/PNTG lineage (forced 576×720), standard PICtor with an
//!   optional 6-bit palette, and a 1-bit generic fallback
//! - **PCX** — 1/4/8 bpp chunky and 3/4-plane EGA/VGA planar, header and
//!   trailing VGA palettes
//! - **TIFF** (`tiff` feature) — delegated to the `image` crate and
//!   normalized to the same output shape
//!
//! ## Fallback behavior
//!
//! Unknown ART and PIC variants fall back to guessing among a fixed,
//! ordered list of historical resolutions, failing only when not even a
//! cropped strip fits the data. PCX and MAC have no such fallback and fail
//! on a bad signature or empty input. Invalid header dimensions in the ART
//! AOL and PFS variants are silently replaced by documented defaults.
//!
//! ## Non-goals
//!
//! - Encoding — decode only (re-encode via the `rgb`/`imgref` views)
//! - Perfect fidelity to every historical writer of these formats
//!
//! ## Usage
//!
//! ```no_run
//! use retrobitmaps::decode_pcx;
//!
//! let data: &[u8] = &[]; // your PCX bytes
//! let image = decode_pcx(data)?;
//! println!("{}x{} {:?}", image.width, image.height, image.layout);
//! # Ok::<(), retrobitmaps::DecodeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bits;
mod decode;
mod error;
mod limits;
mod palette;
mod pixel;
mod planes;
mod reader;
mod sniff;

pub mod rle;

pub mod art;
pub mod mac;
pub mod pcx;
pub mod pic;

#[cfg(feature = "tiff")]
mod tiff;

// Re-exports
pub use decode::DecodedImage;
pub use error::DecodeError;
pub use limits::Limits;
pub use palette::Palette;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelLayout;
pub use sniff::Dimensions;

/// Decode an AOL ART buffer.
pub fn decode_art(data: &[u8]) -> Result<DecodedImage<'_>, DecodeError> {
    art::decode(data, None)
}

/// Decode an AOL ART buffer, enforcing the given resource limits.
pub fn decode_art_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
) -> Result<DecodedImage<'a>, DecodeError> {
    art::decode(data, Some(limits))
}

/// Decode a MacPaint buffer.
pub fn decode_mac(data: &[u8]) -> Result<DecodedImage<'_>, DecodeError> {
    mac::decode(data, None)
}

/// Decode a MacPaint buffer, enforcing the given resource limits.
pub fn decode_mac_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
) -> Result<DecodedImage<'a>, DecodeError> {
    mac::decode(data, Some(limits))
}

/// Decode a PICtor/PNTG PIC buffer.
pub fn decode_pic(data: &[u8]) -> Result<DecodedImage<'_>, DecodeError> {
    pic::decode(data, None)
}

/// Decode a PICtor/PNTG PIC buffer, enforcing the given resource limits.
pub fn decode_pic_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
) -> Result<DecodedImage<'a>, DecodeError> {
    pic::decode(data, Some(limits))
}

/// Decode a PC Paintbrush PCX buffer.
pub fn decode_pcx(data: &[u8]) -> Result<DecodedImage<'_>, DecodeError> {
    pcx::decode(data, None)
}

/// Decode a PC Paintbrush PCX buffer, enforcing the given resource limits.
pub fn decode_pcx_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
) -> Result<DecodedImage<'a>, DecodeError> {
    pcx::decode(data, Some(limits))
}

/// Decode a TIFF buffer via the `image` crate, normalized to grayscale or
/// RGB output.
#[cfg(feature = "tiff")]
pub fn decode_tiff(data: &[u8]) -> Result<DecodedImage<'static>, DecodeError> {
    tiff::decode(data, None)
}

/// Decode a TIFF buffer, enforcing the given resource limits.
#[cfg(feature = "tiff")]
pub fn decode_tiff_with_limits(
    data: &[u8],
    limits: &Limits,
) -> Result<DecodedImage<'static>, DecodeError> {
    tiff::decode(data, Some(limits))
}

/// Decode a buffer of unknown provenance, trying PCX, then ART, then MAC,
/// then PIC, and returning the first success.
///
/// The order matters: ART and MAC accept nearly anything via their fallback
/// paths, so the formats with real signatures are tried first.
pub fn decode_auto(data: &[u8]) -> Result<DecodedImage<'_>, DecodeError> {
    pcx::decode(data, None)
        .or_else(|_| art::decode(data, None))
        .or_else(|_| mac::decode(data, None))
        .or_else(|_| pic::decode(data, None))
}
