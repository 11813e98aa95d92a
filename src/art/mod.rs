//! AOL ART decoder (bitmap, AOL-compressed, PFS, and generic variants).
//!
//! ART predates any standard and carries no reliable magic; variants are
//! told apart by leading-byte heuristics. A generic raw-grayscale fallback
//! always applies, so anything 16 bytes or longer decodes to something.

mod decode;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;
use crate::reader;
use crate::sniff::{Dimensions, dims_in_range};

/// ART format variant, selected once by [`sniff`] and fixed for the decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtVariant {
    /// Uncompressed 1-bit bitmap with word-aligned scanlines.
    Bitmap { width: u32, height: u32 },
    /// `"ART\0"`-tagged, count-prefixed RLE grayscale body.
    Aol { dims: Dimensions },
    /// PFS First Publisher: raw 1-bit body after a 10-byte header.
    Pfs { dims: Dimensions },
    /// No recognizable header; raw grayscale at a guessed resolution.
    Generic,
}

/// Minimum bytes for any ART header.
const MIN_LEN: usize = 16;

/// Classify an ART buffer.
///
/// The cascade is ordered: the zero-prefixed bitmap check first (with the
/// original encoder's 100-byte truncation tolerance on the body), then the
/// `"ART\0"` and PFS signatures, then the generic fallback. A fallback
/// always applies, so the only failure is a buffer below the 16-byte
/// minimum.
pub fn sniff(data: &[u8]) -> Result<ArtVariant, DecodeError> {
    if data.len() < MIN_LEN {
        return Err(DecodeError::TooSmall {
            needed: MIN_LEN,
            actual: data.len(),
        });
    }

    if data[0..2] == [0x00, 0x00] {
        let width = u32::from(reader::u16_le(data, 2));
        let height = u32::from(reader::u16_le(data, 6));
        if dims_in_range(width, height) {
            let body = (width as usize * height as usize + 7) / 8;
            if data.len() >= (MIN_LEN + body).saturating_sub(100) {
                return Ok(ArtVariant::Bitmap { width, height });
            }
        }
    }
    if data[0..4] == *b"ART\0" {
        let width = u32::from(reader::u16_le(data, 4));
        let height = u32::from(reader::u16_le(data, 6));
        return Ok(ArtVariant::Aol {
            dims: Dimensions::checked_or(width, height, (640, 480)),
        });
    }
    if data[0..2] == [0x01, 0x00] {
        let width = u32::from(reader::u16_le(data, 2));
        let height = u32::from(reader::u16_le(data, 4));
        return Ok(ArtVariant::Pfs {
            dims: Dimensions::checked_or(width, height, (320, 200)),
        });
    }
    Ok(ArtVariant::Generic)
}

/// Decode an ART buffer into a grayscale image.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    match sniff(data)? {
        ArtVariant::Bitmap { width, height } => decode::bitmap(data, width, height, limits),
        ArtVariant::Aol { dims } => decode::aol(data, dims, limits),
        ArtVariant::Pfs { dims } => decode::pfs(data, dims, limits),
        ArtVariant::Generic => decode::generic(data, limits),
    }
}
