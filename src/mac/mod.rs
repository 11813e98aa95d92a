//! MacPaint decoder.
//!
//! MacPaint images are a fixed 576×720 1-bit canvas; the format carries no
//! dimension fields and no magic of its own. A `PNTG` tag near the start
//! selects the container sub-variant; otherwise the 512-byte header is
//! skipped and the body kind is chosen by inspecting its first byte.

mod decode;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;
use crate::sniff::find_tag;

/// Canonical MacPaint dimensions.
pub(crate) const MAC_WIDTH: u32 = 576;
pub(crate) const MAC_HEIGHT: u32 = 720;

/// MAC format variant, selected once by [`sniff`] and fixed for the decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MacVariant {
    /// PNTG container: body at fixed offset 0x280.
    Pntg,
    /// Canonical MacPaint with a PackBits-compressed body.
    Packed,
    /// Canonical MacPaint with an uncompressed 1-bit body.
    Raw,
}

/// Classify a MAC buffer.
///
/// A first post-header byte above 128 can only start a PackBits repeat run,
/// which is how compressed bodies are told from raw bitmaps.
pub fn sniff(data: &[u8]) -> Result<MacVariant, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::TooSmall {
            needed: 1,
            actual: 0,
        });
    }
    if find_tag(data, b"PNTG", 100) {
        return Ok(MacVariant::Pntg);
    }
    if decode::body(data).first().copied().unwrap_or(0) > 128 {
        Ok(MacVariant::Packed)
    } else {
        Ok(MacVariant::Raw)
    }
}

/// Decode a MAC buffer into a 576×720 grayscale image.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    match sniff(data)? {
        MacVariant::Pntg => decode::pntg(data, limits),
        MacVariant::Packed => decode::packed(data, limits),
        MacVariant::Raw => decode::raw(data, limits),
    }
}
