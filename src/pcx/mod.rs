//! PC Paintbrush PCX decoder.
//!
//! PCX is the best-specified of the legacy formats: a 128-byte header with
//! a manufacturer byte, explicit dimensions, plane count, and per-scanline
//! byte budget. Run decoding is scanline-bounded so a malformed run cannot
//! bleed compressed data across row boundaries.

mod decode;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;

/// Decode a PCX buffer.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    decode::decode(data, limits)
}
