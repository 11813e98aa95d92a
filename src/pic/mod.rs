//! PICtor/PNTG PIC decoder.
//!
//! `.PIC` covers several unrelated lineages. The PICT/PNTG lineage is a
//! MacPaint relative whose header dimensions are known to be unreliable, so
//! the canonical 576×720 canvas is forced. Standard PICtor has a proper
//! 17-byte header and an optional 6-bit palette. Everything else goes
//! through a generic 1-bit fallback.

mod decode;

use crate::decode::DecodedImage;
use crate::error::DecodeError;
use crate::limits::Limits;
use crate::sniff::find_tag;

/// PIC format variant, selected once by [`sniff`] and fixed for the decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PicVariant {
    /// PICT/PNTG lineage: forced 576×720, PackBits body.
    PntgPict,
    /// Standard PICtor: 17-byte header, optional palette, marker-byte runs.
    PictorStandard,
    /// Unknown lineage: 1-bit data after an assumed 256-byte header.
    Generic,
}

/// Minimum bytes for any PIC header.
const MIN_LEN: usize = 17;

/// Classify a PIC buffer.
///
/// A generic fallback always applies, so the only failure is a buffer below
/// the 17-byte minimum.
pub fn sniff(data: &[u8]) -> Result<PicVariant, DecodeError> {
    if data.len() < MIN_LEN {
        return Err(DecodeError::TooSmall {
            needed: MIN_LEN,
            actual: data.len(),
        });
    }
    if find_tag(data, b"PNTG", 100) || find_tag(data, b"PICT", 100) {
        return Ok(PicVariant::PntgPict);
    }
    if data[0] == 0x34 && data[1] == 0x12 {
        return Ok(PicVariant::PictorStandard);
    }
    Ok(PicVariant::Generic)
}

/// Decode a PIC buffer.
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodedImage<'a>, DecodeError> {
    match sniff(data)? {
        PicVariant::PntgPict => decode::pntg_pict(data, limits),
        PicVariant::PictorStandard => decode::pictor(data, limits),
        PicVariant::Generic => decode::generic(data, limits),
    }
}
