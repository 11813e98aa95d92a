//! Bitplane-to-chunky compositing for the planar EGA/VGA formats.
//!
//! One physical scanline holds `nplanes` consecutive 1-bit planes of
//! `bytes_per_line` bytes each; each pixel column takes one bit from every
//! plane. Missing plane bytes read as zero.

use alloc::vec::Vec;

use crate::palette::Palette;

/// Compose four 1-bit planes into palette-resolved RGB pixels, up to
/// `width` columns. The color index is `(p3<<3) | (p2<<2) | (p1<<1) | p0`.
pub(crate) fn compose_ega_row(
    scanline: &[u8],
    bytes_per_line: usize,
    width: usize,
    palette: &Palette,
    out: &mut Vec<u8>,
) {
    for col in 0..width {
        let byte_idx = col / 8;
        let bit = 7 - (col % 8) as u8;
        let mut index = 0u8;
        for plane in 0..4 {
            let byte = scanline
                .get(plane * bytes_per_line + byte_idx)
                .copied()
                .unwrap_or(0);
            index |= ((byte >> bit) & 1) << plane;
        }
        out.extend_from_slice(&palette.color(index));
    }
}

/// Compose three 1-bit planes directly into RGB, one plane per channel,
/// full intensity per set bit.
pub(crate) fn compose_rgb_row(
    scanline: &[u8],
    bytes_per_line: usize,
    width: usize,
    out: &mut Vec<u8>,
) {
    for col in 0..width {
        let byte_idx = col / 8;
        let bit = 7 - (col % 8) as u8;
        for plane in 0..3 {
            let byte = scanline
                .get(plane * bytes_per_line + byte_idx)
                .copied()
                .unwrap_or(0);
            out.push(if (byte >> bit) & 1 == 1 { 255 } else { 0 });
        }
    }
}
