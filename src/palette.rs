//! Palette sources and index resolution.
//!
//! Three sources, in the priority order the format decoders apply them: a
//! 256-entry VGA block appended at the end of a PCX file, a 16-entry palette
//! embedded in a format header, and the built-in EGA default table.

use alloc::vec::Vec;

/// The 16-color EGA hardware palette.
const EGA_DEFAULT: [[u8; 3]; 16] = [
    [0, 0, 0],       // black
    [0, 0, 170],     // blue
    [0, 170, 0],     // green
    [0, 170, 170],   // cyan
    [170, 0, 0],     // red
    [170, 0, 170],   // magenta
    [170, 85, 0],    // brown
    [170, 170, 170], // light gray
    [85, 85, 85],    // dark gray
    [85, 85, 255],   // light blue
    [85, 255, 85],   // light green
    [85, 255, 255],  // light cyan
    [255, 85, 85],   // light red
    [255, 85, 255],  // light magenta
    [255, 255, 85],  // yellow
    [255, 255, 255], // white
];

/// Ordered RGB palette of up to 256 entries.
///
/// Index resolution is total: an index beyond the stored entries resolves to
/// black rather than faulting, so malformed indices degrade to dark pixels
/// instead of aborting a decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    /// The built-in 16-color EGA default table.
    pub fn ega() -> Self {
        Self {
            entries: EGA_DEFAULT.to_vec(),
        }
    }

    /// Build from raw 8-bit RGB triples (up to 256 entries; a trailing
    /// partial triple is ignored).
    pub fn from_raw_rgb(bytes: &[u8]) -> Self {
        let entries = bytes
            .chunks_exact(3)
            .take(256)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self { entries }
    }

    /// Build from 6-bit-per-channel RGB triples (the PICtor header palette),
    /// scaling each channel to 8 bits via `v * 255 / 63`.
    pub fn from_6bit_rgb(bytes: &[u8]) -> Self {
        let entries = bytes
            .chunks_exact(3)
            .take(256)
            .map(|c| {
                [
                    scale_6bit(c[0]),
                    scale_6bit(c[1]),
                    scale_6bit(c[2]),
                ]
            })
            .collect();
        Self { entries }
    }

    /// Extract the 256-entry VGA palette block appended at the end of a PCX
    /// file. Present only when the byte immediately preceding the 768-byte
    /// block equals `0x0C`.
    pub fn from_pcx_trailer(data: &[u8]) -> Option<Self> {
        if data.len() < 769 {
            return None;
        }
        let marker = data.len() - 769;
        if data[marker] != 0x0C {
            return None;
        }
        Some(Self::from_raw_rgb(&data[marker + 1..]))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an index to its RGB triple. Out-of-range indices resolve to
    /// black.
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.entries
            .get(usize::from(index))
            .copied()
            .unwrap_or([0, 0, 0])
    }

    /// All entries, in order.
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.entries
    }
}

fn scale_6bit(v: u8) -> u8 {
    // Values above the 6-bit range appear in malformed palettes; saturate.
    (u16::from(v) * 255 / 63).min(255) as u8
}
