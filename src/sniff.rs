//! Shared sniffing policy: dimension bounds, leading-window tag search, and
//! the historical resolution tables used by the ART and PIC generic
//! fallbacks.

/// Hard upper bound on either dimension for every legacy format.
pub(crate) const MAX_DIMENSION: u32 = 4096;

/// Whether both dimensions are in the accepted `[1, 4096]` range.
pub(crate) fn dims_in_range(width: u32, height: u32) -> bool {
    (1..=MAX_DIMENSION).contains(&width) && (1..=MAX_DIMENSION).contains(&height)
}

/// Output dimensions and how they were chosen.
///
/// Header-driven dimensions that fail validation are silently replaced by a
/// variant's documented default; `fallback` records that the substitution
/// happened so the policy stays visible and testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    /// True when the header fields were invalid and the variant's default
    /// was substituted.
    pub fallback: bool,
}

impl Dimensions {
    /// Accept `(width, height)` if in range, else fall back to the given
    /// default.
    pub(crate) fn checked_or(width: u32, height: u32, default: (u32, u32)) -> Self {
        if dims_in_range(width, height) {
            Self {
                width,
                height,
                fallback: false,
            }
        } else {
            Self {
                width: default.0,
                height: default.1,
                fallback: true,
            }
        }
    }

    pub(crate) fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Resolutions the ART generic fallback tries, in priority order.
///
/// The ordering is inherited behavior: when several candidates satisfy the
/// byte-count check, the first in list order wins.
pub(crate) const ART_FALLBACK_RESOLUTIONS: [(u32, u32); 7] = [
    (320, 200),
    (640, 480),
    (640, 350),
    (320, 240),
    (512, 384),
    (640, 400),
    (800, 600),
];

/// Resolutions the PIC generic fallback tries, in priority order.
pub(crate) const PIC_FALLBACK_RESOLUTIONS: [(u32, u32); 5] = [
    (640, 480),
    (320, 200),
    (640, 400),
    (800, 600),
    (512, 384),
];

/// Whether `tag` occurs anywhere within the first `window` bytes.
pub(crate) fn find_tag(data: &[u8], tag: &[u8], window: usize) -> bool {
    let head = &data[..data.len().min(window)];
    head.windows(tag.len()).any(|w| w == tag)
}
