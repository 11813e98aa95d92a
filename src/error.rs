use alloc::string::String;

/// Errors from legacy raster decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer is shorter than the format's minimum header.
    #[error("file too small: need at least {needed} bytes, got {actual}")]
    TooSmall { needed: usize, actual: usize },

    /// Required magic bytes are absent and no fallback variant exists.
    #[error("bad {0} signature")]
    BadSignature(&'static str),

    /// Declared dimensions are zero or exceed 4096 and no fallback
    /// dimension table resolves the file.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sniffing exhausted all known and fallback variants.
    #[error("unrecognized format variant: {0}")]
    UnrecognizedVariant(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    /// Failure reported by the external TIFF library.
    #[cfg(feature = "tiff")]
    #[error("TIFF decode failed: {0}")]
    Tiff(String),
}
