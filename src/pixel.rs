/// Pixel memory layout of a decoded image.
///
/// The engine produces exactly two layouts: single-channel grayscale for the
/// monochrome formats, and packed RGB for everything that resolves through a
/// palette (or arrives as color from the TIFF collaborator).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.bytes_per_pixel()
    }
}

/// Typed pixels a [`crate::DecodedImage`] can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel {
    /// The layout this pixel type corresponds to.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::alt::Gray<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Gray8
    }
}
