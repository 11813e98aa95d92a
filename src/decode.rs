use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::palette::Palette;
use crate::pixel::PixelLayout;

/// Decoded image output. Pixels may be borrowed (zero-copy) or owned.
///
/// Invariant: `pixels().len() == width * height * layout.bytes_per_pixel()`.
/// Rows are stored top-to-bottom, pixels left-to-right.
#[derive(Clone, Debug)]
pub struct DecodedImage<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    /// The palette indices were resolved through, when the file carried one.
    pub palette: Option<Palette>,
}

impl<'a> DecodedImage<'a> {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodedImage<'static> {
        DecodedImage {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            layout: self.layout,
            palette: self.palette,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
            layout,
            palette: None,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Owned(data),
            width,
            height,
            layout,
            palette: None,
        }
    }

    pub(crate) fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Reinterpret pixel data as a typed pixel slice.
    ///
    /// Returns [`crate::DecodeError::LayoutMismatch`] if the pixel layout
    /// doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], crate::DecodeError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(crate::DecodeError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// No allocation or copy — the returned `ImgRef` borrows directly from
    /// this `DecodedImage`'s pixel buffer.
    ///
    /// Returns [`crate::DecodeError::LayoutMismatch`] if the pixel layout
    /// doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(
        &self,
    ) -> Result<imgref::ImgRef<'_, P>, crate::DecodeError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`crate::DecodeError::LayoutMismatch`] if the pixel layout
    /// doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel + Clone>(&self) -> Result<imgref::ImgVec<P>, crate::DecodeError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}
