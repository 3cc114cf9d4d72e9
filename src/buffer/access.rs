use crate::foundation::{
    color::Rgba,
    error::{TexfxError, TexfxResult},
};

/// Read side of a pixel buffer.
///
/// Effects only ever call [`PixelSource::get_pixel`] with `x < width()` and `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get_pixel(&self, x: u32, y: u32) -> Rgba;
}

/// Write side of a pixel buffer.
pub trait PixelBuffer: PixelSource {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        (**self).get_pixel(x, y)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &mut T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        (**self).get_pixel(x, y)
    }
}

impl<T: PixelBuffer + ?Sized> PixelBuffer for &mut T {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        (**self).set_pixel(x, y, color)
    }
}

impl PixelSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from(*image::ImageBuffer::get_pixel(self, x, y))
    }
}

impl PixelBuffer for image::RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.put_pixel(x, y, color.into());
    }
}

/// Reject zero-sized buffers.
pub fn check_non_empty<S: PixelSource + ?Sized>(src: &S, what: &str) -> TexfxResult<()> {
    if src.width() == 0 || src.height() == 0 {
        return Err(TexfxError::validation(format!(
            "{what}: buffer must be non-empty, got {}x{}",
            src.width(),
            src.height()
        )));
    }
    Ok(())
}

/// Reject an empty source or a destination whose dimensions differ from it.
pub fn check_same_dims<S, D>(src: &S, dst: &D, what: &str) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelSource + ?Sized,
{
    check_non_empty(src, what)?;
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(TexfxError::validation(format!(
            "{what}: destination is {}x{} but source is {}x{}",
            dst.width(),
            dst.height(),
            src.width(),
            src.height()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/access.rs"]
mod tests;
