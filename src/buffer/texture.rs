use crate::{
    buffer::access::{PixelBuffer, PixelSource},
    foundation::{
        color::Rgba,
        error::{TexfxError, TexfxResult},
    },
};

/// Owned, row-major grid of [`Rgba`] pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Texture {
    /// Transparent texture of the given size. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> TexfxResult<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> TexfxResult<Self> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    /// Build from row-major pixels; `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> TexfxResult<Self> {
        let len = pixel_count(width, height)?;
        if pixels.len() != len {
            return Err(TexfxError::validation(format!(
                "texture expects {len} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from straight RGBA8 bytes (`[r, g, b, a]` per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> TexfxResult<Self> {
        let len = pixel_count(width, height)?;
        let expected = len
            .checked_mul(4)
            .ok_or_else(|| TexfxError::evaluation("texture byte size overflow"))?;
        if bytes.len() != expected {
            return Err(TexfxError::validation(format!(
                "texture expects {expected} rgba8 bytes for {width}x{height}, got {}",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy any pixel source into a new texture.
    pub fn from_source<S: PixelSource + ?Sized>(src: &S) -> TexfxResult<Self> {
        let (w, h) = (src.width(), src.height());
        let len = pixel_count(w, h)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..h {
            for x in 0..w {
                pixels.push(src.get_pixel(x, y));
            }
        }
        Ok(Self {
            width: w,
            height: h,
            pixels,
        })
    }

    pub fn from_image(img: &image::RgbaImage) -> TexfxResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_rgba8(w, h, img.as_raw())
    }

    pub fn to_image(&self) -> TexfxResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8())
            .ok_or_else(|| TexfxError::evaluation("rgba8 buffer does not match texture size"))
    }

    /// Straight RGBA8 bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba8());
        }
        out
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Pixels of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[Rgba]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        self.pixels.get(start..start + w)
    }

    /// Mutable rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, Rgba> {
        self.pixels.chunks_exact_mut(self.width as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for Texture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }
}

impl PixelBuffer for Texture {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }
}

fn pixel_count(width: u32, height: u32) -> TexfxResult<usize> {
    if width == 0 || height == 0 {
        return Err(TexfxError::validation(format!(
            "texture dimensions must be > 0, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| TexfxError::evaluation("texture size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/texture.rs"]
mod tests;
