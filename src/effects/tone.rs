//! Per-pixel color transforms.
//!
//! Each output pixel depends only on the co-located input pixel, so every transform here
//! also has an in-place form.

use crate::{
    buffer::access::{PixelBuffer, PixelSource, check_non_empty, check_same_dims},
    foundation::{color::Rgba, error::TexfxResult},
};

/// Luma-weighted gray (weights 77/150/28 over 255), alpha kept.
pub fn grayscale_px(c: Rgba) -> Rgba {
    let sum = 77 * u32::from(c.r()) + 150 * u32::from(c.g()) + 28 * u32::from(c.b());
    let gray = (sum / 255) as u8;
    Rgba::new(gray, gray, gray, c.a())
}

/// Classic sepia matrix, every channel clamped to 255, alpha kept.
pub fn sepia_px(c: Rgba) -> Rgba {
    let (r, g, b) = (f64::from(c.r()), f64::from(c.g()), f64::from(c.b()));
    let sr = r * 0.393 + g * 0.769 + b * 0.189;
    let sg = r * 0.349 + g * 0.686 + b * 0.168;
    let sb = r * 0.272 + g * 0.534 + b * 0.131;
    Rgba::new(clamp_channel(sr), clamp_channel(sg), clamp_channel(sb), c.a())
}

/// Complement of the RGB channels, alpha kept.
pub fn invert_px(c: Rgba) -> Rgba {
    Rgba(c.0 ^ 0xFFFF_FF00)
}

fn clamp_channel(v: f64) -> u8 {
    // Truncate toward zero, then saturate.
    (v as u32).min(255) as u8
}

pub fn grayscale<S, D>(src: &S, dst: &mut D) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    map_pixels(src, dst, "grayscale", grayscale_px)
}

pub fn grayscale_in_place<B: PixelBuffer + ?Sized>(buf: &mut B) -> TexfxResult<()> {
    map_in_place(buf, "grayscale", grayscale_px)
}

pub fn sepia<S, D>(src: &S, dst: &mut D) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    map_pixels(src, dst, "sepia", sepia_px)
}

pub fn sepia_in_place<B: PixelBuffer + ?Sized>(buf: &mut B) -> TexfxResult<()> {
    map_in_place(buf, "sepia", sepia_px)
}

pub fn invert<S, D>(src: &S, dst: &mut D) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    map_pixels(src, dst, "invert", invert_px)
}

pub fn invert_in_place<B: PixelBuffer + ?Sized>(buf: &mut B) -> TexfxResult<()> {
    map_in_place(buf, "invert", invert_px)
}

fn map_pixels<S, D>(src: &S, dst: &mut D, name: &str, f: fn(Rgba) -> Rgba) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    check_same_dims(src, &*dst, name)?;
    let (w, h) = (src.width(), src.height());
    tracing::debug!(width = w, height = h, effect = name, "tone");

    for y in 0..h {
        for x in 0..w {
            dst.set_pixel(x, y, f(src.get_pixel(x, y)));
        }
    }
    Ok(())
}

fn map_in_place<B: PixelBuffer + ?Sized>(
    buf: &mut B,
    name: &str,
    f: fn(Rgba) -> Rgba,
) -> TexfxResult<()> {
    check_non_empty(&*buf, name)?;
    let (w, h) = (buf.width(), buf.height());
    tracing::debug!(width = w, height = h, effect = name, "tone (in place)");

    for y in 0..h {
        for x in 0..w {
            let c = buf.get_pixel(x, y);
            buf.set_pixel(x, y, f(c));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
