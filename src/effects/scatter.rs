//! Stochastic pixel displacement.
//!
//! Pixels are visited row by row, left to right. For each one, two offsets are drawn
//! (`dx` then `dy`) from an [`OffsetSource`]; when the partner `(x+dx, y+dy)` lies inside
//! the buffer the pair is exchanged, otherwise the pixel is skipped. Later swaps can move
//! pixels placed by earlier ones, so the visiting order is part of the result.

use rand::Rng;

use crate::{
    buffer::access::{PixelBuffer, PixelSource, check_non_empty, check_same_dims},
    foundation::error::{TexfxError, TexfxResult},
};

/// Supplies the random displacements used by [`scatter`].
pub trait OffsetSource {
    /// Next offset, uniform in `-factor..=factor`.
    fn next_offset(&mut self, factor: u32) -> i64;
}

impl<T: OffsetSource + ?Sized> OffsetSource for &mut T {
    fn next_offset(&mut self, factor: u32) -> i64 {
        (**self).next_offset(factor)
    }
}

/// Adapts any [`rand::Rng`] into an [`OffsetSource`].
#[derive(Clone, Debug)]
pub struct RngOffsets<R>(pub R);

impl<R: Rng> OffsetSource for RngOffsets<R> {
    fn next_offset(&mut self, factor: u32) -> i64 {
        let f = i64::from(factor);
        self.0.random_range(-f..=f)
    }
}

/// Replays a fixed list of offsets, cycling when exhausted.
///
/// Values are clamped into `-factor..=factor` at draw time.
#[derive(Clone, Debug)]
pub struct OffsetSequence {
    offsets: Vec<i64>,
    pos: usize,
}

impl OffsetSequence {
    pub fn new(offsets: Vec<i64>) -> TexfxResult<Self> {
        if offsets.is_empty() {
            return Err(TexfxError::validation(
                "offset sequence must contain at least one value",
            ));
        }
        Ok(Self { offsets, pos: 0 })
    }
}

impl OffsetSource for OffsetSequence {
    fn next_offset(&mut self, factor: u32) -> i64 {
        let f = i64::from(factor);
        let v = self.offsets[self.pos % self.offsets.len()];
        self.pos = self.pos.wrapping_add(1);
        v.clamp(-f, f)
    }
}

/// Scatter `src` into `dst`: for each accepted pair, `dst(x,y) = src(p)` and
/// `dst(p) = src(x,y)`. Pixels never chosen keep their prior destination value.
pub fn scatter<S, D, R>(src: &S, dst: &mut D, factor: u32, rng: &mut R) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
    R: OffsetSource + ?Sized,
{
    check_same_dims(src, &*dst, "scatter")?;
    let (w, h) = (src.width(), src.height());
    tracing::debug!(width = w, height = h, factor, "scatter");

    for y in 0..h {
        for x in 0..w {
            let Some((px, py)) = partner(x, y, w, h, factor, rng) else {
                continue;
            };
            let here = src.get_pixel(x, y);
            let there = src.get_pixel(px, py);
            dst.set_pixel(x, y, there);
            dst.set_pixel(px, py, here);
        }
    }
    Ok(())
}

/// Scatter a buffer onto itself by swapping pixel pairs. Only moves pixels, so the
/// multiset of colors is preserved.
pub fn scatter_in_place<B, R>(buf: &mut B, factor: u32, rng: &mut R) -> TexfxResult<()>
where
    B: PixelBuffer + ?Sized,
    R: OffsetSource + ?Sized,
{
    check_non_empty(&*buf, "scatter")?;
    let (w, h) = (buf.width(), buf.height());
    tracing::debug!(width = w, height = h, factor, "scatter (in place)");

    for y in 0..h {
        for x in 0..w {
            let Some((px, py)) = partner(x, y, w, h, factor, rng) else {
                continue;
            };
            let here = buf.get_pixel(x, y);
            let there = buf.get_pixel(px, py);
            buf.set_pixel(x, y, there);
            buf.set_pixel(px, py, here);
        }
    }
    Ok(())
}

fn partner<R: OffsetSource + ?Sized>(
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    factor: u32,
    rng: &mut R,
) -> Option<(u32, u32)> {
    let dx = rng.next_offset(factor);
    let dy = rng.next_offset(factor);
    let px = i64::from(x) + dx;
    let py = i64::from(y) + dy;
    if px < 0 || py < 0 || px >= i64::from(w) || py >= i64::from(h) {
        return None;
    }
    Some((px as u32, py as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scatter.rs"]
mod tests;
