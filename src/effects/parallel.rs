//! Row-parallel effect execution over [`Texture`].
//!
//! Every effect except scatter computes each output pixel from the source alone, so rows
//! are filled independently on a rayon pool. Scatter depends on its visiting order and
//! always runs on the calling thread.

use rayon::prelude::*;

use crate::{
    buffer::{access::PixelSource, texture::Texture},
    effects::{
        blur::{blur_px, window_area},
        fx::Effect,
        scatter::{OffsetSource, scatter_in_place},
        tone::{grayscale_px, invert_px, sepia_px},
    },
    foundation::{
        color::Rgba,
        error::{TexfxError, TexfxResult},
    },
};

/// Thread pool sizing for [`apply_effect_par`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParallelOpts {
    /// Worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Apply `effect` to a copy of `src` using a dedicated thread pool.
///
/// Produces the same pixels as the sequential two-buffer functions writing over a copy of
/// `src` (scatter runs in place on that copy).
#[tracing::instrument(skip(src, rng), fields(width = src.width(), height = src.height()))]
pub fn apply_effect_par<R>(
    effect: Effect,
    src: &Texture,
    opts: ParallelOpts,
    rng: &mut R,
) -> TexfxResult<Texture>
where
    R: OffsetSource + ?Sized,
{
    let mut dst = src.clone();
    if let Effect::Scatter { factor } = effect {
        scatter_in_place(&mut dst, factor, rng)?;
        return Ok(dst);
    }

    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| fill_rows(effect, src, &mut dst))?;
    Ok(dst)
}

fn fill_rows(effect: Effect, src: &Texture, dst: &mut Texture) -> TexfxResult<()> {
    let (w, h) = src.dimensions();
    match effect {
        Effect::Grayscale => map_rows(src, dst, grayscale_px),
        Effect::Sepia => map_rows(src, dst, sepia_px),
        Effect::Invert => map_rows(src, dst, invert_px),
        Effect::FlipHorizontal => par_rows(dst, |x, y, _| src.get_pixel(w - 1 - x, y)),
        Effect::FlipVertical => par_rows(dst, |x, y, _| src.get_pixel(x, h - 1 - y)),
        Effect::Blur { factor } => {
            let area = window_area(factor)?;
            par_rows(dst, |x, y, _| blur_px(src, x, y, factor, area));
        }
        Effect::Pixelate { factor } => {
            if factor == 0 {
                return Err(TexfxError::validation("pixelate factor must be >= 1"));
            }
            let cover_w = covered_extent(w, factor);
            let cover_h = covered_extent(h, factor);
            par_rows(dst, |x, y, prev| {
                if x < cover_w && y < cover_h {
                    src.get_pixel(x - x % factor, y - y % factor)
                } else {
                    prev
                }
            });
        }
        Effect::Scatter { .. } => {
            return Err(TexfxError::evaluation("scatter cannot run row-parallel"));
        }
    }
    Ok(())
}

/// Pixels along one axis painted by pixelate: whole blocks whose origin is below
/// `len - 1 - factor`.
fn covered_extent(len: u32, factor: u32) -> u32 {
    let end = len.saturating_sub(1).saturating_sub(factor);
    end.div_ceil(factor) * factor
}

fn map_rows(src: &Texture, dst: &mut Texture, f: fn(Rgba) -> Rgba) {
    let w = src.dimensions().0 as usize;
    dst.pixels_mut()
        .par_chunks_mut(w)
        .zip(src.pixels().par_chunks(w))
        .for_each(|(out, inp)| {
            for (o, &i) in out.iter_mut().zip(inp) {
                *o = f(i);
            }
        });
}

fn par_rows<F>(dst: &mut Texture, f: F)
where
    F: Fn(u32, u32, Rgba) -> Rgba + Sync,
{
    let w = dst.dimensions().0 as usize;
    dst.pixels_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as u32, y as u32, *px);
            }
        });
}

fn build_thread_pool(threads: Option<usize>) -> TexfxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TexfxError::validation(
            "parallel 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TexfxError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/parallel.rs"]
mod tests;
