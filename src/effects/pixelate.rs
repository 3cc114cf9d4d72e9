use crate::{
    buffer::access::{PixelBuffer, PixelSource, check_non_empty, check_same_dims},
    foundation::{
        color::Rgba,
        error::{TexfxError, TexfxResult},
    },
};

/// Block mosaic: each `factor x factor` block takes its top-left source color.
///
/// Blocks start at the origin and step by `factor` while the block origin is below
/// `width - 1 - factor` (resp. height). Trailing pixels past the last block are not
/// written.
pub fn pixelate<S, D>(src: &S, dst: &mut D, factor: u32) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    check_same_dims(src, &*dst, "pixelate")?;
    check_factor(factor)?;
    tracing::debug!(width = src.width(), height = src.height(), factor, "pixelate");

    for (bx, by) in blocks(src.width(), src.height(), factor) {
        let c = src.get_pixel(bx, by);
        fill_block(dst, bx, by, factor, c);
    }
    Ok(())
}

/// In-place form of [`pixelate`]. Blocks never overlap, so each corner is read before
/// its block is painted.
pub fn pixelate_in_place<B: PixelBuffer + ?Sized>(buf: &mut B, factor: u32) -> TexfxResult<()> {
    check_non_empty(&*buf, "pixelate")?;
    check_factor(factor)?;
    tracing::debug!(width = buf.width(), height = buf.height(), factor, "pixelate (in place)");

    for (bx, by) in blocks(buf.width(), buf.height(), factor) {
        let c = buf.get_pixel(bx, by);
        fill_block(buf, bx, by, factor, c);
    }
    Ok(())
}

fn check_factor(factor: u32) -> TexfxResult<()> {
    if factor == 0 {
        return Err(TexfxError::validation("pixelate factor must be >= 1"));
    }
    Ok(())
}

/// Origins of the blocks that get painted.
pub(crate) fn blocks(width: u32, height: u32, factor: u32) -> impl Iterator<Item = (u32, u32)> {
    let step = factor as usize;
    let x_end = width.saturating_sub(1).saturating_sub(factor);
    let y_end = height.saturating_sub(1).saturating_sub(factor);
    (0..x_end)
        .step_by(step)
        .flat_map(move |x| (0..y_end).step_by(step).map(move |y| (x, y)))
}

fn fill_block<B: PixelBuffer + ?Sized>(
    buf: &mut B,
    bx: u32,
    by: u32,
    factor: u32,
    c: Rgba,
) {
    for y in by..by + factor {
        for x in bx..bx + factor {
            buf.set_pixel(x, y, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixelate.rs"]
mod tests;
