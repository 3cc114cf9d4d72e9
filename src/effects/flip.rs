use crate::{
    buffer::access::{PixelBuffer, PixelSource, check_same_dims},
    foundation::error::TexfxResult,
};

/// Mirror `src` across its vertical centre line into `dst`.
pub fn flip_horizontal<S, D>(src: &S, dst: &mut D) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    check_same_dims(src, &*dst, "flip_horizontal")?;
    let (w, h) = (src.width(), src.height());
    tracing::debug!(width = w, height = h, "flip_horizontal");

    let last_x = w - 1;
    for y in 0..h {
        for x in 0..w {
            dst.set_pixel(last_x - x, y, src.get_pixel(x, y));
        }
    }
    Ok(())
}

/// Mirror `src` across its horizontal centre line into `dst`.
pub fn flip_vertical<S, D>(src: &S, dst: &mut D) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    check_same_dims(src, &*dst, "flip_vertical")?;
    let (w, h) = (src.width(), src.height());
    tracing::debug!(width = w, height = h, "flip_vertical");

    let last_y = h - 1;
    for y in 0..h {
        for x in 0..w {
            dst.set_pixel(x, last_y - y, src.get_pixel(x, y));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/flip.rs"]
mod tests;
