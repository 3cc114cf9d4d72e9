use crate::{
    buffer::access::{PixelBuffer, PixelSource, check_same_dims},
    foundation::{
        color::Rgba,
        error::{TexfxError, TexfxResult},
    },
};

/// Box blur over a `(2*factor+1)^2` window.
///
/// Window samples that fall outside the buffer count as the centre pixel's own color
/// (not the nearest edge pixel). Channel means are truncated. `factor == 0` copies.
pub fn blur<S, D>(src: &S, dst: &mut D, factor: u32) -> TexfxResult<()>
where
    S: PixelSource + ?Sized,
    D: PixelBuffer + ?Sized,
{
    check_same_dims(src, &*dst, "blur")?;
    let (w, h) = (src.width(), src.height());
    let area = window_area(factor)?;
    tracing::debug!(width = w, height = h, factor, "blur");

    for y in 0..h {
        for x in 0..w {
            dst.set_pixel(x, y, blur_px(src, x, y, factor, area));
        }
    }
    Ok(())
}

/// Number of samples in the blur window.
///
/// Rejects factors whose channel sums (`255 * area`) would not fit in a `u64`.
pub(crate) fn window_area(factor: u32) -> TexfxResult<u64> {
    let too_large =
        || TexfxError::validation(format!("blur factor {factor} is too large for the window sums"));
    let side = u64::from(factor)
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(too_large)?;
    let area = side.checked_mul(side).ok_or_else(too_large)?;
    area.checked_mul(255).ok_or_else(too_large)?;
    Ok(area)
}

pub(crate) fn blur_px<S: PixelSource + ?Sized>(
    src: &S,
    x: u32,
    y: u32,
    factor: u32,
    area: u64,
) -> Rgba {
    let center = src.get_pixel(x, y);

    let x0 = x.saturating_sub(factor);
    let y0 = y.saturating_sub(factor);
    let x1 = x.saturating_add(factor).min(src.width() - 1);
    let y1 = y.saturating_add(factor).min(src.height() - 1);

    let mut acc = [0u64; 4];
    let mut inside = 0u64;
    for sy in y0..=y1 {
        for sx in x0..=x1 {
            accumulate(&mut acc, src.get_pixel(sx, sy), 1);
            inside += 1;
        }
    }
    accumulate(&mut acc, center, area - inside);

    Rgba::new(
        (acc[0] / area) as u8,
        (acc[1] / area) as u8,
        (acc[2] / area) as u8,
        (acc[3] / area) as u8,
    )
}

fn accumulate(acc: &mut [u64; 4], c: Rgba, times: u64) {
    let px = c.to_rgba8();
    for (a, &v) in acc.iter_mut().zip(px.iter()) {
        *a += u64::from(v) * times;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
