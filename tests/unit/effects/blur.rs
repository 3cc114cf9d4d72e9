use super::*;
use crate::buffer::texture::Texture;

fn ramp(w: u32, h: u32) -> Texture {
    let mut t = Texture::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = (x * 37 + y * 11) as u8;
            t.set_pixel(x, y, Rgba::new(v, v.wrapping_mul(3), 255 - v, 128 + (x as u8)));
        }
    }
    t
}

/// Straight transcription of the window walk, out-of-bounds samples replaced by the centre.
fn naive_blur(src: &Texture, factor: u32) -> Texture {
    let (w, h) = src.dimensions();
    let f = factor as i64;
    let n = ((2 * f + 1) * (2 * f + 1)) as u64;
    let mut out = Texture::new(w, h).unwrap();
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let center = src.get_pixel(x as u32, y as u32);
            let mut acc = [0u64; 4];
            for k in x - f..=x + f {
                for l in y - f..=y + f {
                    let c = if k < 0 || l < 0 || k >= w as i64 || l >= h as i64 {
                        center
                    } else {
                        src.get_pixel(k as u32, l as u32)
                    };
                    for (a, v) in acc.iter_mut().zip(c.to_rgba8()) {
                        *a += u64::from(v);
                    }
                }
            }
            out.set_pixel(
                x as u32,
                y as u32,
                Rgba::new(
                    (acc[0] / n) as u8,
                    (acc[1] / n) as u8,
                    (acc[2] / n) as u8,
                    (acc[3] / n) as u8,
                ),
            );
        }
    }
    out
}

#[test]
fn blur_factor_0_is_identity() {
    let src = ramp(5, 4);
    let mut dst = Texture::new(5, 4).unwrap();
    blur(&src, &mut dst, 0).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let src = Texture::filled(4, 3, Rgba::new(10, 20, 30, 40)).unwrap();
    let mut dst = Texture::new(4, 3).unwrap();
    blur(&src, &mut dst, 3).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn blur_matches_window_walk() {
    let src = ramp(7, 5);
    for factor in 1..=4 {
        let mut dst = Texture::new(7, 5).unwrap();
        blur(&src, &mut dst, factor).unwrap();
        assert_eq!(dst, naive_blur(&src, factor), "factor {factor}");
    }
}

#[test]
fn corner_uses_centre_for_missing_samples() {
    // 2x1: [0 gray, 90 gray], factor 1 => 3x3 window.
    // At x=0: in-bounds samples are (0,0) and (1,0); the other 7 are the centre (0).
    // At x=1: in-bounds are 0 and 90; the other 7 are 90 => (90*8)/9 = 80.
    let src = Texture::from_pixels(
        2,
        1,
        vec![Rgba::new(0, 0, 0, 255), Rgba::new(90, 90, 90, 255)],
    )
    .unwrap();
    let mut dst = Texture::new(2, 1).unwrap();
    blur(&src, &mut dst, 1).unwrap();
    assert_eq!(dst.get_pixel(0, 0), Rgba::new(10, 10, 10, 255));
    assert_eq!(dst.get_pixel(1, 0), Rgba::new(80, 80, 80, 255));
}

#[test]
fn huge_factor_on_tiny_image_stays_cheap() {
    let src = ramp(3, 3);
    let mut dst = Texture::new(3, 3).unwrap();
    blur(&src, &mut dst, 1_000_000).unwrap();
    // Window dominated by the centre pixel: each channel lands on the centre or one below.
    for (s, d) in src.pixels().iter().zip(dst.pixels()) {
        for (sc, dc) in s.to_rgba8().into_iter().zip(d.to_rgba8()) {
            assert!(dc <= sc && sc - dc <= 1, "{s:?} -> {d:?}");
        }
    }
}

#[test]
fn window_area_overflow_is_reported() {
    assert_eq!(window_area(0).unwrap(), 1);
    assert_eq!(window_area(2).unwrap(), 25);
    assert!(window_area(u32::MAX).unwrap_err().is_validation());
}

#[test]
fn factor_whose_channel_sums_overflow_is_rejected() {
    // (2^29 + 1)^2 fits in u64, but 255 times it does not.
    let src = ramp(3, 3);
    let mut dst = Texture::filled(3, 3, Rgba::BLACK).unwrap();
    let err = blur(&src, &mut dst, 1 << 28).unwrap_err();
    assert!(err.is_validation());
    assert!(dst.pixels().iter().all(|&p| p == Rgba::BLACK));
}

#[test]
fn largest_accepted_factor_does_not_overflow() {
    // 255 * (2f+1)^2 <= u64::MAX holds up to f = 2^27 - 1 with room to spare.
    let factor = (1u32 << 27) - 1;
    window_area(factor).unwrap();
    let src = ramp(2, 2);
    let mut dst = Texture::new(2, 2).unwrap();
    blur(&src, &mut dst, factor).unwrap();
}
