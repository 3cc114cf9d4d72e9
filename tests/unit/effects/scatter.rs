use rand::SeedableRng;

use super::*;
use crate::{buffer::texture::Texture, foundation::color::Rgba};

fn numbered(w: u32, h: u32) -> Texture {
    let pixels = (0..w * h).map(Rgba).collect();
    Texture::from_pixels(w, h, pixels).unwrap()
}

fn sorted(t: &Texture) -> Vec<Rgba> {
    let mut v = t.pixels().to_vec();
    v.sort();
    v
}

#[test]
fn in_place_swaps_follow_scan_order() {
    // 3x1 buffer [0, 1, 2], offsets (dx, dy) per pixel:
    //   (0,0): (+1, 0) -> swap 0<->1   => [1, 0, 2]
    //   (1,0): (+1, 0) -> swap 1<->2   => [1, 2, 0]
    //   (2,0): (+1, 0) -> out of bounds, skipped
    let mut buf = numbered(3, 1);
    let mut rng = OffsetSequence::new(vec![1, 0]).unwrap();
    scatter_in_place(&mut buf, 1, &mut rng).unwrap();
    assert_eq!(buf.pixels(), &[Rgba(1), Rgba(2), Rgba(0)]);
}

#[test]
fn two_buffer_form_reads_only_from_source() {
    // Same offsets as above, but every read comes from the untouched source.
    //   (0,0): dst[0]=src[1]=1, dst[1]=src[0]=0
    //   (1,0): dst[1]=src[2]=2, dst[2]=src[1]=1
    let src = numbered(3, 1);
    let mut dst = Texture::filled(3, 1, Rgba::WHITE).unwrap();
    let mut rng = OffsetSequence::new(vec![1, 0]).unwrap();
    scatter(&src, &mut dst, 1, &mut rng).unwrap();
    assert_eq!(dst.pixels(), &[Rgba(1), Rgba(2), Rgba(1)]);
}

#[test]
fn negative_partners_are_skipped() {
    let mut buf = numbered(2, 2);
    let before = buf.clone();
    let mut rng = OffsetSequence::new(vec![-5]).unwrap();
    scatter_in_place(&mut buf, 5, &mut rng).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn sequence_values_are_clamped_to_factor() {
    let mut rng = OffsetSequence::new(vec![9, -9, 1]).unwrap();
    assert_eq!(rng.next_offset(2), 2);
    assert_eq!(rng.next_offset(2), -2);
    assert_eq!(rng.next_offset(2), 1);
    assert_eq!(rng.next_offset(0), 0);
    assert!(OffsetSequence::new(Vec::new()).is_err());
}

#[test]
fn factor_zero_changes_nothing() {
    let mut buf = numbered(4, 3);
    let before = buf.clone();
    let mut rng = RngOffsets(rand::rngs::StdRng::seed_from_u64(7));
    scatter_in_place(&mut buf, 0, &mut rng).unwrap();
    assert_eq!(buf, before);
}

#[test]
fn in_place_preserves_color_multiset() {
    let mut buf = numbered(9, 7);
    let before = sorted(&buf);
    let mut rng = RngOffsets(rand::rngs::StdRng::seed_from_u64(0xC0FFEE));
    scatter_in_place(&mut buf, 3, &mut rng).unwrap();
    assert_eq!(sorted(&buf), before);
    assert_ne!(buf, numbered(9, 7));
}

#[test]
fn same_seed_same_result() {
    let run = |seed: u64| {
        let mut buf = numbered(8, 8);
        let mut rng = RngOffsets(rand::rngs::StdRng::seed_from_u64(seed));
        scatter_in_place(&mut buf, 2, &mut rng).unwrap();
        buf
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn rng_offsets_stay_in_range() {
    let mut rng = RngOffsets(rand::rngs::StdRng::seed_from_u64(1));
    let mut seen_min = false;
    let mut seen_max = false;
    for _ in 0..2000 {
        let v = rng.next_offset(3);
        assert!((-3..=3).contains(&v));
        seen_min |= v == -3;
        seen_max |= v == 3;
    }
    assert!(seen_min && seen_max);
}
