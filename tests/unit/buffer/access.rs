use super::*;

#[test]
fn rgba_image_get_set_use_packed_colors() {
    let mut img = image::RgbaImage::new(2, 1);
    PixelBuffer::set_pixel(&mut img, 1, 0, Rgba::new(9, 8, 7, 6));
    assert_eq!(PixelSource::get_pixel(&img, 1, 0), Rgba::new(9, 8, 7, 6));
    assert_eq!(img.as_raw()[4..8], [9, 8, 7, 6]);
    assert_eq!((PixelSource::width(&img), PixelSource::height(&img)), (2, 1));
}

#[test]
fn check_same_dims_rejects_mismatch_and_empty() {
    let a = image::RgbaImage::new(3, 2);
    let b = image::RgbaImage::new(2, 3);
    let empty = image::RgbaImage::new(0, 4);

    check_same_dims(&a, &a, "t").unwrap();

    let err = check_same_dims(&a, &b, "t").unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("destination is 2x3 but source is 3x2"));

    let err = check_same_dims(&empty, &empty, "t").unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn references_forward_to_the_underlying_buffer() {
    fn paint<B: PixelBuffer>(mut b: B) {
        b.set_pixel(0, 0, Rgba::WHITE);
    }

    let mut img = image::RgbaImage::new(1, 1);
    paint(&mut img);
    let r = &img;
    assert_eq!(PixelSource::get_pixel(&r, 0, 0), Rgba::WHITE);
}
