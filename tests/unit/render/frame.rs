use super::*;

fn red() -> Rgba8Premul {
    Rgba8Premul::opaque(255, 0, 0)
}

#[test]
fn new_frame_is_transparent() {
    let f = FrameRGBA::new(3, 2);
    assert_eq!(f.data.len(), 3 * 2 * 4);
    assert!(f.data.iter().all(|&b| b == 0));
    assert_eq!(f.pixel(3, 0), None);
}

#[test]
fn for_bounds_clamps_negative_sizes() {
    let f = FrameRGBA::for_bounds(Bounds::from_size(-4, 7));
    assert_eq!(f.size(), (0, 7));
    assert!(f.is_empty());
    assert!(f.data.is_empty());
}

#[test]
fn draw_over_places_source_at_offset() {
    let mut dst = FrameRGBA::new(4, 4);
    let src = FrameRGBA::filled(2, 2, red());
    dst.draw_over(&src, 1, 2);

    assert_eq!(dst.pixel(0, 0), Some(Rgba8Premul::TRANSPARENT));
    assert_eq!(dst.pixel(1, 2), Some(red()));
    assert_eq!(dst.pixel(2, 3), Some(red()));
    assert_eq!(dst.pixel(3, 3), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn retain_pixels_clears_rejected_pixels() {
    let mut f = FrameRGBA::filled(3, 3, red());
    f.retain_pixels(|x, y| x == y);
    assert_eq!(f.pixel(1, 1), Some(red()));
    assert_eq!(f.pixel(0, 1), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn blend_pixel_composites_half_alpha() {
    let mut f = FrameRGBA::filled(1, 1, Rgba8Premul::opaque(0, 0, 255));
    f.blend_pixel(0, 0, Rgba8Premul::from_straight_rgba(255, 0, 0, 128));
    let px = f.pixel(0, 0).unwrap();
    assert_eq!(px.a, 255);
    assert!(px.r > 100 && px.b > 100);
}

#[test]
fn to_rgba_image_unpremultiplies() {
    let mut f = FrameRGBA::new(2, 1);
    f.set_pixel(0, 0, Rgba8Premul::from_straight_rgba(255, 0, 0, 128));
    let img = f.to_rgba_image();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
}
