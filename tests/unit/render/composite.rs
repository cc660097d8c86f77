use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    let dst = [10, 20, 30, 255];
    let src = [200, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_transparent_src_is_noop() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_half_alpha_blends() {
    let dst = [0, 0, 255, 255];
    let src = [128, 0, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], 127);
}

#[test]
fn over_at_clips_to_destination() {
    let mut dst = vec![0u8; 2 * 2 * 4];
    let src = vec![255u8; 3 * 3 * 4];
    over_at(&mut dst, (2, 2), &src, (3, 3), (1, -1));

    let alpha = |x: usize, y: usize| dst[(y * 2 + x) * 4 + 3];
    assert_eq!(alpha(0, 0), 0);
    assert_eq!(alpha(1, 0), 255);
    assert_eq!(alpha(0, 1), 0);
    assert_eq!(alpha(1, 1), 255);
}

#[test]
fn over_at_entirely_outside_is_noop() {
    let mut dst = vec![0u8; 4 * 4];
    let src = vec![255u8; 4 * 4];
    over_at(&mut dst, (2, 2), &src, (2, 2), (5, 5));
    assert!(dst.iter().all(|&b| b == 0));
}
