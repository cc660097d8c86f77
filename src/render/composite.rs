use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel as raw bytes.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels. Opaque sources replace the destination outright.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Composite `src` (a `src_w × src_h` premultiplied buffer) onto `dst` (`dst_w` wide) with
/// its top-left corner at `(dx, dy)`. Pixels falling outside `dst` are dropped.
pub(crate) fn over_at(
    dst: &mut [u8],
    dst_size: (u32, u32),
    src: &[u8],
    src_size: (u32, u32),
    offset: (i64, i64),
) {
    let (dst_w, dst_h) = (i64::from(dst_size.0), i64::from(dst_size.1));
    let (src_w, src_h) = (i64::from(src_size.0), i64::from(src_size.1));
    let (dx, dy) = offset;

    let x0 = dx.max(0);
    let y0 = dy.max(0);
    let x1 = (dx + src_w).min(dst_w);
    let y1 = (dy + src_h).min(dst_h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for y in y0..y1 {
        let sy = y - dy;
        for x in x0..x1 {
            let sx = x - dx;
            let si = ((sy * src_w + sx) * 4) as usize;
            let di = ((y * dst_w + x) * 4) as usize;
            let s = [src[si], src[si + 1], src[si + 2], src[si + 3]];
            if s[3] == 0 {
                continue;
            }
            let d = [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]];
            dst[di..di + 4].copy_from_slice(&over(d, s));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
