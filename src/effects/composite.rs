use rayon::prelude::*;

use crate::foundation::core::{PixelBuffer, Rgba8};
use crate::foundation::math::mul_div255;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Convert a straight-alpha color to premultiplied form.
pub fn premultiply(c: Rgba8) -> PremulRgba8 {
    let a = u16::from(c.a);
    [
        mul_div255(u16::from(c.r), a),
        mul_div255(u16::from(c.g), a),
        mul_div255(u16::from(c.b), a),
        c.a,
    ]
}

/// Convert a premultiplied pixel back to straight alpha.
pub fn unpremultiply(p: PremulRgba8) -> Rgba8 {
    let a = u32::from(p[3]);
    if a == 0 {
        return Rgba8::TRANSPARENT;
    }
    let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
    Rgba8::new(un(p[0]), un(p[1]), un(p[2]), p[3])
}

/// Blend a premultiplied `src_w x src_h` RGBA8 surface over `target` with its top-left corner at
/// `(dst_x, dst_y)`. Pixels falling outside `target` are clipped.
pub(crate) fn blend_premul_region(
    target: &mut PixelBuffer,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_x: i32,
    dst_y: i32,
) {
    let stride = (src_w as usize) * 4;
    if stride == 0 {
        return;
    }
    for (sy, row) in src.chunks_exact(stride).take(src_h as usize).enumerate() {
        let ty = dst_y + sy as i32;
        for (sx, px) in row.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let tx = dst_x + sx as i32;
            let Some(under) = target.get(tx, ty) else {
                continue;
            };
            let blended = over(premultiply(under), [px[0], px[1], px[2], px[3]]);
            target.put(tx, ty, unpremultiply(blended));
        }
    }
}

/// Copy `original` into `output` wherever `mask` has non-zero alpha.
///
/// Operates on the region the three buffers have in common; pixels where the mask is fully
/// transparent keep whatever `output` already holds.
pub fn apply_text_mask(original: &PixelBuffer, output: &mut PixelBuffer, mask: &PixelBuffer) {
    let w = output.width().min(original.width()).min(mask.width()) as usize;
    let h = output.height().min(original.height()).min(mask.height()) as usize;
    let out_stride = (output.width() as usize) * 4;
    if w == 0 || h == 0 {
        return;
    }
    let orig_stride = (original.width() as usize) * 4;
    let mask_stride = (mask.width() as usize) * 4;
    let orig = original.as_bytes();
    let mask_bytes = mask.as_bytes();

    output
        .as_bytes_mut()
        .par_chunks_exact_mut(out_stride)
        .take(h)
        .enumerate()
        .for_each(|(y, out_row)| {
            let orig_row = &orig[y * orig_stride..y * orig_stride + w * 4];
            let mask_row = &mask_bytes[y * mask_stride..y * mask_stride + w * 4];
            for x in 0..w {
                if mask_row[x * 4 + 3] != 0 {
                    out_row[x * 4..x * 4 + 4].copy_from_slice(&orig_row[x * 4..x * 4 + 4]);
                }
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
