//! # 圆角遮罩模块
//!
//! 生成 `size × size` 的单通道圆角矩形遮罩（内部 255，外部 0），并按遮罩缩放 alpha。
//!
//! 像素只有在被圆角矩形完全覆盖时才算“内部”：对角区中的像素，取其离圆心最远的
//! 那个顶点做距离判断。整数运算，结果上下、左右对称；只要半径 ≥ 1，四个角点必然透明。

use image::{GrayImage, Luma, RgbaImage};

pub const MASK_INSIDE: u8 = 255;
pub const MASK_OUTSIDE: u8 = 0;

/// 构建圆角矩形遮罩。
///
/// `radius` 会被钳制到 `size / 2`，半径为 0 时得到全 255 的遮罩。
pub fn rounded_mask(size: u32, radius: u32) -> GrayImage {
    let radius = radius.min(size / 2);
    let radius_sq = radius as u64 * radius as u64;

    GrayImage::from_fn(size, size, |x, y| {
        let dx = corner_offset(x, size, radius);
        let dy = corner_offset(y, size, radius);

        if dx > 0 && dy > 0 && dx * dx + dy * dy > radius_sq {
            Luma([MASK_OUTSIDE])
        } else {
            Luma([MASK_INSIDE])
        }
    })
}

/// 像素在单一坐标轴上离圆角圆心最远的距离；不在角区时返回 0。
fn corner_offset(pos: u32, size: u32, radius: u32) -> u64 {
    if pos < radius {
        (radius - pos) as u64
    } else if pos >= size - radius {
        (pos + 1 - (size - radius)) as u64
    } else {
        0
    }
}

/// 以遮罩作为 alpha 乘数：`alpha = alpha * mask / 255`，RGB 保持不变。
///
/// 调用方保证两者尺寸一致。
pub fn apply_mask(canvas: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(canvas.dimensions(), mask.dimensions());

    for (pixel, mask_value) in canvas.pixels_mut().zip(mask.pixels()) {
        let alpha = pixel[3] as u32 * mask_value[0] as u32;
        pixel[3] = ((alpha + 127) / 255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::imageops::{flip_horizontal, flip_vertical};
    use image::Rgba;

    #[test]
    fn corners_are_outside_for_any_positive_radius() {
        for (size, radius) in [(16, 1), (16, 2), (192, 38), (7, 3), (2, 1)] {
            let mask = rounded_mask(size, radius);
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(mask.get_pixel(x, y)[0], MASK_OUTSIDE, "size={size} r={radius} ({x},{y})");
            }
        }
    }

    #[test]
    fn edge_midpoints_and_center_are_inside() {
        let mask = rounded_mask(192, 38);
        for (x, y) in [(96, 0), (0, 96), (191, 96), (96, 191), (96, 96)] {
            assert_eq!(mask.get_pixel(x, y)[0], MASK_INSIDE);
        }
        // 角区边界：紧贴圆角的直边起点
        assert_eq!(mask.get_pixel(0, 38)[0], MASK_INSIDE);
        assert_eq!(mask.get_pixel(0, 37)[0], MASK_OUTSIDE);
    }

    #[test]
    fn mask_is_symmetric() {
        let mask = rounded_mask(63, 13);
        assert_eq!(flip_horizontal(&mask), mask);
        assert_eq!(flip_vertical(&mask), mask);
    }

    #[test]
    fn zero_radius_keeps_everything() {
        let mask = rounded_mask(10, 0);
        assert!(mask.pixels().all(|p| p[0] == MASK_INSIDE));
    }

    #[test]
    fn apply_mask_scales_alpha_only() {
        let mut canvas = RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 200]));
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(0, 0, Luma([255]));
        mask.put_pixel(1, 0, Luma([0]));

        apply_mask(&mut canvas, &mask);

        assert_eq!(canvas.get_pixel(0, 0), &Rgba([10, 20, 30, 200]));
        assert_eq!(canvas.get_pixel(1, 0), &Rgba([10, 20, 30, 0]));
    }

    #[test]
    fn apply_mask_rounds_partial_values() {
        let mut canvas = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let mask = GrayImage::from_pixel(1, 1, Luma([128]));

        apply_mask(&mut canvas, &mask);

        assert_eq!(canvas.get_pixel(0, 0)[3], 128);
    }
}
