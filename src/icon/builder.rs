//! # 圆角图标构建模块
//!
//! ## 设计思路
//!
//! `build_rounded_icon` 是纯函数：同样的源图 + 尺寸 + 圆角策略总得到同样的位图，
//! 不保留任何调用间状态，便于批量生成与单测。
//!
//! ## 实现思路
//!
//! 1. 校验尺寸与圆角比例
//! 2. 转 RGBA 并缩放到方框内（`pipeline`）
//! 3. 透明画布居中粘贴，偏移 `((size - w) / 2, (size - h) / 2)`
//! 4. 按遮罩缩放 alpha（`mask`）

use image::codecs::png::{FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use super::config::validate_size;
use super::mask::{apply_mask, rounded_mask};
use super::pipeline::resize_to_fit;
use super::{IconConfig, IconError, RadiusPolicy};

/// 生成 `size × size` 的圆角 RGBA 图标。
pub fn build_rounded_icon(
    source: &DynamicImage,
    size: u32,
    radius: RadiusPolicy,
    config: &IconConfig,
) -> Result<RgbaImage, IconError> {
    validate_size(size)?;
    radius.validate()?;

    let resized = resize_to_fit(source, size, config.resize_filter)?;
    let (offset_x, offset_y) = center_offset(size, resized.width(), resized.height());

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    image::imageops::replace(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    let radius_px = radius.radius_for(size);
    let mask = rounded_mask(size, radius_px);
    apply_mask(&mut canvas, &mask);

    log::debug!(
        "🎨 圆角图标：{}x{} 内容 {}x{} 偏移 ({}, {}) 半径 {}px",
        size,
        size,
        resized.width(),
        resized.height(),
        offset_x,
        offset_y,
        radius_px
    );

    Ok(canvas)
}

/// 以百分比指定圆角、使用默认配置的便捷入口。
///
/// # 示例
/// ```rust
/// use image::{DynamicImage, RgbImage};
/// use rounded_icons::icon::build_rounded_icon_with_percent;
///
/// let source = DynamicImage::ImageRgb8(RgbImage::new(1000, 800));
/// let icon = build_rounded_icon_with_percent(&source, 192, 20.0)?;
/// assert_eq!(icon.dimensions(), (192, 192));
/// # Ok::<(), rounded_icons::icon::IconError>(())
/// ```
pub fn build_rounded_icon_with_percent(
    source: &DynamicImage,
    size: u32,
    radius_percent: f64,
) -> Result<RgbaImage, IconError> {
    build_rounded_icon(
        source,
        size,
        RadiusPolicy::percent(radius_percent),
        &IconConfig::default(),
    )
}

/// 缩放后内容在画布中的居中偏移。
pub fn center_offset(size: u32, width: u32, height: u32) -> (u32, u32) {
    (
        size.saturating_sub(width) / 2,
        size.saturating_sub(height) / 2,
    )
}

/// 将 RGBA 图标编码为 PNG 字节。
pub fn encode_png(icon: &RgbaImage, config: &IconConfig) -> Result<Vec<u8>, IconError> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, config.png_compression, PngFilterType::Adaptive);

    encoder
        .write_image(
            icon.as_raw(),
            icon.width(),
            icon.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid_source(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([200, 40, 90])))
    }

    #[test]
    fn landscape_source_matches_reference_example() {
        let icon = build_rounded_icon_with_percent(&solid_source(1000, 800), 192, 20.0)
            .expect("build failed");

        assert_eq!(icon.dimensions(), (192, 192));
        assert_eq!(RadiusPolicy::percent(20.0).radius_for(192), 38);
        assert_eq!(center_offset(192, 192, 154), (0, 19));

        // 内容区为 y ∈ [19, 173)，上下留白透明
        assert_eq!(icon.get_pixel(96, 18)[3], 0);
        assert!(icon.get_pixel(96, 19)[3] >= 254);
        assert!(icon.get_pixel(96, 172)[3] >= 254);
        assert_eq!(icon.get_pixel(96, 173)[3], 0);
    }

    #[test]
    fn corners_are_transparent() {
        let icon = build_rounded_icon_with_percent(&solid_source(64, 64), 64, 15.0)
            .expect("build failed");

        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(icon.get_pixel(x, y)[3], 0);
        }
        assert_eq!(icon.get_pixel(32, 32), &Rgba([200, 40, 90, 255]));
    }

    #[test]
    fn small_source_is_centered_without_upscaling() {
        let icon = build_rounded_icon_with_percent(&solid_source(10, 4), 32, 15.0)
            .expect("build failed");

        assert_eq!(icon.dimensions(), (32, 32));
        // 偏移 (11, 14)，内容 10x4
        assert_eq!(icon.get_pixel(11, 14)[3], 255);
        assert_eq!(icon.get_pixel(20, 17)[3], 255);
        assert_eq!(icon.get_pixel(10, 14)[3], 0);
        assert_eq!(icon.get_pixel(21, 17)[3], 0);
        assert_eq!(icon.get_pixel(11, 18)[3], 0);
    }

    #[test]
    fn rejects_zero_size() {
        let result = build_rounded_icon_with_percent(&solid_source(8, 8), 0, 20.0);
        assert!(matches!(result, Err(IconError::InvalidSize(_))));
    }

    #[test]
    fn rejects_invalid_radius_percent() {
        for percent in [0.0, -1.0, 101.0] {
            let result = build_rounded_icon_with_percent(&solid_source(8, 8), 8, percent);
            assert!(matches!(result, Err(IconError::InvalidRadius(_))));
        }
    }

    #[test]
    fn preserves_source_transparency() {
        let source = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(16, 16, Rgba([1, 2, 3, 100])));
        let icon = build_rounded_icon_with_percent(&source, 16, 15.0).expect("build failed");

        assert_eq!(icon.get_pixel(8, 8), &Rgba([1, 2, 3, 100]));
    }

    #[test]
    fn png_encoding_round_trips_pixels() {
        let icon = build_rounded_icon_with_percent(&solid_source(48, 48), 48, 15.0)
            .expect("build failed");
        let png = encode_png(&icon, &IconConfig::default()).expect("encode failed");

        let decoded = image::load_from_memory(&png).expect("decode failed").to_rgba8();
        assert_eq!(decoded, icon);
    }
}
