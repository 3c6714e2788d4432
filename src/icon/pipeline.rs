//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 把“任意源图 → 不超过 `size × size` 的 RGBA 图”集中在这里，
//! 与遮罩、编码完全解耦。
//!
//! ## 实现思路
//!
//! 1. `fit_within` 计算保持宽高比的目标尺寸（只缩小，不放大）
//! 2. 优先使用 `fast_image_resize` 执行卷积缩放
//! 3. 失败时回退 `image::imageops::resize`，滤镜保持一致

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use super::IconError;

/// 计算在 `size × size` 方框内保持宽高比的尺寸。
///
/// 已经放得下的图片保持原尺寸；长边缩放到 `size`，短边四舍五入且至少为 1。
///
/// # 示例
/// ```rust
/// use rounded_icons::icon::fit_within;
///
/// assert_eq!(fit_within(1000, 800, 192), (192, 154));
/// assert_eq!(fit_within(100, 50, 192), (100, 50));
/// ```
pub fn fit_within(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width <= size && height <= size {
        return (width, height);
    }

    if width >= height {
        (size, scale_side(height, size, width))
    } else {
        (scale_side(width, size, height), size)
    }
}

/// `round(side * target / long)`，整数运算避免浮点误差。
fn scale_side(side: u32, target: u32, long: u32) -> u32 {
    let numerator = side as u64 * target as u64 * 2 + long as u64;
    let scaled = numerator / (long as u64 * 2);
    (scaled as u32).max(1)
}

/// 将源图转换为 RGBA 并缩放到方框内。
pub(crate) fn resize_to_fit(
    source: &DynamicImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let rgba = source.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(IconError::Decode("源图片尺寸为 0".to_string()));
    }

    let (target_width, target_height) = fit_within(width, height, size);
    if (target_width, target_height) == (width, height) {
        return Ok(rgba);
    }

    log::debug!(
        "🧩 缩放：{}x{} -> {}x{}（filter={:?}）",
        width,
        height,
        target_width,
        target_height,
        filter
    );

    match resize_with_fast_image_resize(&rgba, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
            Ok(image::imageops::resize(
                &rgba,
                target_width,
                target_height,
                filter,
            ))
        }
    }
}

fn resize_with_fast_image_resize(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
