//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验，目标是尽快失败，减少不必要的内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! 1. 存在性 + metadata 体积限制
//! 2. 读取字节，按文件签名（magic bytes）确认是图片
//! 3. 仅读取文件头尺寸，按像素上限快速拒绝
//! 4. 完整解码

use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::Cursor;
use std::path::Path;

use super::{IconConfig, IconError};

/// 从本地路径加载并解码源图片。
pub fn load_source(path: &Path, config: &IconConfig) -> Result<DynamicImage, IconError> {
    log::debug!("📁 开始读取源图片 - 路径: {}", path.display());

    if !path.exists() {
        return Err(IconError::FileSystem(format!(
            "文件不存在：{}",
            path.display()
        )));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

    if metadata.len() > config.max_file_size {
        return Err(IconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

    decode_source_bytes(&bytes, config)
}

/// 将内存中的原始字节解码为图片。
pub fn decode_source_bytes(bytes: &[u8], config: &IconConfig) -> Result<DynamicImage, IconError> {
    validate_image_signature(bytes)?;

    let (header_width, header_height) = inspect_dimensions_from_memory(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    log::info!(
        "✅ 源图片解码成功 - 尺寸: {}x{} 色彩: {:?}",
        width,
        height,
        decoded.color()
    );

    Ok(decoded)
}

/// 通过文件签名校验输入是否为图片。
///
/// `infer` 不认识的签名（PNM、QOI、Farbfeld 等）再交给 `image::guess_format` 判断，
/// 两者都无法识别时才拒绝；`infer` 明确识别为非图片类型时直接拒绝。
fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::Decode("图片内容为空".to_string()));
    }

    match infer::get(bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(()),
        Some(kind) => Err(IconError::Decode(format!(
            "文件签名不是图片类型：{}",
            kind.mime_type()
        ))),
        None => image::guess_format(bytes)
            .map(|format| {
                log::debug!("🔍 infer 未识别签名，image 识别为 {:?}", format);
            })
            .map_err(|e| IconError::Decode(format!("无法识别图片类型：{}", e))),
    }
}

/// 仅通过图片头信息读取宽高，用于在完整解码前做像素限制检查。
fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?;

    reader
        .into_dimensions()
        .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
