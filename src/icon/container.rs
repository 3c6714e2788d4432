//! # 多分辨率 ICO 容器模块
//!
//! 对尺寸列表中的每个尺寸生成一帧圆角图标（15%，最小 2px），按顺序打包为单个 ICO。
//! 目录项声明的宽高始终与帧位图的真实尺寸一致。

use image::DynamicImage;
use std::io::Cursor;

use super::builder::build_rounded_icon;
use super::{IconConfig, IconError, RadiusPolicy};

/// ICO 目录项能表达的最大边长。
pub const ICO_MAX_DIMENSION: u32 = 256;

/// 生成多分辨率 ICO 字节。
pub fn build_icon_container(
    source: &DynamicImage,
    sizes: &[u32],
    config: &IconConfig,
) -> Result<Vec<u8>, IconError> {
    if sizes.is_empty() {
        return Err(IconError::EmptySizeList);
    }

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for &size in sizes {
        if size > ICO_MAX_DIMENSION {
            return Err(IconError::InvalidSize(format!(
                "ICO 帧尺寸 {} 超过上限 {}",
                size, ICO_MAX_DIMENSION
            )));
        }

        let frame = build_rounded_icon(source, size, RadiusPolicy::FAVICON_ICO, config)?;
        let (width, height) = frame.dimensions();
        let icon_image = ico::IconImage::from_rgba_data(width, height, frame.into_raw());

        let entry = ico::IconDirEntry::encode(&icon_image)
            .map_err(|e| IconError::Encode(format!("ICO 帧 {}x{} 编码失败：{}", width, height, e)))?;
        icon_dir.add_entry(entry);
    }

    let mut buffer = Vec::new();
    icon_dir
        .write(&mut buffer)
        .map_err(|e| IconError::Encode(format!("ICO 写入失败：{}", e)))?;

    Ok(buffer)
}

/// 读取 ICO 字节，返回每一帧解码后的真实尺寸。
///
/// 目录项声明尺寸与位图尺寸不一致时报错。
pub fn inspect_icon_container(bytes: &[u8]) -> Result<Vec<(u32, u32)>, IconError> {
    let icon_dir = ico::IconDir::read(Cursor::new(bytes))
        .map_err(|e| IconError::Decode(format!("ICO 解析失败：{}", e)))?;

    icon_dir
        .entries()
        .iter()
        .map(|entry| {
            let image = entry
                .decode()
                .map_err(|e| IconError::Decode(format!("ICO 帧解码失败：{}", e)))?;

            let declared = (entry.width(), entry.height());
            let actual = (image.width(), image.height());
            if declared != actual {
                return Err(IconError::Decode(format!(
                    "ICO 帧声明尺寸 {}x{} 与实际 {}x{} 不一致",
                    declared.0, declared.1, actual.0, actual.1
                )));
            }

            Ok(actual)
        })
        .collect()
}
