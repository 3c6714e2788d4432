//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证生成行为可观测、可测试。
//! 圆角策略（`RadiusPolicy`）作为高层语义，对应 PWA / favicon / ICO 三种档位。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用配置（Lanczos3 + 最佳 PNG 压缩）。
//! - `RadiusPolicy` 负责“百分比 → 像素半径”的换算与最小值钳制。
//! - `validate_*` 系列函数在流水线入口统一拒绝非法参数。

use image::codecs::png::CompressionType;
use image::imageops::FilterType;

use super::IconError;

/// 图标生成配置。
///
/// 字段覆盖了读取、解码、缩放与编码四个阶段。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 读取源文件时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码前按文件头尺寸估算的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 缩放滤镜策略。
    pub resize_filter: FilterType,
    /// PNG 压缩级别。
    pub png_compression: CompressionType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
        }
    }
}

/// 圆角策略：按图标边长的百分比计算半径，并可指定最小像素值。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusPolicy {
    /// 圆角半径占边长的百分比，取值范围 `(0, 100]`。
    pub percent: f64,
    /// 半径下限（像素），0 表示不钳制。
    pub min_px: u32,
}

impl RadiusPolicy {
    /// PWA 图标与 Apple touch icon：20%。
    pub const PWA: Self = Self::percent(20.0);
    /// PNG favicon：15%，不设下限。
    pub const FAVICON: Self = Self::percent(15.0);
    /// favicon.ico 内的各帧：15%，至少 2 像素。
    pub const FAVICON_ICO: Self = Self {
        percent: 15.0,
        min_px: 2,
    };

    pub const fn percent(percent: f64) -> Self {
        Self { percent, min_px: 0 }
    }

    /// 校验百分比是否位于 `(0, 100]`。
    pub fn validate(&self) -> Result<(), IconError> {
        if !self.percent.is_finite() || self.percent <= 0.0 || self.percent > 100.0 {
            return Err(IconError::InvalidRadius(self.percent));
        }
        Ok(())
    }

    /// 计算指定边长下的实际圆角半径（像素）。
    ///
    /// `round(size * percent / 100)`，再应用下限，最后不超过边长的一半。
    ///
    /// # 示例
    /// ```rust
    /// use rounded_icons::icon::RadiusPolicy;
    ///
    /// assert_eq!(RadiusPolicy::PWA.radius_for(192), 38);
    /// assert_eq!(RadiusPolicy::FAVICON_ICO.radius_for(8), 2);
    /// ```
    pub fn radius_for(&self, size: u32) -> u32 {
        let raw = (size as f64 * self.percent / 100.0).round() as u32;
        raw.max(self.min_px).min(size / 2)
    }
}

/// 校验目标边长。
pub(crate) fn validate_size(size: u32) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize("图标边长必须大于 0".to_string()));
    }
    Ok(())
}
