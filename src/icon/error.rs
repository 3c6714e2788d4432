//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标流水线（加载 → 缩放 → 遮罩 → 编码）中的所有错误来源，
//! 避免字符串拼接式错误处理。通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图标处理统一错误类型。
///
/// 该类型会在编排层被上转为 `AppError`，最终由入口打印给用户。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源图片无法识别、格式不受支持或数据损坏
    #[error("解码错误：{0}")]
    Decode(String),

    #[error("尺寸无效：{0}")]
    InvalidSize(String),

    #[error("圆角比例无效：{0}（取值范围 (0, 100]）")]
    InvalidRadius(f64),

    #[error("ICO 尺寸列表为空")]
    EmptySizeList,

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
