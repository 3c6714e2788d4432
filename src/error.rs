//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，覆盖批量生成时的所有失败：源文件缺失、图标流水线错误、
//! 目录创建与文件写入错误。入口打印 `Display` 文本后以非零状态退出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，调用侧直接 `?`。

use std::path::PathBuf;

use crate::icon::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 源图片路径不存在（尚未写入任何文件）
    #[error("源图片不存在: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// 图标处理流水线错误（解码 / 缩放 / 编码）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 输出目录不可用
    #[error("输出目录不可用: {0}")]
    Storage(String),
}
