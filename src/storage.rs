//! 输出目录管理模块
//!
//! # 设计思路
//!
//! 统一管理源图片与两个输出目录（`public/`、`public/icons/`）的路径，
//! 并在目录不存在时自动创建。
//!
//! # 实现思路
//!
//! - 所有路径都从一个基准目录推导，入口以当前工作目录作为基准。
//! - 目录创建使用 `create_dir_all`，重复调用无副作用。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// 源图片文件名
pub const SOURCE_FILE_NAME: &str = "Logo.jpg";
/// favicon / apple-touch-icon 所在目录
pub const PUBLIC_DIR_NAME: &str = "public";
/// PWA 图标所在目录（位于 `public/` 之下）
pub const ICONS_DIR_NAME: &str = "icons";

/// 一次生成所涉及的全部路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub source: PathBuf,
    pub icons_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl OutputLayout {
    /// 以 `base_dir` 为根推导默认布局：
    /// `<base>/Logo.jpg`、`<base>/public/icons/`、`<base>/public/`
    pub fn from_base_dir(base_dir: &Path) -> Self {
        let public_dir = base_dir.join(PUBLIC_DIR_NAME);
        Self {
            source: base_dir.join(SOURCE_FILE_NAME),
            icons_dir: public_dir.join(ICONS_DIR_NAME),
            public_dir,
        }
    }
}

/// 确保目录存在（不存在时创建，已存在时不做任何事）
pub fn ensure_dir(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        AppError::Storage(format!("创建目录 '{}' 失败: {}", path.display(), e))
    })
}

/// 将产物字节写入 `dir/file_name`，已存在时覆盖
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    Ok(path)
}
