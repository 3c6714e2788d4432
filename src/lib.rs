//! # 圆角图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main ── env_logger 初始化 + 以工作目录推导输出布局        │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ generate_all(source, icons_dir, public_dir)
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ storage ──── 输出布局 / 目录创建 / 写文件              │
//! │  │                                                       │
//! │  ├─ generator ── 产物清单 + 顺序编排 + 生成报告            │
//! │  │                                                       │
//! │  └─ icon ─────── 纯函数图像流水线                          │
//! │      ├─ loader     校验 + 解码                            │
//! │      ├─ pipeline   保持宽高比缩放                          │
//! │      ├─ mask       圆角遮罩                                │
//! │      ├─ builder    单尺寸圆角 PNG                          │
//! │      └─ container  多分辨率 favicon.ico                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`icon`] | 解码、缩放、圆角遮罩、PNG/ICO 编码 |
//! | [`generator`] | 默认产物清单与 `generate_all` 编排 |
//! | [`storage`] | 源图片与输出目录路径、目录创建、文件写入 |

pub mod error;
pub mod generator;
pub mod icon;
pub mod storage;

pub use error::AppError;
pub use generator::{GenerationReport, generate_all, generate_all_with_config};
pub use icon::{IconConfig, IconError, RadiusPolicy, build_icon_container, build_rounded_icon};
