//! # 图标处理模块（icon）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 缩放 → 圆角遮罩 → 编码”按职责拆分为多个子模块，
//! 全部是无状态的纯函数，编排交给上层 `generator`。
//!
//! - `loader`：文件存在性、体积、签名、像素上限校验与解码
//! - `pipeline`：保持宽高比的缩放（fast_image_resize，失败回退 image）
//! - `mask`：圆角矩形遮罩与 alpha 相乘
//! - `builder`：单尺寸圆角图标 + PNG 编码
//! - `container`：多分辨率 ICO 打包与回读
//! - `config/error`：配置、圆角策略与错误
//!
//! ## 调用链
//!
//! ```text
//! loader::load_source
//!    ↓
//! builder::build_rounded_icon ──┬─ pipeline::resize_to_fit
//!    │                          └─ mask::rounded_mask / apply_mask
//!    ├─ builder::encode_png
//!    └─ container::build_icon_container（逐帧调用 build_rounded_icon）
//! ```

mod builder;
mod config;
mod container;
mod error;
mod loader;
mod mask;
mod pipeline;

pub use builder::{build_rounded_icon, build_rounded_icon_with_percent, center_offset, encode_png};
pub use config::{IconConfig, RadiusPolicy};
pub use container::{build_icon_container, inspect_icon_container, ICO_MAX_DIMENSION};
pub use error::IconError;
pub use loader::{decode_source_bytes, load_source};
pub use mask::{apply_mask, rounded_mask, MASK_INSIDE, MASK_OUTSIDE};
pub use pipeline::fit_within;
