//! # 圆角图标生成工具 — 命令入口
//!
//! 以当前工作目录为基准读取 `Logo.jpg`，生成到 `public/` 与 `public/icons/`。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use rounded_icons::generate_all;
use rounded_icons::storage::OutputLayout;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            log::error!("❌ 无法获取当前工作目录: {err}");
            return ExitCode::FAILURE;
        }
    };

    let layout = OutputLayout::from_base_dir(&base_dir);

    match generate_all(&layout.source, &layout.icons_dir, &layout.public_dir) {
        Ok(report) => {
            log::info!(
                "🎉 所有图标已生成：{} 个文件，共 {:.1} KB",
                report.len(),
                report.total_bytes() as f64 / 1024.0
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("❌ 图标生成失败: {err}");
            ExitCode::FAILURE
        }
    }
}
