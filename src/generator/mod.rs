//! # 批量生成编排模块
//!
//! ## 设计思路
//!
//! `generate_all` 只负责流程编排，不做任何像素运算：
//! 1. 校验源图片存在（此时尚未创建任何目录或文件）
//! 2. 创建输出目录（幂等）
//! 3. 解码源图一次，供所有产物复用
//! 4. 按清单顺序逐个渲染、编码、写盘
//!
//! ## 实现思路
//!
//! - 任一步骤失败立即返回，已写入的文件保留，不回滚、不重试。
//! - 每个产物输出一行进度日志，并记录 `decode/render/total` 耗时。
//! - 同一源图重复运行得到逐字节一致的输出。

mod plan;
mod report;

use image::DynamicImage;
use std::path::Path;
use std::time::Instant;

use crate::error::AppError;
use crate::icon::{self, IconConfig, IconError};
use crate::storage::{ensure_dir, write_artifact};

pub use plan::{
    APPLE_TOUCH_ICON_SIZE, Artifact, ArtifactKind, ArtifactPlan, FAVICON_ICO_SIZES, FAVICON_SIZES,
    OutputDir, PWA_SIZES,
};
pub use report::{GeneratedArtifact, GenerationReport};

/// 使用默认配置与默认清单生成全部图标。
///
/// # 示例
/// ```rust,ignore
/// use rounded_icons::generator::generate_all;
///
/// let report = generate_all("Logo.jpg".as_ref(), "public/icons".as_ref(), "public".as_ref())?;
/// assert_eq!(report.len(), 11);
/// # Ok::<(), rounded_icons::error::AppError>(())
/// ```
pub fn generate_all(
    source_path: &Path,
    icons_dir: &Path,
    public_dir: &Path,
) -> Result<GenerationReport, AppError> {
    generate_all_with_config(source_path, icons_dir, public_dir, &IconConfig::default())
}

/// 使用指定配置与默认清单生成全部图标。
pub fn generate_all_with_config(
    source_path: &Path,
    icons_dir: &Path,
    public_dir: &Path,
    config: &IconConfig,
) -> Result<GenerationReport, AppError> {
    generate_plan(
        source_path,
        icons_dir,
        public_dir,
        &ArtifactPlan::default_plan(),
        config,
    )
}

/// 按任意清单生成产物。
pub fn generate_plan(
    source_path: &Path,
    icons_dir: &Path,
    public_dir: &Path,
    plan: &ArtifactPlan,
    config: &IconConfig,
) -> Result<GenerationReport, AppError> {
    if !source_path.exists() {
        return Err(AppError::SourceNotFound(source_path.to_path_buf()));
    }

    ensure_dir(icons_dir)?;
    ensure_dir(public_dir)?;

    log::info!("🚀 开始生成圆角图标 - 源图片: {}", source_path.display());
    let total_start = Instant::now();

    let decode_start = Instant::now();
    let source = icon::load_source(source_path, config)?;
    let decode_elapsed = decode_start.elapsed();

    let mut report = GenerationReport::default();
    let mut current_kind = None;
    let render_start = Instant::now();

    for artifact in &plan.artifacts {
        if current_kind != Some(artifact.kind) {
            log::info!("{} ...", artifact.kind.label());
            current_kind = Some(artifact.kind);
        }

        let bytes = render_artifact(&source, artifact, config)?;
        let dir = match artifact.dir {
            OutputDir::Icons => icons_dir,
            OutputDir::Public => public_dir,
        };
        let path = write_artifact(dir, &artifact.file_name, &bytes)?;

        log::info!(
            "✓ 已生成: {} ({}, {} 字节)",
            path.display(),
            describe_sizes(&artifact.sizes),
            bytes.len()
        );

        if artifact.kind == ArtifactKind::FaviconIco {
            let frames = icon::inspect_icon_container(&bytes)?;
            log::info!("  ICO 帧: {}", describe_frames(&frames));
        }

        report.push(GeneratedArtifact {
            kind: artifact.kind,
            path,
            sizes: artifact.sizes.clone(),
            bytes: bytes.len(),
        });
    }

    log::info!(
        "✅ 全部图标生成完成 - 共 {} 个文件 decode={}ms render={}ms total={}ms",
        report.len(),
        decode_elapsed.as_millis(),
        render_start.elapsed().as_millis(),
        total_start.elapsed().as_millis()
    );
    log::info!("📁 PWA 图标: {}", icons_dir.display());
    log::info!("📁 Favicons: {}", public_dir.display());

    Ok(report)
}

/// 渲染单个产物并编码为文件字节。
fn render_artifact(
    source: &DynamicImage,
    artifact: &Artifact,
    config: &IconConfig,
) -> Result<Vec<u8>, IconError> {
    match artifact.kind {
        ArtifactKind::FaviconIco => icon::build_icon_container(source, &artifact.sizes, config),
        ArtifactKind::PwaIcon | ArtifactKind::FaviconPng | ArtifactKind::AppleTouchIcon => {
            let size = match artifact.sizes.as_slice() {
                [size] => *size,
                other => {
                    return Err(IconError::InvalidSize(format!(
                        "PNG 产物 {} 只能有一个尺寸，实际为 {:?}",
                        artifact.file_name, other
                    )));
                }
            };
            let rounded = icon::build_rounded_icon(source, size, artifact.radius, config)?;
            icon::encode_png(&rounded, config)
        }
    }
}

fn describe_frames(frames: &[(u32, u32)]) -> String {
    frames
        .iter()
        .map(|(width, height)| format!("{width}x{height}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|size| format!("{size}x{size}px"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use image::{ImageBuffer, ImageFormat, Rgb};

    use super::*;

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("rounded-icons-generator-test-{nanos}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_source(dir: &Path) -> PathBuf {
        let img = ImageBuffer::from_fn(120, 90, |x, y| Rgb([x as u8, y as u8, 200]));
        let path = dir.join("Logo.png");
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Png)
            .expect("write source");
        path
    }

    #[test]
    fn describe_sizes_formats_each_frame() {
        assert_eq!(describe_sizes(&[16]), "16x16px");
        assert_eq!(describe_sizes(&[16, 24]), "16x16px, 24x24px");
        assert_eq!(describe_frames(&[(16, 16), (24, 24)]), "16x16, 24x24");
    }

    #[test]
    fn ico_plan_reads_frames_back_after_writing() {
        let root = unique_temp_dir();
        let source = write_source(&root);
        let public_dir = root.join("public");

        let plan = ArtifactPlan {
            artifacts: vec![Artifact {
                kind: ArtifactKind::FaviconIco,
                file_name: "favicon.ico".to_string(),
                dir: OutputDir::Public,
                sizes: vec![16, 32],
                radius: icon::RadiusPolicy::FAVICON_ICO,
            }],
        };

        let report = generate_plan(
            &source,
            &public_dir.join("icons"),
            &public_dir,
            &plan,
            &IconConfig::default(),
        )
        .expect("generate failed");

        let bytes = fs::read(&report.artifacts[0].path).expect("read favicon.ico");
        let frames = icon::inspect_icon_container(&bytes).expect("inspect failed");
        assert_eq!(frames, vec![(16, 16), (32, 32)]);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn render_artifact_rejects_png_with_multiple_sizes() {
        let source = DynamicImage::ImageRgb8(ImageBuffer::new(8, 8));
        let artifact = Artifact {
            kind: ArtifactKind::PwaIcon,
            file_name: "icon-x.png".to_string(),
            dir: OutputDir::Icons,
            sizes: vec![16, 32],
            radius: icon::RadiusPolicy::PWA,
        };

        let result = render_artifact(&source, &artifact, &IconConfig::default());
        assert!(matches!(result, Err(IconError::InvalidSize(_))));
    }

    #[test]
    fn custom_plan_writes_only_listed_artifacts() {
        let root = unique_temp_dir();
        let source = write_source(&root);
        let icons_dir = root.join("public").join("icons");
        let public_dir = root.join("public");

        let plan = ArtifactPlan {
            artifacts: vec![Artifact {
                kind: ArtifactKind::FaviconPng,
                file_name: "favicon-24.png".to_string(),
                dir: OutputDir::Public,
                sizes: vec![24],
                radius: icon::RadiusPolicy::FAVICON,
            }],
        };

        let report = generate_plan(&source, &icons_dir, &public_dir, &plan, &IconConfig::default())
            .expect("generate failed");

        assert_eq!(report.len(), 1);
        let written = image::open(public_dir.join("favicon-24.png")).expect("open output");
        assert_eq!((written.width(), written.height()), (24, 24));
        assert!(icons_dir.is_dir());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn corrupt_source_surfaces_icon_error() {
        let root = unique_temp_dir();
        let source = root.join("Logo.jpg");
        fs::write(&source, b"definitely not a jpeg").expect("write corrupt source");

        let result = generate_all(&source, &root.join("icons"), &root);
        assert!(matches!(result, Err(AppError::Icon(IconError::Decode(_)))));

        let _ = fs::remove_dir_all(&root);
    }
}
