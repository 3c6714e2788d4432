//! # 产物清单
//!
//! 把“生成哪些文件、多大、什么圆角、写到哪个目录”写成数据，
//! 编排层只负责按顺序执行。

use crate::icon::RadiusPolicy;

/// PWA 图标尺寸（写入 `icons/`）
pub const PWA_SIZES: [u32; 5] = [512, 384, 256, 192, 180];
/// PNG favicon 尺寸（写入 `public/`）
pub const FAVICON_SIZES: [u32; 4] = [16, 32, 48, 64];
/// favicon.ico 内嵌的帧尺寸
pub const FAVICON_ICO_SIZES: [u32; 5] = [16, 24, 32, 48, 64];
/// Apple touch icon 尺寸
pub const APPLE_TOUCH_ICON_SIZE: u32 = 180;

/// 产物类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    PwaIcon,
    FaviconPng,
    FaviconIco,
    AppleTouchIcon,
}

impl ArtifactKind {
    /// 日志中的分组标题
    pub fn label(self) -> &'static str {
        match self {
            Self::PwaIcon => "📱 PWA 图标",
            Self::FaviconPng => "🔖 PNG favicon",
            Self::FaviconIco => "📦 多分辨率 favicon.ico",
            Self::AppleTouchIcon => "🍎 apple-touch-icon",
        }
    }
}

/// 产物写入的目标目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDir {
    Icons,
    Public,
}

/// 单个待生成产物
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub dir: OutputDir,
    /// PNG 只有一个尺寸；ICO 为帧尺寸列表
    pub sizes: Vec<u32>,
    pub radius: RadiusPolicy,
}

impl Artifact {
    fn png(kind: ArtifactKind, file_name: String, dir: OutputDir, size: u32, radius: RadiusPolicy) -> Self {
        Self {
            kind,
            file_name,
            dir,
            sizes: vec![size],
            radius,
        }
    }
}

/// 按顺序执行的产物清单
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPlan {
    pub artifacts: Vec<Artifact>,
}

impl ArtifactPlan {
    /// 默认清单：5 个 PWA 图标、4 个 PNG favicon、favicon.ico、apple-touch-icon。
    pub fn default_plan() -> Self {
        let mut artifacts = Vec::with_capacity(PWA_SIZES.len() + FAVICON_SIZES.len() + 2);

        artifacts.extend(PWA_SIZES.iter().map(|&size| {
            Artifact::png(
                ArtifactKind::PwaIcon,
                format!("icon-{size}.png"),
                OutputDir::Icons,
                size,
                RadiusPolicy::PWA,
            )
        }));

        artifacts.extend(FAVICON_SIZES.iter().map(|&size| {
            Artifact::png(
                ArtifactKind::FaviconPng,
                format!("favicon-{size}.png"),
                OutputDir::Public,
                size,
                RadiusPolicy::FAVICON,
            )
        }));

        artifacts.push(Artifact {
            kind: ArtifactKind::FaviconIco,
            file_name: "favicon.ico".to_string(),
            dir: OutputDir::Public,
            sizes: FAVICON_ICO_SIZES.to_vec(),
            radius: RadiusPolicy::FAVICON_ICO,
        });

        artifacts.push(Artifact::png(
            ArtifactKind::AppleTouchIcon,
            "apple-touch-icon.png".to_string(),
            OutputDir::Public,
            APPLE_TOUCH_ICON_SIZE,
            RadiusPolicy::PWA,
        ));

        Self { artifacts }
    }
}

impl Default for ArtifactPlan {
    fn default() -> Self {
        Self::default_plan()
    }
}
