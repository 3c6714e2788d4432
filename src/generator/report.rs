//! # 生成结果汇总
//!
//! `GenerationReport` 记录每个已写入产物的路径、类别、尺寸与字节数，
//! 供入口打印汇总，也方便测试断言。

use std::path::{Path, PathBuf};

use super::plan::ArtifactKind;

/// 已写入磁盘的单个产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub sizes: Vec<u32>,
    pub bytes: usize,
}

/// 一次 `generate_all` 的完整结果，顺序与清单一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationReport {
    pub(crate) fn push(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }

    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter().filter(move |a| a.kind == kind)
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts.iter().map(|a| a.bytes).sum()
    }
}
