use gallery_common::Photo;
use serde::Serialize;

/// スキップした写真
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// カタログ生成結果
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// カタログに入る写真（連番順）
    pub photos: Vec<Photo>,
    pub skipped: Vec<SkippedFile>,
    /// スキャンした画像数
    pub scanned: usize,
    /// blurDataURL なしで残した写真数
    pub missing_placeholders: usize,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
