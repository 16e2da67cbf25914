//! 連番によるカテゴリ分類
//!
//! カメラの連番が撮影順（＝式次第の順）とおおむね一致することを前提に、
//! 連番の範囲表でカテゴリを決める。内容解析は行わない。

use crate::error::{Error, Result};
use crate::types::PhotoCategory;
use serde::{Deserialize, Serialize};

/// 範囲表の1行（`up_to` 以下で、直前の行より大きい連番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBand {
    pub up_to: u64,
    pub category: PhotoCategory,
}

/// カテゴリ範囲表
///
/// 各行は直前の行の上限+1から始まるので、範囲は常に連続し重ならない。
/// どの行にも入らない連番は `fallback` になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScheme {
    pub bands: Vec<CategoryBand>,
    pub fallback: PhotoCategory,
}

impl Default for CategoryScheme {
    fn default() -> Self {
        Self::wedding_preset()
    }
}

impl CategoryScheme {
    /// 組み込みプリセットを取得
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "wedding" | "default" => Some(Self::wedding_preset()),
            "classic" => Some(Self::classic_preset()),
            _ => None,
        }
    }

    /// プリセット名一覧
    pub fn preset_names() -> &'static [&'static str] {
        &["wedding", "classic"]
    }

    /// JSON文字列から読み込み（検証付き）
    pub fn from_json(json: &str) -> Result<Self> {
        let scheme: Self = serde_json::from_str(json)?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 挙式→ポートレート→披露宴→パーティーの順
    fn wedding_preset() -> Self {
        Self {
            bands: vec![
                CategoryBand { up_to: 150, category: PhotoCategory::Ceremony },
                CategoryBand { up_to: 300, category: PhotoCategory::Portraits },
                CategoryBand { up_to: 450, category: PhotoCategory::Reception },
                CategoryBand { up_to: 700, category: PhotoCategory::Party },
            ],
            fallback: PhotoCategory::Details,
        }
    }

    /// 4カテゴリ版（ポートレート→挙式→披露宴→ディテール）
    ///
    /// 旧版は 0-15 をどのカテゴリにも入れていなかったため、先頭の行に含める。
    fn classic_preset() -> Self {
        Self {
            bands: vec![
                CategoryBand { up_to: 100, category: PhotoCategory::Portraits },
                CategoryBand { up_to: 300, category: PhotoCategory::Ceremony },
                CategoryBand { up_to: 500, category: PhotoCategory::Reception },
            ],
            fallback: PhotoCategory::Details,
        }
    }

    /// 上限が昇順で、分類先が閉じた列挙に含まれることを確認
    pub fn validate(&self) -> Result<()> {
        for pair in self.bands.windows(2) {
            if pair[1].up_to <= pair[0].up_to {
                return Err(Error::Config(format!(
                    "category bands must be strictly ascending: {} then {}",
                    pair[0].up_to, pair[1].up_to
                )));
            }
        }

        let targets = self.bands.iter().map(|b| b.category).chain(Some(self.fallback));
        for category in targets {
            if category == PhotoCategory::Uncategorized {
                return Err(Error::Config(
                    "category bands must map to a known category".into(),
                ));
            }
        }

        Ok(())
    }

    /// 連番からカテゴリを決める
    pub fn classify(&self, sequence: u64) -> PhotoCategory {
        self.bands
            .iter()
            .find(|band| sequence <= band.up_to)
            .map(|band| band.category)
            .unwrap_or(self.fallback)
    }

    /// この範囲表で割り当てられうるカテゴリ（重複なし、列挙順）
    pub fn categories(&self) -> Vec<PhotoCategory> {
        let mut categories: Vec<PhotoCategory> = self
            .bands
            .iter()
            .map(|b| b.category)
            .chain(Some(self.fallback))
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
