use crate::error::{GalleryError, Result};
use gallery_common::CategoryScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルを指定する環境変数
pub const CONFIG_ENV: &str = "GALLERY_CONFIG";

/// カレントディレクトリの設定ファイル名
pub const LOCAL_CONFIG_FILE: &str = "gallery.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 写真フォルダ
    pub photos_dir: PathBuf,
    /// 公開URLのプレフィックス
    pub public_path: String,
    /// カタログ出力先
    pub output: PathBuf,
    /// 全写真に付与する撮影場所
    pub location: Option<String>,
    /// 対象とする拡張子（大文字小文字は区別しない）
    pub extensions: Vec<String>,
    /// カテゴリ範囲表のプリセット名
    pub category_preset: String,
    /// カスタム範囲表（指定時はプリセットより優先）
    pub category_scheme: Option<CategoryScheme>,
    pub placeholder: PlaceholderConfig,
    /// 1ファイル1ワーカーで並列処理
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from("public/wedding_photos"),
            public_path: "/wedding_photos".into(),
            output: PathBuf::from("lib/photo-metadata.json"),
            location: Some("Majestic Mirage, Punta Cana".into()),
            extensions: vec!["jpg".into()],
            category_preset: "wedding".into(),
            category_scheme: None,
            placeholder: PlaceholderConfig::default(),
            parallel: true,
        }
    }
}

/// ぼかしプレースホルダーの設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceholderConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
    pub blur_sigma: f32,
    pub jpeg_quality: u8,
    /// 生成に失敗したときの扱い
    pub on_error: PlaceholderPolicy,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 10,
            height: 7,
            blur_sigma: 1.0,
            jpeg_quality: 70,
            on_error: PlaceholderPolicy::Skip,
        }
    }
}

/// プレースホルダー生成失敗時の方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderPolicy {
    /// 写真ごとカタログから除外
    #[default]
    Skip,
    /// blurDataURL なしで写真を残す
    Empty,
}

impl std::str::FromStr for PlaceholderPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(PlaceholderPolicy::Skip),
            "empty" | "keep" => Ok(PlaceholderPolicy::Empty),
            _ => Err(format!("Unknown placeholder policy: {}. Use skip or empty", s)),
        }
    }
}

impl std::fmt::Display for PlaceholderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceholderPolicy::Skip => write!(f, "skip"),
            PlaceholderPolicy::Empty => write!(f, "empty"),
        }
    }
}

impl Config {
    /// 設定を読み込み
    ///
    /// 優先順: $GALLERY_CONFIG → ./gallery.json → ~/.config/wedding-gallery/config.json → 既定値
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// 存在する設定ファイルのパス
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::home_dir()
            .map(|home| home.join(".config").join("wedding-gallery").join("config.json"))
            .filter(|path| path.exists())
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(GalleryError::Config("extensions must not be empty".into()));
        }
        if self.placeholder.width == 0 || self.placeholder.height == 0 {
            return Err(GalleryError::Config("placeholder size must be positive".into()));
        }
        let sigma = self.placeholder.blur_sigma;
        if sigma.is_nan() || sigma <= 0.0 {
            return Err(GalleryError::Config("placeholder blurSigma must be positive".into()));
        }
        if !(1..=100).contains(&self.placeholder.jpeg_quality) {
            return Err(GalleryError::Config("placeholder jpegQuality must be 1-100".into()));
        }
        self.category_scheme()?;
        Ok(())
    }

    /// 使用するカテゴリ範囲表
    pub fn category_scheme(&self) -> Result<CategoryScheme> {
        if let Some(scheme) = &self.category_scheme {
            scheme.validate()?;
            return Ok(scheme.clone());
        }

        CategoryScheme::from_preset(&self.category_preset).ok_or_else(|| {
            GalleryError::Config(format!(
                "unknown category preset: {} (available: {})",
                self.category_preset,
                CategoryScheme::preset_names().join(", ")
            ))
        })
    }
}
