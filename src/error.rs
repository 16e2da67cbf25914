use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("プレースホルダー生成エラー: {0}")]
    Placeholder(String),

    #[error("写真が見つかりません: {0}")]
    PhotoNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("カタログエラー: {0}")]
    Catalog(#[from] gallery_common::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
