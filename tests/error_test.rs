//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use wedding_gallery::config::Config;
use wedding_gallery::error::GalleryError;
use wedding_gallery::{builder, scanner};

fn jpg_only() -> Vec<String> {
    vec!["jpg".to_string()]
}

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), &jpg_only());
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, GalleryError::FolderNotFound(_)));
}

/// 画像のないフォルダをスキャンした場合
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    // テキストファイルのみ作成
    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path(), &jpg_only());
    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// 画像がなくてもカタログ生成は成功する（空のカタログ）
#[test]
fn test_build_empty_folder_succeeds() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = builder::build_catalog(dir.path(), &Config::default()).unwrap();

    assert!(report.photos.is_empty());
    assert_eq!(report.scanned, 0);
    assert!(report.is_complete());
}

/// 不正な設定ではビルダーを作れない
#[test]
fn test_builder_rejects_invalid_config() {
    let config = Config {
        extensions: Vec::new(),
        ..Default::default()
    };
    let result = builder::CatalogBuilder::new(&config);
    assert!(matches!(result, Err(GalleryError::Config(_))));
}

/// GalleryErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        GalleryError::Config("テスト設定エラー".to_string()),
        GalleryError::FolderNotFound("/path/to/folder".to_string()),
        GalleryError::ImageLoad("broken.jpg".to_string()),
        GalleryError::Placeholder("encode failed".to_string()),
        GalleryError::PhotoNotFound("DSC_9999".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = GalleryError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: GalleryError = io_err.into();

    assert!(matches!(err, GalleryError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: GalleryError = json_err.into();

    assert!(matches!(err, GalleryError::JsonParse(_)));
}

/// gallery_common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = gallery_common::Error::Validation("duplicate id: a".to_string());
    let err: GalleryError = common_err.into();

    assert!(matches!(err, GalleryError::Catalog(_)));
    assert!(format!("{}", err).contains("duplicate id: a"));
}
