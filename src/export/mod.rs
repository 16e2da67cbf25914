//! カタログ出力
//!
//! 一時ファイルに書き出してからリネームするので、途中で中断されても
//! 既存のカタログは壊れない。

use crate::error::{GalleryError, Result};
use gallery_common::Photo;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 出力先と同じディレクトリの一時ファイルパス
fn temp_path_for(output: &Path) -> Result<PathBuf> {
    let file_name = output
        .file_name()
        .ok_or_else(|| GalleryError::Config(format!("出力先が不正です: {}", output.display())))?;

    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(output.with_file_name(temp_name))
}

/// カタログJSONを書き出す（インデント2、順序は保持）
pub fn write_catalog(photos: &[Photo], output: &Path) -> Result<()> {
    write_atomic(photos, output)
}

/// 一時ファイル経由でJSONを書き出す。失敗時は一時ファイルを削除する
fn write_atomic<T: Serialize + ?Sized>(value: &T, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(output)?;
    let result = write_json(value, &temp_path)
        .and_then(|()| std::fs::rename(&temp_path, output).map_err(GalleryError::from));

    if result.is_err() {
        std::fs::remove_file(&temp_path).ok();
    }
    result
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
