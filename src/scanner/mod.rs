mod dimensions;
mod exif;

pub use dimensions::{probe_dimensions, Dimensions};
pub use exif::extract_timestamp;

use crate::error::{GalleryError, Result};
use gallery_common::naming::{has_accepted_extension, sequence_number, sort_by_sequence};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// ファイル名の連番
    pub sequence: u64,
}

impl ImageInfo {
    /// ファイル名がUTF-8か（そうでなければ公開パスを正しく作れない）
    pub fn has_utf8_name(&self) -> bool {
        self.path.file_name().and_then(|name| name.to_str()).is_some()
    }
}

/// フォルダ直下の画像を連番順で列挙
///
/// フォルダ自体が読めない場合はエラー。個別エントリの読み取り失敗は警告のみ。
/// ディレクトリ以外は stat せずに列挙するので、壊れたシンボリックリンクなども
/// ビルダー側で失敗として記録される。
pub fn scan_folder(folder: &Path, extensions: &[String]) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(GalleryError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(GalleryError::Io(e.into())),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if !has_accepted_extension(&file_name, extensions) {
            continue;
        }

        images.push(ImageInfo {
            path: entry.path().to_path_buf(),
            sequence: sequence_number(&file_name),
            file_name,
        });
    }

    sort_by_sequence(&mut images, |img| img.file_name.as_str());

    Ok(images)
}
