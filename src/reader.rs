//! カタログの読み込み
//!
//! 通常は生成済みのカタログJSONを読む。カタログがない場合は
//! 写真フォルダから最小限のメタデータ（サイズのみ、寸法は既定値、
//! プレースホルダー・カテゴリなし）を組み立てる。

use crate::config::Config;
use crate::error::Result;
use crate::scanner;
use gallery_common::naming::{public_src, IdAllocator};
use gallery_common::{Catalog, Photo};
use std::path::Path;

/// カタログの読み込み元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// 生成済みカタログ
    File,
    /// 写真フォルダから直接
    Directory,
}

/// 写真フォルダから最小限のカタログを作成
pub fn minimal_catalog(folder: &Path, public_path: &str, extensions: &[String]) -> Result<Catalog> {
    let images = scanner::scan_folder(folder, extensions)?;
    let mut allocator = IdAllocator::new();
    let mut photos = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        let id = allocator.allocate(&image.file_name, index);
        if !image.has_utf8_name() {
            tracing::warn!(file = %image.file_name, "skipping photo with non UTF-8 file name");
            continue;
        }
        let file_size = match std::fs::metadata(&image.path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                tracing::warn!(file = %image.file_name, error = %e, "skipping photo");
                continue;
            }
        };

        let mut photo = Photo::new(id, image.file_name.clone(), public_src(public_path, &image.file_name));
        photo.file_size = file_size;
        photos.push(photo);
    }

    Ok(Catalog::from_photos(photos)?)
}

/// カタログを読み込む（なければ写真フォルダから作成）
pub fn load_catalog(catalog_path: &Path, config: &Config) -> Result<(Catalog, CatalogSource)> {
    if catalog_path.exists() {
        let catalog = Catalog::load(catalog_path)?;
        return Ok((catalog, CatalogSource::File));
    }

    tracing::warn!(
        catalog = %catalog_path.display(),
        folder = %config.photos_dir.display(),
        "catalog not found, deriving minimal metadata from the photo folder"
    );
    let catalog = minimal_catalog(&config.photos_dir, &config.public_path, &config.extensions)?;
    Ok((catalog, CatalogSource::Directory))
}
