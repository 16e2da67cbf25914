//! カタログ生成
//!
//! 処理フロー:
//! 1. フォルダをスキャンして連番順に並べる
//! 2. 並び順でIDを割り当てる（以降の失敗の有無に左右されない）
//! 3. 1枚ずつ サイズ → 寸法 → プレースホルダー → カテゴリ → EXIF を処理
//! 4. 失敗した写真は BuildReport.skipped に記録して除外

mod report;

pub use report::{BuildReport, SkippedFile};

use crate::config::{Config, PlaceholderPolicy};
use crate::error::{GalleryError, Result};
use crate::placeholder;
use crate::scanner::{self, ImageInfo};
use gallery_common::naming::{public_src, IdAllocator};
use gallery_common::{CategoryScheme, Photo};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;

pub struct CatalogBuilder<'a> {
    config: &'a Config,
    scheme: CategoryScheme,
    show_progress: bool,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scheme: config.category_scheme()?,
            config,
            show_progress: false,
        })
    }

    /// 進捗バーを表示する
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// フォルダ内の写真からカタログを生成
    ///
    /// フォルダが読めない場合のみエラー。個別ファイルの失敗は skipped に入る。
    pub fn build(&self, folder: &Path) -> Result<BuildReport> {
        let images = scanner::scan_folder(folder, &self.config.extensions)?;
        if images.is_empty() {
            tracing::warn!(folder = %folder.display(), "no images found");
        }

        let mut allocator = IdAllocator::new();
        let jobs: Vec<(ImageInfo, String)> = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                let id = allocator.allocate(&image.file_name, index);
                (image, id)
            })
            .collect();

        let progress = self.progress_bar(jobs.len() as u64);
        let process = |(image, id): &(ImageInfo, String)| {
            let outcome = self.process_image(image, id.clone());
            progress.inc(1);
            (image.file_name.clone(), outcome)
        };

        let outcomes: Vec<(String, Result<Photo>)> = if self.config.parallel {
            jobs.par_iter().map(process).collect()
        } else {
            jobs.iter().map(process).collect()
        };
        progress.finish_and_clear();

        let mut report = BuildReport {
            scanned: jobs.len(),
            ..Default::default()
        };

        for (file_name, outcome) in outcomes {
            match outcome {
                Ok(photo) => {
                    if photo.blur_data_url.is_none() && self.config.placeholder.enabled {
                        report.missing_placeholders += 1;
                    }
                    report.photos.push(photo);
                }
                Err(e) => {
                    tracing::warn!(file = %file_name, error = %e, "skipping photo");
                    report.skipped.push(SkippedFile {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// 写真1枚分のメタデータを作成
    fn process_image(&self, image: &ImageInfo, id: String) -> Result<Photo> {
        if !image.has_utf8_name() {
            return Err(GalleryError::ImageLoad(format!(
                "ファイル名がUTF-8ではありません: {}",
                image.file_name
            )));
        }
        let file_size = std::fs::metadata(&image.path)?.len();

        let dims = scanner::probe_dimensions(&image.path);
        let blur_data_url = self.placeholder_for(image)?;

        let category = self.scheme.classify(image.sequence);
        let profile = category.profile();

        let mut photo = Photo::new(
            id,
            image.file_name.clone(),
            public_src(&self.config.public_path, &image.file_name),
        );
        photo.width = dims.width;
        photo.height = dims.height;
        photo.aspect_ratio = gallery_common::types::aspect_ratio(dims.width, dims.height);
        photo.file_size = file_size;
        photo.blur_data_url = blur_data_url;
        photo.category = category;
        photo.description = profile.description.to_string();
        photo.tags = profile.tags.iter().map(|t| t.to_string()).collect();
        photo.location = self.config.location.clone();
        photo.timestamp = scanner::extract_timestamp(&image.path);

        Ok(photo)
    }

    /// 方針に従ってプレースホルダーを生成
    fn placeholder_for(&self, image: &ImageInfo) -> Result<Option<String>> {
        let config = &self.config.placeholder;
        if !config.enabled {
            return Ok(None);
        }

        match placeholder::generate_blur_data_url(&image.path, config) {
            Ok(url) => Ok(Some(url)),
            Err(e) => match config.on_error {
                PlaceholderPolicy::Skip => Err(e),
                PlaceholderPolicy::Empty => {
                    tracing::warn!(file = %image.file_name, error = %e, "placeholder failed, keeping photo without it");
                    Ok(None)
                }
            },
        }
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        ProgressBar::new(len).with_style(style)
    }
}

/// カタログを生成（進捗表示なし）
pub fn build_catalog(folder: &Path, config: &Config) -> Result<BuildReport> {
    CatalogBuilder::new(config)?.build(folder)
}
