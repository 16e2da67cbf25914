//! カタログリーダー
//!
//! ビルダーが出力した photo-metadata.json を読み込み、読み取り専用の
//! 問い合わせを提供する。読み込み時に検証を行い、以降は不変。
//! 複数スレッドから `&Catalog` / `Arc<Catalog>` で共有できる。

use crate::error::{Error, Result};
use crate::types::{
    aspect_ratio, CategoryGroup, CategoryStats, Page, Photo, PhotoCategory,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    photos: Vec<Photo>,
    /// id → photos のインデックス
    index: HashMap<String, usize>,
}

impl Catalog {
    /// 写真リストから作成（検証付き、順序は保持）
    pub fn from_photos(photos: Vec<Photo>) -> Result<Self> {
        let mut photos = photos;
        let mut index = HashMap::with_capacity(photos.len());

        for (i, photo) in photos.iter_mut().enumerate() {
            if photo.width == 0 || photo.height == 0 {
                return Err(Error::Validation(format!(
                    "{}: width and height must be positive ({}x{})",
                    photo.id, photo.width, photo.height
                )));
            }

            if !photo.has_consistent_aspect_ratio() {
                tracing::debug!(
                    id = %photo.id,
                    stored = photo.aspect_ratio,
                    "aspectRatio does not match width/height, recomputing"
                );
                photo.aspect_ratio = aspect_ratio(photo.width, photo.height);
            }

            if index.insert(photo.id.clone(), i).is_some() {
                return Err(Error::Validation(format!("duplicate id: {}", photo.id)));
            }
        }

        let uncategorized = photos
            .iter()
            .filter(|p| p.category == PhotoCategory::Uncategorized)
            .count();
        if uncategorized > 0 {
            tracing::warn!(count = uncategorized, "photos without a known category");
        }

        Ok(Self { photos, index })
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let photos: Vec<Photo> = serde_json::from_str(json)?;
        Self::from_photos(photos)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 全写真（保存順）
    pub fn list_all(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// IDで検索（見つからなければ None）
    pub fn get_by_id(&self, id: &str) -> Option<&Photo> {
        self.index.get(id).map(|&i| &self.photos[i])
    }

    /// 指定カテゴリの写真（保存順）
    pub fn photos_by_category(&self, category: PhotoCategory) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// カテゴリ → 写真のグループ化（列挙順、空のカテゴリは含まない）
    fn group_by_category(&self) -> BTreeMap<PhotoCategory, Vec<&Photo>> {
        let mut groups: BTreeMap<PhotoCategory, Vec<&Photo>> = BTreeMap::new();
        for photo in &self.photos {
            groups.entry(photo.category).or_default().push(photo);
        }
        groups
    }

    /// フィルタ用カテゴリ一覧
    ///
    /// 先頭は全写真を含む "all"。以降は写真が1枚以上あるカテゴリのみ。
    pub fn list_categories(&self) -> Vec<CategoryGroup> {
        let mut categories = vec![CategoryGroup {
            id: CategoryGroup::ALL_ID.to_string(),
            name: CategoryGroup::ALL_NAME.to_string(),
            photo_ids: self.photos.iter().map(|p| p.id.clone()).collect(),
        }];

        categories.extend(self.group_by_category().into_iter().map(|(category, photos)| {
            CategoryGroup {
                id: category.slug(),
                name: category.as_str().to_string(),
                photo_ids: photos.into_iter().map(|p| p.id.clone()).collect(),
            }
        }));

        categories
    }

    /// カテゴリスラッグ → 枚数（"all" は総数）
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .group_by_category()
            .into_iter()
            .map(|(category, photos)| (category.slug(), photos.len()))
            .collect();
        counts.insert(CategoryGroup::ALL_ID.to_string(), self.photos.len());
        counts
    }

    /// 総数とカテゴリ別枚数
    pub fn stats(&self) -> CategoryStats {
        CategoryStats {
            total: self.photos.len(),
            categories: self
                .group_by_category()
                .into_iter()
                .map(|(category, photos)| (category, photos.len()))
                .collect(),
        }
    }

    /// 無限スクロール用のページ取得
    ///
    /// `category` が None なら全写真が対象。`limit` が 0 の場合は空ページ。
    pub fn page(&self, category: Option<PhotoCategory>, offset: usize, limit: usize) -> Page<'_> {
        let filtered: Vec<&Photo> = match category {
            Some(category) => self.photos_by_category(category),
            None => self.photos.iter().collect(),
        };
        let total = filtered.len();

        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);
        let next_offset = if end < total && limit > 0 { Some(end) } else { None };

        Page {
            photos: filtered[start..end].to_vec(),
            next_offset,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PHOTOS_PER_LOAD;

    fn photo(id: &str, category: PhotoCategory) -> Photo {
        let mut photo = Photo::new(id, format!("{}.jpg", id), format!("/wedding_photos/{}.jpg", id));
        photo.category = category;
        photo
    }

    fn sample() -> Catalog {
        Catalog::from_photos(vec![
            photo("DSC_0005", PhotoCategory::Ceremony),
            photo("DSC_0200", PhotoCategory::Portraits),
            photo("DSC_0201", PhotoCategory::Portraits),
            photo("DSC_0600", PhotoCategory::Party),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_all_preserves_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["DSC_0005", "DSC_0200", "DSC_0201", "DSC_0600"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get_by_id("DSC_0200").unwrap().category, PhotoCategory::Portraits);
        assert!(catalog.get_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_list_categories_omits_empty() {
        let categories = sample().list_categories();
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["all", "ceremony", "portraits", "party"]);
        assert_eq!(categories[0].name, "All Photos");
        assert_eq!(categories[0].len(), 4);
        assert_eq!(categories[2].photo_ids, vec!["DSC_0200", "DSC_0201"]);
    }

    #[test]
    fn test_count_by_category_matches_filter() {
        let catalog = sample();
        let counts = catalog.count_by_category();
        assert_eq!(counts["all"], catalog.list_all().len());
        for category in PhotoCategory::ALL {
            let expected = catalog
                .list_all()
                .iter()
                .filter(|p| p.category == category)
                .count();
            assert_eq!(counts.get(&category.slug()).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.categories[&PhotoCategory::Portraits], 2);
        assert!(!stats.categories.contains_key(&PhotoCategory::Details));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::from_photos(vec![
            photo("a", PhotoCategory::Ceremony),
            photo("a", PhotoCategory::Party),
        ]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut bad = photo("a", PhotoCategory::Ceremony);
        bad.height = 0;
        assert!(matches!(Catalog::from_photos(vec![bad]), Err(Error::Validation(_))));
    }

    #[test]
    fn test_aspect_ratio_recomputed() {
        let mut skewed = photo("a", PhotoCategory::Ceremony);
        skewed.width = 4000;
        skewed.height = 6000;
        skewed.aspect_ratio = 1.5;
        let catalog = Catalog::from_photos(vec![skewed]).unwrap();
        assert!(catalog.list_all()[0].has_consistent_aspect_ratio());
    }

    #[test]
    fn test_from_json_schema_drift() {
        let json = r#"[
            {"id": "a", "filename": "a.jpg", "src": "/p/a.jpg", "width": 6000, "height": 4000,
             "aspectRatio": 1.5, "fileSize": 100, "category": "Ceremony"},
            {"id": "b", "filename": "b.jpg", "src": "/p/b.jpg", "width": 6000, "height": 4000,
             "aspectRatio": 1.5, "fileSize": 100, "category": "Afterparty", "extra": true},
            {"id": "c", "filename": "c.jpg", "src": "/p/c.jpg", "width": 6000, "height": 4000,
             "fileSize": 100}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_by_id("b").unwrap().category, PhotoCategory::Uncategorized);
        assert_eq!(catalog.get_by_id("c").unwrap().category, PhotoCategory::Uncategorized);
        assert_eq!(catalog.count_by_category()["uncategorized"], 2);
    }

    #[test]
    fn test_from_json_missing_required_field() {
        let json = r#"[{"id": "a", "filename": "a.jpg", "src": "/p/a.jpg"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("photo-metadata.json");
        let json = serde_json::to_string_pretty(sample().list_all()).unwrap();
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.list_all(), sample().list_all());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = Catalog::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_page() {
        let photos: Vec<Photo> = (0..45)
            .map(|i| photo(&format!("p{:03}", i), PhotoCategory::Ceremony))
            .collect();
        let catalog = Catalog::from_photos(photos).unwrap();

        let first = catalog.page(None, 0, PHOTOS_PER_LOAD);
        assert_eq!(first.photos.len(), 20);
        assert_eq!(first.next_offset, Some(20));
        assert_eq!(first.total, 45);

        let last = catalog.page(None, 40, PHOTOS_PER_LOAD);
        assert_eq!(last.photos.len(), 5);
        assert!(!last.has_more());

        let beyond = catalog.page(None, 100, PHOTOS_PER_LOAD);
        assert!(beyond.photos.is_empty());

        let empty = catalog.page(Some(PhotoCategory::Party), 0, PHOTOS_PER_LOAD);
        assert_eq!(empty.total, 0);
        assert!(empty.photos.is_empty());
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
