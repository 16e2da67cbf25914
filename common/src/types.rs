//! カタログの型定義
//!
//! ビルダーとギャラリー表示側で共有される型:
//! - Photo: カタログ1件分（画像ファイル1枚）
//! - PhotoCategory: 閉じたカテゴリ列挙
//! - CategoryGroup / CategoryStats / Page: リーダーの問い合わせ結果

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// 寸法が取得できなかった場合の既定値（6000x4000, 3:2）
pub const FALLBACK_WIDTH: u32 = 6000;
pub const FALLBACK_HEIGHT: u32 = 4000;

/// 無限スクロール1回あたりの読み込み枚数
pub const PHOTOS_PER_LOAD: usize = 20;

/// 写真1枚分のメタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,

    /// 元ファイル名（拡張子付き）
    pub filename: String,

    /// 公開パス（例: /wedding_photos/DSC_0001.jpg）
    pub src: String,

    pub width: u32,
    pub height: u32,

    /// width / height。読み込み時に再計算される
    #[serde(default)]
    pub aspect_ratio: f64,

    pub file_size: u64,

    /// ぼかしプレースホルダー（data:image/jpeg;base64,...）
    #[serde(rename = "blurDataURL", default, skip_serializing_if = "Option::is_none")]
    pub blur_data_url: Option<String>,

    #[serde(default)]
    pub category: PhotoCategory,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// 撮影日時（EXIF、ISO-8601）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// null を既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Photo {
    /// 寸法だけを持つ最小構成の写真を作成
    pub fn new(id: impl Into<String>, filename: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            src: src.into(),
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
            aspect_ratio: aspect_ratio(FALLBACK_WIDTH, FALLBACK_HEIGHT),
            file_size: 0,
            blur_data_url: None,
            category: PhotoCategory::Uncategorized,
            description: String::new(),
            tags: Vec::new(),
            location: None,
            timestamp: None,
        }
    }

    /// aspectRatio が width / height と一致しているか
    pub fn has_consistent_aspect_ratio(&self) -> bool {
        self.height > 0 && (self.aspect_ratio - aspect_ratio(self.width, self.height)).abs() < 1e-6
    }
}

/// width / height を計算（height が 0 の場合は 0）
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    width as f64 / height as f64
}

/// 写真カテゴリ（挙式の流れに沿った順序）
///
/// `Uncategorized` はカタログに想定外の値があった場合や、
/// ディレクトリから直接読み込んだ場合の受け皿。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PhotoCategory {
    GettingReady,
    Ceremony,
    Portraits,
    CocktailHour,
    Reception,
    Party,
    Details,
    #[default]
    Uncategorized,
}

/// カテゴリ固有の説明文とタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl PhotoCategory {
    /// 閉じた列挙（Uncategorized を除く）
    pub const ALL: [PhotoCategory; 7] = [
        PhotoCategory::GettingReady,
        PhotoCategory::Ceremony,
        PhotoCategory::Portraits,
        PhotoCategory::CocktailHour,
        PhotoCategory::Reception,
        PhotoCategory::Party,
        PhotoCategory::Details,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoCategory::GettingReady => "Getting Ready",
            PhotoCategory::Ceremony => "Ceremony",
            PhotoCategory::Portraits => "Portraits",
            PhotoCategory::CocktailHour => "Cocktail Hour",
            PhotoCategory::Reception => "Reception",
            PhotoCategory::Party => "Party",
            PhotoCategory::Details => "Details",
            PhotoCategory::Uncategorized => "Uncategorized",
        }
    }

    /// 表示名から変換（大文字小文字・区切り文字の揺れは許容）
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "gettingready" => Some(PhotoCategory::GettingReady),
            "ceremony" => Some(PhotoCategory::Ceremony),
            "portraits" => Some(PhotoCategory::Portraits),
            "cocktailhour" => Some(PhotoCategory::CocktailHour),
            "reception" => Some(PhotoCategory::Reception),
            "party" => Some(PhotoCategory::Party),
            "details" => Some(PhotoCategory::Details),
            "uncategorized" => Some(PhotoCategory::Uncategorized),
            _ => None,
        }
    }

    /// URLやフィルタIDに使うスラッグ（"Getting Ready" → "getting-ready"）
    pub fn slug(&self) -> String {
        slugify(self.as_str())
    }

    /// ギャラリーのフィルタに表示する説明
    pub fn summary(&self) -> &'static str {
        match self {
            PhotoCategory::GettingReady => "Preparation shots, dress/suit details",
            PhotoCategory::Ceremony => "Processional, vows, first kiss, recessional",
            PhotoCategory::Portraits => "Couple, family, bridal party",
            PhotoCategory::CocktailHour => "Mingling, sunset shots",
            PhotoCategory::Reception => "Entrance, first dance, speeches, cake cutting",
            PhotoCategory::Party => "Dancing, celebration shots",
            PhotoCategory::Details => "Rings, flowers, decorations, venue",
            PhotoCategory::Uncategorized => "Photos without a category",
        }
    }

    /// カタログの各写真に付与する説明文とタグ
    pub fn profile(&self) -> CategoryProfile {
        match self {
            PhotoCategory::GettingReady => CategoryProfile {
                description: "Getting ready before the ceremony",
                tags: &["getting-ready", "preparation", "dress", "suit"],
            },
            PhotoCategory::Ceremony => CategoryProfile {
                description: "Wedding ceremony proceedings",
                tags: &["ceremony", "guests", "outdoor-wedding", "tropical", "formal"],
            },
            PhotoCategory::Portraits => CategoryProfile {
                description: "Post-ceremony portraits and family photos",
                tags: &["portraits", "couple", "family", "formal-photos", "beach-setting"],
            },
            PhotoCategory::CocktailHour => CategoryProfile {
                description: "Cocktail hour and sunset mingling",
                tags: &["cocktail-hour", "mingling", "sunset", "guests"],
            },
            PhotoCategory::Reception => CategoryProfile {
                description: "Reception dinner and speeches",
                tags: &["reception", "dining", "speeches", "evening", "celebration"],
            },
            PhotoCategory::Party => CategoryProfile {
                description: "Dancing and late-night celebration",
                tags: &["dancing", "party", "celebration", "night", "fun"],
            },
            PhotoCategory::Details => CategoryProfile {
                description: "Wedding details and venue",
                tags: &["details", "venue", "decoration"],
            },
            PhotoCategory::Uncategorized => CategoryProfile {
                description: "",
                tags: &[],
            },
        }
    }
}

impl std::fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PhotoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoCategory::from_label(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl Serialize for PhotoCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhotoCategory {
    /// 想定外の値（未知の文字列、null、数値など）は Uncategorized として扱う
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let category = value
            .as_str()
            .and_then(PhotoCategory::from_label)
            .unwrap_or(PhotoCategory::Uncategorized);
        Ok(category)
    }
}

/// カテゴリ別の写真IDリスト（フィルタボタン1つ分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    pub photo_ids: Vec<String>,
}

impl CategoryGroup {
    pub const ALL_ID: &'static str = "all";
    pub const ALL_NAME: &'static str = "All Photos";

    pub fn len(&self) -> usize {
        self.photo_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photo_ids.is_empty()
    }
}

/// カテゴリ別の統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub categories: BTreeMap<PhotoCategory, usize>,
}

/// ページング結果
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub photos: Vec<&'a Photo>,
    /// 続きがある場合の次のオフセット
    pub next_offset: Option<usize>,
    /// フィルタ後の総数
    pub total: usize,
}

impl Page<'_> {
    pub fn has_more(&self) -> bool {
        self.next_offset.is_some()
    }
}

/// 小文字化して空白をハイフンに置き換える
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// ファイルサイズを表示用に整形（"0 Bytes", "1.5 KB", "2.35 MB"）
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}
