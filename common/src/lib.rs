//! Wedding Gallery Common Library
//!
//! カタログビルダーとギャラリー表示側で共有される型とリーダー

pub mod types;
pub mod category;
pub mod catalog;
pub mod error;
pub mod naming;

pub use types::{
    format_file_size, CategoryGroup, CategoryProfile, CategoryStats, Page, Photo,
    PhotoCategory, FALLBACK_HEIGHT, FALLBACK_WIDTH, PHOTOS_PER_LOAD,
};
pub use category::{CategoryBand, CategoryScheme};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use naming::{assign_ids, public_src, sequence_number, sort_by_sequence, IdAllocator};
