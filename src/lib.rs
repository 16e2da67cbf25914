//! ウェディングギャラリー写真カタログ
//!
//! 写真フォルダをスキャンしてカタログJSONを生成するビルダーと、
//! 生成済みカタログ（またはフォルダ）を読み込むリーダー。

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod placeholder;
pub mod reader;
pub mod scanner;

pub use gallery_common::{Catalog, CategoryGroup, CategoryScheme, Photo, PhotoCategory};
