//! ファイル名の規則
//!
//! - 連番: ファイル名に最初に現れる整数（なければ 0）
//! - 並び順: 連番の昇順、同じ連番はファイル名のバイト順
//! - ID: 拡張子を除いたファイル名。重複時は並び順のインデックスを付与

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

lazy_static::lazy_static! {
    static ref SEQUENCE_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// ファイル名に含まれる最初の整数を取得
///
/// 数字がない場合は 0。u64 に収まらない場合は u64::MAX（最後尾）。
pub fn sequence_number(filename: &str) -> u64 {
    SEQUENCE_RE
        .find(filename)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// 拡張子が受け付け対象か（大文字小文字は区別しない）
pub fn has_accepted_extension(filename: &str, extensions: &[String]) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// 拡張子を除いたファイル名
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    }
}

/// 連番順に並べ替え（安定・全順序）
pub fn sort_by_sequence<T>(items: &mut [T], filename: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| {
        let (a, b) = (filename(a), filename(b));
        sequence_number(a)
            .cmp(&sequence_number(b))
            .then_with(|| a.cmp(b))
    });
}

/// 一意なIDの払い出し
#[derive(Debug, Default)]
pub struct IdAllocator {
    used: HashSet<String>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `index` は並び替え後の位置。使用済みなら `_<index>` を付与する
    pub fn allocate(&mut self, filename: &str, index: usize) -> String {
        let mut id = strip_extension(filename).to_string();
        while self.used.contains(&id) {
            id = format!("{}_{}", id, index);
        }
        self.used.insert(id.clone());
        id
    }
}

/// 並び替え済みのファイル名リストからIDを割り当てる
pub fn assign_ids<S: AsRef<str>>(sorted_filenames: &[S]) -> Vec<String> {
    let mut allocator = IdAllocator::new();
    sorted_filenames
        .iter()
        .enumerate()
        .map(|(index, name)| allocator.allocate(name.as_ref(), index))
        .collect()
}

/// 公開パスを組み立てる（"/wedding_photos" + "a.jpg" → "/wedding_photos/a.jpg"）
pub fn public_src(public_path: &str, filename: &str) -> String {
    format!("{}/{}", public_path.trim_end_matches('/'), filename)
}
