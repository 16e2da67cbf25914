use gallery_common::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use std::path::Path;

/// 画像の寸法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    /// 取得に失敗して既定値を使った
    pub fallback: bool,
}

impl Dimensions {
    pub fn fallback() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
            fallback: true,
        }
    }
}

/// ヘッダーから寸法を取得（全体のデコードはしない）
///
/// 取得できない場合や 0 の場合は 6000x4000。
pub fn probe_dimensions(path: &Path) -> Dimensions {
    match image::image_dimensions(path) {
        Ok((width, height)) if width > 0 && height > 0 => Dimensions {
            width,
            height,
            fallback: false,
        },
        Ok((width, height)) => {
            tracing::debug!(path = %path.display(), width, height, "empty dimensions, using fallback");
            Dimensions::fallback()
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "dimension probe failed, using fallback");
            Dimensions::fallback()
        }
    }
}
