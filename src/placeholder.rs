//! ぼかしプレースホルダー生成
//!
//! 画像を 10x7 程度に縮小してぼかし、JPEG の data URL にする。
//! フル解像度の画像を読み込むまでの間、ギャラリーで表示される。

use crate::config::PlaceholderConfig;
use crate::error::{GalleryError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// ファイルからプレースホルダーを生成
pub fn generate_blur_data_url(path: &Path, config: &PlaceholderConfig) -> Result<String> {
    let img = image::open(path)
        .map_err(|e| GalleryError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    encode_blur_data_url(&img, config)
}

/// デコード済み画像からプレースホルダーを生成
///
/// 縮小はアスペクト比を保ったまま中央を切り抜く（cover）。
pub fn encode_blur_data_url(img: &DynamicImage, config: &PlaceholderConfig) -> Result<String> {
    let small = img.resize_to_fill(config.width, config.height, FilterType::Triangle);
    let blurred = small.blur(config.blur_sigma);
    let rgb = DynamicImage::ImageRgb8(blurred.to_rgb8());

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| GalleryError::Placeholder(e.to_string()))?;

    Ok(format!("{}{}", DATA_URL_PREFIX, STANDARD.encode(&buffer)))
}

/// data URL から JPEG バイト列を取り出す
pub fn decode_blur_data_url(data_url: &str) -> Option<Vec<u8>> {
    let encoded = data_url.strip_prefix(DATA_URL_PREFIX)?;
    STANDARD.decode(encoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
        }))
    }

    #[test]
    fn test_placeholder_is_small_jpeg() {
        let config = PlaceholderConfig::default();
        let url = encode_blur_data_url(&gradient(300, 200), &config).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));

        let bytes = decode_blur_data_url(&url).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 7));
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let config = PlaceholderConfig::default();
        let img = gradient(120, 80);
        assert_eq!(
            encode_blur_data_url(&img, &config).unwrap(),
            encode_blur_data_url(&img, &config).unwrap()
        );
    }

    #[test]
    fn test_placeholder_custom_size() {
        let config = PlaceholderConfig {
            width: 16,
            height: 16,
            ..Default::default()
        };
        let url = encode_blur_data_url(&gradient(400, 100), &config).unwrap();
        let decoded = image::load_from_memory(&decode_blur_data_url(&url).unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("DSC_0001.jpg");
        gradient(60, 40).save(&path).unwrap();

        let url = generate_blur_data_url(&path, &PlaceholderConfig::default()).unwrap();
        assert!(decode_blur_data_url(&url).is_some());
    }

    #[test]
    fn test_generate_from_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"\xFF\xD8 truncated").unwrap();

        let result = generate_blur_data_url(&path, &PlaceholderConfig::default());
        assert!(matches!(result, Err(GalleryError::ImageLoad(_))));
    }

    #[test]
    fn test_decode_rejects_other_prefixes() {
        assert!(decode_blur_data_url("data:image/png;base64,AAAA").is_none());
    }
}
