use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIF の撮影日時を ISO-8601（YYYY-MM-DDTHH:MM:SS）で取得
pub fn extract_timestamp(path: &Path) -> Option<String> {
    let raw = read_exif_date(path).ok()?;
    normalize_exif_datetime(&raw)
}

fn read_exif_date(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader.read_from_container(&mut bufreader)?;

    // DateTimeOriginal を探す
    if let Some(field) = exif.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY) {
        return Ok(field.display_value().to_string());
    }

    // DateTime を探す
    if let Some(field) = exif.get_field(exif::Tag::DateTime, exif::In::PRIMARY) {
        return Ok(field.display_value().to_string());
    }

    Err("No date found in EXIF".into())
}

/// "2025-06-06 14:32:10" / "2025:06:06 14:32:10" → "2025-06-06T14:32:10"
fn normalize_exif_datetime(raw: &str) -> Option<String> {
    let raw = raw.trim().trim_matches('"');
    ["%Y-%m-%d %H:%M:%S", "%Y:%m:%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
}
