mod image_info;

pub use image_info::{describe, PreviewInfo};

use crate::error::{Result, VoucherError};
use std::path::Path;
use voucher_reader_common::SelectedFile;

/// CLIで扱う選択ファイル（ハンドルはファイル内容）
pub type LocalFile = SelectedFile<Vec<u8>>;

const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("pdf", "application/pdf"),
];

/// 拡張子からMIMEタイプを推定（不明なら application/octet-stream）
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("application/octet-stream")
}

/// ローカルファイルを読み込む
///
/// 種類・サイズの検証はセッション側で行う
pub fn load_file(path: &Path) -> Result<LocalFile> {
    if !path.is_file() {
        return Err(VoucherError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(SelectedFile::new(
        file_name,
        mime_type_for(path),
        content.len() as u64,
        content,
    ))
}
