//! ファイル受付（種類・サイズ検証）

use crate::error::ValidationError;
use crate::types::SelectedFile;
use serde::{Deserialize, Serialize};

/// 受付上限（5MB）
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

const PDF_MIME_TYPE: &str = "application/pdf";

/// 受付条件
///
/// ドロップゾーンの案内文もここから作るので、案内と検証が食い違わない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptPolicy {
    pub allow_pdf: bool,
    pub max_size_bytes: u64,
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self {
            allow_pdf: false,
            max_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl AcceptPolicy {
    pub fn with_pdf(mut self, allow_pdf: bool) -> Self {
        self.allow_pdf = allow_pdf;
        self
    }

    pub fn is_allowed_type(&self, mime_type: &str) -> bool {
        mime_type.starts_with("image/") || (self.allow_pdf && mime_type == PDF_MIME_TYPE)
    }

    /// 単一ファイルの検証（種類 → サイズの順）
    pub fn check<H>(&self, file: &SelectedFile<H>) -> Result<(), ValidationError> {
        if !self.is_allowed_type(&file.mime_type) {
            return Err(ValidationError::UnsupportedType {
                mime_type: file.mime_type.clone(),
                allow_pdf: self.allow_pdf,
            });
        }
        if file.size_bytes > self.max_size_bytes {
            return Err(ValidationError::TooLarge {
                size_bytes: file.size_bytes,
                max_bytes: self.max_size_bytes,
            });
        }
        Ok(())
    }

    /// `<input accept=...>` 用
    pub fn accept_attr(&self) -> &'static str {
        if self.allow_pdf {
            "image/*,application/pdf"
        } else {
            "image/*"
        }
    }

    /// ドロップゾーンの案内文
    pub fn hint(&self) -> String {
        let formats = if self.allow_pdf { "JPG, PNG, PDF" } else { "JPG, PNG" };
        format!("Soporta: {} (MAX. {})", formats, format_size_limit(self.max_size_bytes))
    }
}

/// 上限サイズの表示（MB/KB、小数第2位で切り捨て）
///
/// 切り捨てなので表示値が実際の上限を超えることはない
pub fn format_size_limit(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    let (unit, suffix) = if bytes >= MB {
        (MB, "MB")
    } else if bytes >= KB {
        (KB, "KB")
    } else {
        return format!("{} bytes", bytes);
    };

    let whole = bytes / unit;
    let hundredths = (bytes % unit) * 100 / unit;
    match hundredths {
        0 => format!("{}{}", whole, suffix),
        h if h % 10 == 0 => format!("{}.{}{}", whole, h / 10, suffix),
        h => format!("{}.{:02}{}", whole, h, suffix),
    }
}

/// ドロップ/選択されたファイル群を受け付ける
///
/// 先頭の1件だけを見る。2件目以降は無視する
pub fn accept<H, I>(candidates: I, policy: &AcceptPolicy) -> Result<SelectedFile<H>, ValidationError>
where
    I: IntoIterator<Item = SelectedFile<H>>,
{
    let file = candidates.into_iter().next().ok_or(ValidationError::NoFile)?;
    policy.check(&file)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    fn file(mime: &str, size: u64) -> SelectedFile<()> {
        SelectedFile::new("voucher", mime, size, ())
    }

    #[test]
    fn test_accept_image() {
        let accepted = accept(vec![file("image/jpeg", 1024)], &AcceptPolicy::default()).unwrap();
        assert_eq!(accepted.mime_type, "image/jpeg");
    }

    #[test]
    fn test_reject_non_image_types() {
        let policy = AcceptPolicy::default();
        for mime in ["application/pdf", "text/plain", "", "video/mp4", "imagex/png"] {
            let err = accept(vec![file(mime, 10)], &policy).unwrap_err();
            assert_eq!(err.to_string(), messages::TYPE_NOT_ALLOWED, "mime: {}", mime);
        }
    }

    #[test]
    fn test_size_boundary() {
        let policy = AcceptPolicy::default();
        assert!(accept(vec![file("image/png", MAX_FILE_SIZE_BYTES)], &policy).is_ok());

        let err = accept(vec![file("image/png", MAX_FILE_SIZE_BYTES + 1)], &policy).unwrap_err();
        assert_eq!(err.to_string(), "El archivo no debe superar los 5MB");
    }

    #[test]
    fn test_fractional_limit_not_truncated() {
        let policy = AcceptPolicy { allow_pdf: false, max_size_bytes: 1_000_000 };
        assert_eq!(policy.hint(), "Soporta: JPG, PNG (MAX. 976.56KB)");
        let err = accept(vec![file("image/png", 1_000_001)], &policy).unwrap_err();
        assert_eq!(err.to_string(), "El archivo no debe superar los 976.56KB");

        let policy = AcceptPolicy { allow_pdf: false, max_size_bytes: 3 * 512 * 1024 };
        assert_eq!(policy.hint(), "Soporta: JPG, PNG (MAX. 1.5MB)");
        assert!(accept(vec![file("image/png", 3 * 512 * 1024)], &policy).is_ok());
        let err = accept(vec![file("image/png", 3 * 512 * 1024 + 1)], &policy).unwrap_err();
        assert_eq!(err.to_string(), "El archivo no debe superar los 1.5MB");
    }

    #[test]
    fn test_format_size_limit() {
        assert_eq!(format_size_limit(5 * 1024 * 1024), "5MB");
        assert_eq!(format_size_limit(5 * 1024 * 1024 + 256 * 1024), "5.25MB");
        assert_eq!(format_size_limit(2048), "2KB");
        assert_eq!(format_size_limit(512), "512 bytes");
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = accept(vec![file("text/plain", MAX_FILE_SIZE_BYTES * 2)], &AcceptPolicy::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedType { .. }));
    }

    #[test]
    fn test_only_first_candidate_considered() {
        let files = vec![file("text/plain", 10), file("image/png", 10)];
        assert!(accept(files, &AcceptPolicy::default()).is_err());

        let files = vec![file("image/png", 10), file("text/plain", 10)];
        assert!(accept(files, &AcceptPolicy::default()).is_ok());
    }

    #[test]
    fn test_empty_candidates() {
        let err = accept(Vec::<SelectedFile<()>>::new(), &AcceptPolicy::default()).unwrap_err();
        assert_eq!(err, ValidationError::NoFile);
    }

    #[test]
    fn test_pdf_policy() {
        let policy = AcceptPolicy::default().with_pdf(true);
        assert!(accept(vec![file("application/pdf", 10)], &policy).is_ok());
        assert!(accept(vec![file("text/plain", 10)], &policy).is_err());
    }

    #[test]
    fn test_hint_matches_policy() {
        assert_eq!(AcceptPolicy::default().hint(), "Soporta: JPG, PNG (MAX. 5MB)");
        assert_eq!(
            AcceptPolicy::default().with_pdf(true).hint(),
            "Soporta: JPG, PNG, PDF (MAX. 5MB)"
        );
        assert_eq!(AcceptPolicy::default().accept_attr(), "image/*");
    }
}
