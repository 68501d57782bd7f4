use super::LocalFile;
use voucher_reader_common::PreviewKind;

/// CLIのプレビュー表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInfo {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub kind: PreviewKind,
    /// 画像の幅・高さ（読めなければ None）
    pub dimensions: Option<(u32, u32)>,
}

pub fn describe(file: &LocalFile) -> PreviewInfo {
    let kind = PreviewKind::for_mime(&file.mime_type);
    let dimensions = match kind {
        PreviewKind::Image => image::load_from_memory(&file.handle)
            .ok()
            .map(|img| (img.width(), img.height())),
        PreviewKind::Document => None,
    };

    PreviewInfo {
        file_name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        size_bytes: file.size_bytes,
        kind,
        dimensions,
    }
}

impl std::fmt::Display for PreviewInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", voucher_reader_common::messages::PREVIEW)?;
        writeln!(f, "  {} ({}, {} bytes)", self.file_name, self.mime_type, self.size_bytes)?;
        match (self.kind, self.dimensions) {
            (PreviewKind::Image, Some((w, h))) => write!(f, "  imagen {}x{} px", w, h),
            (PreviewKind::Image, None) => write!(f, "  imagen (no se pudo decodificar)"),
            (PreviewKind::Document, _) => write!(f, "  documento"),
        }
    }
}
