//! プレビュー表示方法の判定

/// プレビューの描画方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// `<img>` で直接表示
    Image,
    /// 埋め込み文書（PDFなど）
    Document,
}

impl PreviewKind {
    /// 文書埋め込み時の `type` 属性
    pub const EMBED_TYPE: &'static str = "application/pdf";

    pub fn for_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            PreviewKind::Image
        } else {
            PreviewKind::Document
        }
    }
}
