//! 抽出サービスとクリップボードの抽象
//!
//! ブラウザ(fetch)とCLI(reqwest)がそれぞれ実装する。
//! どちらも単一スレッドで動かすので `Send` は要求しない

use crate::error::Result;
use crate::parser::{SaveResponse, UploadResponse};
use crate::types::{ExtractionResult, SelectedFile};

/// 抽出サービスの既定ホスト
pub const DEFAULT_BASE_URL: &str = "https://voucherreaderback.onrender.com";

/// マルチパートのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// エンドポイントURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/vouchers/upload", self.base_url)
    }

    pub fn save_url(&self) -> String {
        format!("{}/vouchers/save", self.base_url)
    }
}

/// 抽出・保存エンドポイントへの送信
///
/// 実装側の約束:
/// - 接続失敗は `Error::Network`
/// - 2xx以外は `Error::Server`
/// - 本文のJSONが壊れていれば `Error::Json`
#[allow(async_fn_in_trait)]
pub trait VoucherApi {
    /// ファイルハンドルの型
    type Handle;

    async fn upload(&self, file: &SelectedFile<Self::Handle>) -> Result<UploadResponse>;

    async fn save(&self, result: &ExtractionResult) -> Result<SaveResponse>;
}

/// クリップボードへの書き込み
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()>;
}
