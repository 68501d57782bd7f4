//! APIレスポンスパーサー
//!
//! 抽出サービスのJSONエンベロープ `{success, data?, message?}` を読む

use crate::error::Result;
use crate::types::ExtractionResult;
use serde::{Deserialize, Serialize};

/// `/vouchers/upload` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    pub success: bool,
    pub data: Option<ExtractionResult>,
    pub message: Option<String>,
}

/// `/vouchers/save` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// アップロードレスポンスをパース
///
/// `success` が欠けている場合は失敗扱い
///
/// # Examples
/// ```
/// use voucher_reader_common::parse_upload_response;
///
/// let response = parse_upload_response(r#"{"success":false,"message":"x"}"#).unwrap();
/// assert!(!response.success);
/// assert_eq!(response.message.as_deref(), Some("x"));
/// ```
pub fn parse_upload_response(body: &str) -> Result<UploadResponse> {
    Ok(serde_json::from_str(body.trim())?)
}

/// 保存レスポンスをパース
pub fn parse_save_response(body: &str) -> Result<SaveResponse> {
    Ok(serde_json::from_str(body.trim())?)
}
