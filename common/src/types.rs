//! 抽出結果とファイルの型定義
//!
//! WebとCLIで共有される型:
//! - SelectedFile: 受付済みファイル（ハンドルは各フロントエンドの型）
//! - ExtractionResult: 抽出サービスが返す4項目

use crate::messages;
use serde::{Deserialize, Serialize};

/// 利用者が選んだファイル
///
/// `handle` はブラウザでは `web_sys::File`、CLIではファイル内容
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64, handle: H) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            handle,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// 抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub operation_number: String,     // 取引番号
}

impl ExtractionResult {
    /// 表示用のラベルと値（表示順）
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (messages::LABEL_NAME, self.name.as_str()),
            (messages::LABEL_AMOUNT, self.amount.as_str()),
            (messages::LABEL_DATE, self.date.as_str()),
            (messages::LABEL_OPERATION_NUMBER, self.operation_number.as_str()),
        ]
    }

    /// クリップボードに書き込むテキスト
    pub fn to_clipboard_text(&self) -> String {
        self.fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            name: "Juan".to_string(),
            amount: "100.00".to_string(),
            date: "2024-01-01".to_string(),
            operation_number: "OP123".to_string(),
        }
    }

    #[test]
    fn test_extraction_result_deserialize() {
        let json = r#"{"name":"Juan","amount":"100.00","date":"2024-01-01","operationNumber":"OP123"}"#;
        let result: ExtractionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result, sample());
    }

    #[test]
    fn test_extraction_result_serialize_camel_case() {
        let json = serde_json::to_string(&sample()).expect("シリアライズ失敗");
        assert!(json.contains("\"operationNumber\":\"OP123\""));
        assert!(!json.contains("operation_number"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let result: ExtractionResult = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(result.name, "Ana");
        assert_eq!(result.amount, "");
        assert_eq!(result.operation_number, "");
    }

    #[test]
    fn test_clipboard_text_layout() {
        let text = sample().to_clipboard_text();
        assert_eq!(
            text,
            "Nombre: Juan\nMonto: 100.00\nFecha: 2024-01-01\nNúmero de operación: OP123"
        );
    }

    #[test]
    fn test_selected_file_is_image() {
        let png = SelectedFile::new("a.png", "image/png", 10, ());
        let pdf = SelectedFile::new("a.pdf", "application/pdf", 10, ());
        assert!(png.is_image());
        assert!(!pdf.is_image());
    }
}
