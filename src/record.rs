//! 抽出結果ファイルの読み書き

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use voucher_reader_common::ExtractionResult;

/// 出力JSON（4項目に取得元と日時を添える）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    #[serde(default)]
    pub source_file: String,

    /// 抽出日時（RFC 3339）
    #[serde(default)]
    pub extracted_at: String,

    #[serde(flatten)]
    pub result: ExtractionResult,
}

impl ExtractionRecord {
    pub fn new(source_file: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            source_file: source_file.into(),
            extracted_at: chrono::Local::now().to_rfc3339(),
            result,
        }
    }
}

pub fn write_record(path: &Path, record: &ExtractionRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 抽出結果を読む（4項目だけのJSONでもよい）
pub fn read_result(path: &Path) -> Result<ExtractionResult> {
    let content = std::fs::read_to_string(path)?;
    let result: ExtractionResult = serde_json::from_str(&content)?;
    Ok(result)
}
