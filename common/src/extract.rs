//! 抽出フロー（1回だけの自動再試行つき）
//!
//! サーバーが「対応項目なし」の定型メッセージを返したときだけ、
//! 同じファイルをもう一度送る。試行は逐次で、最大2回

use crate::api::VoucherApi;
use crate::error::{Error, Result};
use crate::messages;
use crate::parser::UploadResponse;
use crate::types::{ExtractionResult, SelectedFile};

/// 1サイクルあたりの最大試行回数
pub const MAX_EXTRACT_ATTEMPTS: usize = 2;

/// 抽出の結果
#[derive(Debug)]
pub struct ExtractOutcome {
    pub result: Result<ExtractionResult>,
    /// 実際に送信した回数
    pub attempts: usize,
    /// 自動再試行を使ったか
    pub retried: bool,
}

/// 再試行対象のメッセージか
pub fn is_retry_sentinel(message: &str) -> bool {
    message == messages::RETRY_SENTINEL
}

/// ファイルを送信して抽出結果を得る
///
/// # Arguments
/// * `api` - 送信先
/// * `file` - 受付済みファイル
/// * `retry_available` - このサイクルで自動再試行がまだ使えるか
pub async fn extract_with_retry<A: VoucherApi>(
    api: &A,
    file: &SelectedFile<A::Handle>,
    retry_available: bool,
) -> ExtractOutcome {
    let mut attempts = 0;
    let mut retried = false;

    loop {
        attempts += 1;
        tracing::debug!(file = %file.name, attempt = attempts, "uploading voucher");

        let response = match api.upload(file).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "upload failed");
                return ExtractOutcome { result: Err(e), attempts, retried };
            }
        };

        match interpret(response) {
            Ok(data) => {
                return ExtractOutcome { result: Ok(data), attempts, retried };
            }
            Err(message) => {
                let can_retry = retry_available && !retried && attempts < MAX_EXTRACT_ATTEMPTS;
                if can_retry && is_retry_sentinel(&message) {
                    tracing::debug!("no supported fields found, retrying once");
                    retried = true;
                    continue;
                }
                return ExtractOutcome {
                    result: Err(Error::Application(message)),
                    attempts,
                    retried,
                };
            }
        }
    }
}

/// エンベロープを成功データか失敗メッセージに振り分ける
fn interpret(response: UploadResponse) -> std::result::Result<ExtractionResult, String> {
    match response {
        UploadResponse { success: true, data: Some(data), .. } => Ok(data),
        UploadResponse { message, .. } => {
            Err(message.unwrap_or_else(|| messages::UPLOAD_FAILED.to_string()))
        }
    }
}
