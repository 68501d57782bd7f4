//! 保存フロー（クリップボード + 保存エンドポイント）
//!
//! クリップボードとサーバーの失敗は別々に返す

use crate::api::{ClipboardWriter, VoucherApi};
use crate::error::{Error, Result};
use crate::messages;
use crate::types::ExtractionResult;

/// 保存の結果
#[derive(Debug)]
pub struct SaveOutcome {
    pub clipboard: Result<()>,
    pub server: Result<()>,
}

/// 抽出結果をクリップボードへ書き込み、保存エンドポイントへ送る
///
/// クリップボードの成否に関わらずサーバーへは送る
pub async fn save_fields<A, C>(api: &A, clipboard: &C, result: &ExtractionResult) -> SaveOutcome
where
    A: VoucherApi,
    C: ClipboardWriter,
{
    let text = result.to_clipboard_text();
    let clipboard_outcome = clipboard.write_text(&text).await;
    if let Err(e) = &clipboard_outcome {
        tracing::warn!(error = %e, "clipboard write failed");
    }

    let server = match api.save(result).await {
        Ok(response) if response.success => Ok(()),
        Ok(response) => Err(Error::Application(
            response.message.unwrap_or_else(|| messages::SAVE_FAILED.to_string()),
        )),
        Err(e) => Err(e),
    };
    if let Err(e) = &server {
        tracing::warn!(error = %e, "save failed");
    }

    SaveOutcome { clipboard: clipboard_outcome, server }
}
