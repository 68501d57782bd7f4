//! アップロードセッション
//!
//! 画面の一時状態（選択ファイル・抽出結果・送信中フラグ・エラー枠・
//! プレビュー・再試行フラグ）をひとつの値で持つ。
//!
//! 状態遷移:
//! - Empty --accept--> FileSelected
//! - FileSelected --extract--> Extracting --success--> ResultReady
//! - Extracting --失敗--> FileSelected（結果があれば ResultReady のまま）
//! - ResultReady --re-extract--> Extracting
//! - どこからでも --discard--> Empty
//!
//! エラー枠とプレビューは主状態とは独立

use crate::api::{ClipboardWriter, VoucherApi};
use crate::error::{Error, ErrorKind};
use crate::extract::{extract_with_retry, ExtractOutcome};
use crate::messages;
use crate::persist::{save_fields, SaveOutcome};
use crate::types::{ExtractionResult, SelectedFile};
use crate::validation::{self, AcceptPolicy};

/// 主状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    FileSelected,
    Extracting,
    ResultReady,
}

/// エラー表示枠の中身
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSlot {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ErrorSlot {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(),
        }
    }
}

/// 送信開始時に取り出す材料
///
/// 非同期処理の間セッションを借用し続けられない画面側で使う
#[derive(Debug, Clone)]
pub struct ExtractionRequest<H> {
    pub file: SelectedFile<H>,
    pub retry_available: bool,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct UploadSession<H> {
    policy: AcceptPolicy,
    file: Option<SelectedFile<H>>,
    result: Option<ExtractionResult>,
    is_uploading: bool,
    error: Option<ErrorSlot>,
    clipboard_error: Option<ErrorSlot>,
    notice: Option<String>,
    is_preview_open: bool,
    retry_attempted: bool,
    // ファイルが入れ替わるたびに進める。古い抽出結果の取り込みを防ぐ
    generation: u64,
}

impl<H> Default for UploadSession<H> {
    fn default() -> Self {
        Self::new(AcceptPolicy::default())
    }
}

impl<H> UploadSession<H> {
    pub fn new(policy: AcceptPolicy) -> Self {
        Self {
            policy,
            file: None,
            result: None,
            is_uploading: false,
            error: None,
            clipboard_error: None,
            notice: None,
            is_preview_open: false,
            retry_attempted: false,
            generation: 0,
        }
    }

    pub fn policy(&self) -> &AcceptPolicy {
        &self.policy
    }

    pub fn phase(&self) -> Phase {
        match (&self.file, self.is_uploading, &self.result) {
            (None, _, _) => Phase::Empty,
            (Some(_), true, _) => Phase::Extracting,
            (Some(_), false, Some(_)) => Phase::ResultReady,
            (Some(_), false, None) => Phase::FileSelected,
        }
    }

    pub fn file(&self) -> Option<&SelectedFile<H>> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&ExtractionResult> {
        self.result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn error(&self) -> Option<&ErrorSlot> {
        self.error.as_ref()
    }

    pub fn clipboard_error(&self) -> Option<&ErrorSlot> {
        self.clipboard_error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_preview_open(&self) -> bool {
        self.is_preview_open
    }

    pub fn retry_attempted(&self) -> bool {
        self.retry_attempted
    }

    /// ドロップ/選択されたファイルを受け付ける
    ///
    /// 検証に失敗したらエラー枠に載せ、選択中のファイルは変えない。
    /// 選択できるのは Empty のときだけ。差し替えるには先に破棄する。
    /// 結果表示中・送信中は受け付けない
    pub fn accept<I>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile<H>>,
    {
        if matches!(self.phase(), Phase::Extracting | Phase::ResultReady) {
            return false;
        }

        match validation::accept(candidates, &self.policy) {
            Ok(file) if self.file.is_some() => {
                tracing::debug!(file = %file.name, "file already selected, ignoring");
                false
            }
            Ok(file) => {
                tracing::debug!(file = %file.name, size = file.size_bytes, "file accepted");
                self.file = Some(file);
                self.error = None;
                self.generation += 1;
                true
            }
            Err(e) => {
                self.error = Some(ErrorSlot::from(&Error::from(e)));
                false
            }
        }
    }

    /// すべて初期状態に戻す
    pub fn discard(&mut self) {
        self.file = None;
        self.result = None;
        self.is_uploading = false;
        self.error = None;
        self.clipboard_error = None;
        self.notice = None;
        self.is_preview_open = false;
        self.retry_attempted = false;
        self.generation += 1;
    }

    pub fn open_preview(&mut self) -> bool {
        if self.file.is_none() {
            return false;
        }
        self.is_preview_open = true;
        true
    }

    pub fn close_preview(&mut self) {
        self.is_preview_open = false;
    }

    fn start_extraction(&mut self) -> bool {
        if self.file.is_none() || self.is_uploading {
            return false;
        }
        self.is_uploading = true;
        self.error = None;
        true
    }

    /// 抽出の結果を取り込む
    ///
    /// 送信中フラグはここで一度だけ下ろす。
    /// 送信後に破棄・差し替えがあった場合の結果は捨てる
    pub fn finish_extraction(&mut self, request: &ExtractionRequest<H>, outcome: ExtractOutcome) {
        if request.generation != self.generation {
            tracing::debug!("discarding stale extraction outcome");
            return;
        }
        self.apply_extraction(outcome);
    }

    fn apply_extraction(&mut self, outcome: ExtractOutcome) {
        self.is_uploading = false;
        if outcome.retried {
            self.retry_attempted = true;
        }
        match outcome.result {
            Ok(data) => {
                self.result = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(ErrorSlot::from(&e));
            }
        }
    }

    /// セッションを持ったまま抽出する（CLI向け）
    pub async fn extract<A>(&mut self, api: &A) -> bool
    where
        A: VoucherApi<Handle = H>,
    {
        if !self.start_extraction() {
            return false;
        }
        let retry_available = !self.retry_attempted;
        let outcome = match self.file.as_ref() {
            Some(file) => extract_with_retry(api, file, retry_available).await,
            None => return false,
        };
        self.apply_extraction(outcome);
        true
    }

    /// 保存開始。結果がなければ何もしない
    pub fn begin_save(&mut self) -> Option<ExtractionResult> {
        let result = self.result.clone()?;
        self.notice = None;
        self.clipboard_error = None;
        Some(result)
    }

    /// 保存の結果を取り込む
    ///
    /// クリップボードの失敗は専用の枠、サーバーの失敗は通常のエラー枠へ
    pub fn finish_save(&mut self, outcome: SaveOutcome) {
        match outcome.clipboard {
            Ok(()) => {
                self.notice = Some(messages::CLIPBOARD_COPIED.to_string());
                self.clipboard_error = None;
            }
            Err(e) => self.clipboard_error = Some(ErrorSlot::from(&e)),
        }
        if let Err(e) = outcome.server {
            self.error = Some(ErrorSlot::from(&e));
        }
    }

    /// セッションを持ったまま保存する（CLI向け）
    pub async fn save<A, C>(&mut self, api: &A, clipboard: &C) -> bool
    where
        A: VoucherApi,
        C: ClipboardWriter,
    {
        let Some(result) = self.begin_save() else {
            return false;
        };
        let outcome = save_fields(api, clipboard, &result).await;
        self.finish_save(outcome);
        true
    }
}

impl<H: Clone> UploadSession<H> {
    /// 送信開始。ファイルがない・送信中なら `None`
    pub fn begin_extraction(&mut self) -> Option<ExtractionRequest<H>> {
        if !self.start_extraction() {
            return None;
        }
        let file = self.file.clone()?;
        Some(ExtractionRequest {
            file,
            retry_available: !self.retry_attempted,
            generation: self.generation,
        })
    }
}
