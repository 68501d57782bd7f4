//! テスト用の偽送信先・偽クリップボード

use crate::api::{ClipboardWriter, VoucherApi};
use crate::error::{Error, Result};
use crate::parser::{SaveResponse, UploadResponse};
use crate::types::{ExtractionResult, SelectedFile};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub(crate) fn sample_result() -> ExtractionResult {
    ExtractionResult {
        name: "Juan".to_string(),
        amount: "100.00".to_string(),
        date: "2024-01-01".to_string(),
        operation_number: "OP123".to_string(),
    }
}

pub(crate) fn success(data: ExtractionResult) -> UploadResponse {
    UploadResponse { success: true, data: Some(data), message: None }
}

pub(crate) fn failure(message: &str) -> UploadResponse {
    UploadResponse { success: false, data: None, message: Some(message.to_string()) }
}

/// 用意したレスポンスを順番に返す
#[derive(Default)]
pub(crate) struct FakeApi {
    uploads: RefCell<VecDeque<Result<UploadResponse>>>,
    saves: RefCell<VecDeque<Result<SaveResponse>>>,
    upload_calls: Cell<usize>,
    saved: RefCell<Vec<ExtractionResult>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_upload(self, response: Result<UploadResponse>) -> Self {
        self.uploads.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn with_save(self, response: Result<SaveResponse>) -> Self {
        self.saves.borrow_mut().push_back(response);
        self
    }

    pub(crate) fn upload_calls(&self) -> usize {
        self.upload_calls.get()
    }

    pub(crate) fn saved(&self) -> Vec<ExtractionResult> {
        self.saved.borrow().clone()
    }
}

impl VoucherApi for FakeApi {
    type Handle = ();

    async fn upload(&self, _file: &SelectedFile<()>) -> Result<UploadResponse> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no scripted response".to_string())))
    }

    async fn save(&self, result: &ExtractionResult) -> Result<SaveResponse> {
        self.saved.borrow_mut().push(result.clone());
        self.saves
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no scripted response".to_string())))
    }
}

#[derive(Default)]
pub(crate) struct FakeClipboard {
    fail: bool,
    written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    pub(crate) fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub(crate) fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("permission denied".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}
