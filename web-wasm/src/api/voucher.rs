//! 抽出サービス連携（fetch）
//!
//! 抽出: POST {base}/vouchers/upload（multipart, フィールド名 "file"）
//! 保存: POST {base}/vouchers/save（JSON）

use leptos::logging::log;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use voucher_reader_common::{
    parse_save_response, parse_upload_response, ClipboardWriter, Endpoints, Error,
    ExtractionResult, Result, SaveResponse, SelectedFile, UploadResponse, VoucherApi,
    UPLOAD_FIELD,
};

/// ブラウザの fetch で抽出サービスを呼ぶ
#[derive(Debug, Clone, Default)]
pub struct FetchVoucherApi {
    endpoints: Endpoints,
}

/// JS側の例外を文字列にする
fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network_error(value: JsValue) -> Error {
    Error::Network(describe_js(&value))
}

fn post(url: &str, body: &JsValue) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(body);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network_error)?;
    Ok(request)
}

/// 送信して本文を文字列で受け取る（2xx以外は Server）
async fn send(request: &Request) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window がありません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(Error::Server { status: resp.status() });
    }

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    Ok(text.as_string().unwrap_or_default())
}

impl VoucherApi for FetchVoucherApi {
    type Handle = File;

    async fn upload(&self, file: &SelectedFile<File>) -> Result<UploadResponse> {
        let form = FormData::new().map_err(network_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, &file.handle, &file.name)
            .map_err(network_error)?;

        let request = post(&self.endpoints.upload_url(), &form.into())?;
        let body = send(&request).await?;
        log!("upload response: {}", body);

        parse_upload_response(&body)
    }

    async fn save(&self, result: &ExtractionResult) -> Result<SaveResponse> {
        let json = serde_json::to_string(result)?;

        let request = post(&self.endpoints.save_url(), &JsValue::from_str(&json))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(network_error)?;
        let body = send(&request).await?;
        log!("save response: {}", body);

        parse_save_response(&body)
    }
}

/// navigator.clipboard への書き込み
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window =
            web_sys::window().ok_or_else(|| Error::Clipboard("window がありません".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| Error::Clipboard(describe_js(&e)))
    }
}
