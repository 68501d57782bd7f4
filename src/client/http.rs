//! reqwestによる抽出・保存エンドポイント呼び出し

use crate::error::{Result, VoucherError};
use crate::scanner::LocalFile;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use voucher_reader_common::{
    parse_save_response, parse_upload_response, Endpoints, Error, ExtractionResult,
    SaveResponse, UploadResponse, VoucherApi, UPLOAD_FIELD,
};

pub struct HttpVoucherApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpVoucherApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoucherError::HttpClient(e.to_string()))?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// ステータス確認後に本文を読む
    async fn read_body(response: reqwest::Response) -> voucher_reader_common::Result<String> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "server responded with error status");
            return Err(Error::Server { status: status.as_u16() });
        }
        let body = response.text().await.map_err(network_error)?;
        tracing::debug!(%body, "server response");
        Ok(body)
    }
}

impl VoucherApi for HttpVoucherApi {
    type Handle = Vec<u8>;

    async fn upload(&self, file: &LocalFile) -> voucher_reader_common::Result<UploadResponse> {
        // MIMEが不正ならパート側の指定を省く
        let part = Part::bytes(file.handle.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .unwrap_or_else(|_| Part::bytes(file.handle.clone()).file_name(file.name.clone()));
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.endpoints.upload_url())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        let body = Self::read_body(response).await?;
        parse_upload_response(&body)
    }

    async fn save(&self, result: &ExtractionResult) -> voucher_reader_common::Result<SaveResponse> {
        let response = self
            .client
            .post(self.endpoints.save_url())
            .json(result)
            .send()
            .await
            .map_err(network_error)?;

        let body = Self::read_body(response).await?;
        parse_save_response(&body)
    }
}

fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}
