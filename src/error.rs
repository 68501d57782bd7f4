use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoucherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("{0}")]
    Rejected(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] voucher_reader_common::Error),
}

impl From<dialoguer::Error> for VoucherError {
    fn from(e: dialoguer::Error) -> Self {
        VoucherError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VoucherError>;
