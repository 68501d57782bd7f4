//! エラー型定義
//!
//! 分類: 検証 / 通信 / サーバー(非2xx) / アプリケーション(success:false) / クリップボード

use crate::messages;
use thiserror::Error;

/// ファイル受付時の検証エラー（通信前に確定する）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::NO_FILE)]
    NoFile,

    #[error("{}", unsupported_type_message(.allow_pdf))]
    UnsupportedType { mime_type: String, allow_pdf: bool },

    #[error("El archivo no debe superar los {}", size_limit_message(.max_bytes))]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

fn size_limit_message(max_bytes: &u64) -> String {
    crate::validation::format_size_limit(*max_bytes)
}

fn unsupported_type_message(allow_pdf: &bool) -> &'static str {
    if *allow_pdf {
        messages::TYPE_NOT_ALLOWED_WITH_PDF
    } else {
        messages::TYPE_NOT_ALLOWED
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    #[error("Application error: {0}")]
    Application(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラー表示枠に載せる分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Server,
    Application,
    Clipboard,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Network(_) => ErrorKind::Network,
            Error::Server { .. } | Error::Json(_) => ErrorKind::Server,
            Error::Application(_) => ErrorKind::Application,
            Error::Clipboard(_) => ErrorKind::Clipboard,
        }
    }

    /// 利用者に見せる文言
    ///
    /// アプリケーションエラーはサーバーのメッセージをそのまま返す
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(e) => e.to_string(),
            Error::Network(_) => messages::CONNECTION_FAILED.to_string(),
            Error::Server { .. } | Error::Json(_) => messages::SERVER_RESPONSE_ERROR.to_string(),
            Error::Application(message) => message.clone(),
            Error::Clipboard(_) => messages::CLIPBOARD_FAILED.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_type_message() {
        let error = ValidationError::UnsupportedType {
            mime_type: "application/pdf".to_string(),
            allow_pdf: false,
        };
        assert_eq!(error.to_string(), "Solo se permiten archivos de imagen (JPG, PNG)");
    }

    #[test]
    fn test_validation_type_message_with_pdf() {
        let error = ValidationError::UnsupportedType {
            mime_type: "text/plain".to_string(),
            allow_pdf: true,
        };
        assert_eq!(error.to_string(), messages::TYPE_NOT_ALLOWED_WITH_PDF);
    }

    #[test]
    fn test_validation_size_message() {
        let error = ValidationError::TooLarge {
            size_bytes: 6 * 1024 * 1024,
            max_bytes: 5 * 1024 * 1024,
        };
        assert_eq!(error.to_string(), "El archivo no debe superar los 5MB");
    }

    #[test]
    fn test_user_message_network() {
        let error = Error::Network("connection refused".to_string());
        assert_eq!(error.user_message(), messages::CONNECTION_FAILED);
        assert_eq!(error.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_user_message_server() {
        let error = Error::Server { status: 502 };
        assert_eq!(error.user_message(), "Error en la respuesta del servidor");
        assert!(error.to_string().contains("502"));
    }

    #[test]
    fn test_user_message_application_passthrough() {
        let error = Error::Application("Comprobante ilegible".to_string());
        assert_eq!(error.user_message(), "Comprobante ilegible");
        assert_eq!(error.kind(), ErrorKind::Application);
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert_eq!(error.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_error_from_validation_is_transparent() {
        let error: Error = ValidationError::NoFile.into();
        assert_eq!(error.to_string(), messages::NO_FILE);
        assert_eq!(error.user_message(), messages::NO_FILE);
    }
}
