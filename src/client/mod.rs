//! 抽出サービス・クリップボードのCLI実装

mod clipboard;
mod http;

pub use clipboard::{SystemClipboard, SERVES_SELECTION};
pub use http::HttpVoucherApi;
