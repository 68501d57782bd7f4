//! Voucher Reader Common Library
//!
//! CLIとWeb(WASM)で共有される型・検証・アップロードセッション

pub mod api;
pub mod error;
pub mod extract;
pub mod messages;
pub mod parser;
pub mod persist;
pub mod preview;
pub mod session;
pub mod types;
pub mod validation;

#[cfg(test)]
mod testing;

pub use api::{ClipboardWriter, Endpoints, VoucherApi, DEFAULT_BASE_URL, UPLOAD_FIELD};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use extract::{extract_with_retry, ExtractOutcome, MAX_EXTRACT_ATTEMPTS};
pub use parser::{parse_save_response, parse_upload_response, SaveResponse, UploadResponse};
pub use persist::{save_fields, SaveOutcome};
pub use preview::PreviewKind;
pub use session::{ErrorSlot, ExtractionRequest, Phase, UploadSession};
pub use types::{ExtractionResult, SelectedFile};
pub use validation::{format_size_limit, AcceptPolicy, MAX_FILE_SIZE_BYTES};
