mod voucher;

pub use voucher::{FetchVoucherApi, NavigatorClipboard};
