pub mod file_info;
pub mod file_preview;
pub mod header;
pub mod upload_area;
