//! バックエンドAPI

mod process_files;

pub use process_files::{build_form_data, error_text, send};
