//! Image export: PNG encoding plus the download and clipboard sinks.
//!
//! The sinks are independent. A clipboard failure never touches the
//! download path and vice versa.

mod clipboard;
mod download;
mod encode;

pub use clipboard::{copy_to_clipboard, ClipboardHost, SystemClipboard};
pub use download::{card_filename, download};
pub use encode::{decode_data_uri, encode, EncodedImage};
