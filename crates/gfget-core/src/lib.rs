pub mod config;
pub mod logging;

pub mod download;
pub mod error;
pub mod http;
pub mod manifest;
pub mod skip;
pub mod workdir;

pub use download::{DownloadSummary, FontDownload};
pub use error::{Error, Result};
