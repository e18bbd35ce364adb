//! Application layer - Use cases that coordinate domain services.
//!
//! This layer orchestrates the flow of data between the CLI layer, platform
//! detection, the release source and the presentation sink.

mod download_page;

pub use download_page::{DownloadPageAction, PrimaryView};
