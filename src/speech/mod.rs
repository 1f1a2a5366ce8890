//! Speech-to-text operations: standard and custom recognition.

pub mod client;
mod mime;
pub mod multipart;
pub mod types;

pub use client::SpeechClient;
pub use multipart::MultipartSegment;
pub use types::{CustomOptions, SpeechToText, StandardOptions};
