//! codekit-speech — client for the Speech v3 speech-to-text web API.
//!
//! Wraps the `speechToText` and `speechToTextCustom` endpoints: reads audio
//! (plus optional pronunciation-dictionary and SRGS-grammar) files, builds the
//! request headers and multipart body, and parses the JSON response into a
//! [`SpeechResponse`].
//!
//! # Quick Start
//!
//! ```no_run
//! use codekit_speech::{CloudConfig, SpeechClient, StandardOptions};
//!
//! # async fn example() -> codekit_speech::Result<()> {
//! let config = CloudConfig::new("https://api.att.com", "oauth-access-token");
//! let client = SpeechClient::new(config);
//! let response = client
//!     .standard_speech_to_text("clip.wav", &StandardOptions::default())
//!     .await?;
//! println!("{:?}", response.best_hypothesis());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod http;
pub mod model;
pub mod speech;

pub use config::CloudConfig;
pub use error::{Result, SpeechError};
pub use model::{NBest, Recognition, SpeechResponse};
pub use speech::{CustomOptions, MultipartSegment, SpeechClient, SpeechToText, StandardOptions};
