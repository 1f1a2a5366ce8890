//! Request options for the two recognition flows and the convenience
//! dispatch request.

use std::path::PathBuf;

/// Options for [`standard_speech_to_text`](crate::SpeechClient::standard_speech_to_text).
#[derive(Debug, Clone)]
pub struct StandardOptions {
    /// Custom decoding arguments, percent-encoded into the `X-Arg` header.
    pub x_args: String,
    /// Mark the transfer as chunked via `Content-Transfer-Encoding`. Header
    /// only; actual transport framing is unchanged.
    pub chunked: bool,
    /// Service-side recognition context hint.
    pub speech_context: String,
    /// Sub-context, honored only when the context is `"Gaming"`.
    pub speech_sub_context: Option<String>,
    pub content_language: Option<String>,
}

impl Default for StandardOptions {
    fn default() -> Self {
        Self {
            x_args: String::new(),
            chunked: false,
            speech_context: "Generic".to_string(),
            speech_sub_context: None,
            content_language: None,
        }
    }
}

impl StandardOptions {
    pub fn with_x_args(mut self, x_args: impl Into<String>) -> Self {
        self.x_args = x_args.into();
        self
    }

    pub fn with_chunked(mut self, chunked: bool) -> Self {
        self.chunked = chunked;
        self
    }

    pub fn with_speech_context(mut self, speech_context: impl Into<String>) -> Self {
        self.speech_context = speech_context.into();
        self
    }

    pub fn with_speech_sub_context(mut self, sub_context: impl Into<String>) -> Self {
        self.speech_sub_context = Some(sub_context.into());
        self
    }

    pub fn with_content_language(mut self, language: impl Into<String>) -> Self {
        self.content_language = Some(language.into());
        self
    }
}

/// Options for [`custom_speech_to_text`](crate::SpeechClient::custom_speech_to_text).
#[derive(Debug, Clone)]
pub struct CustomOptions {
    pub speech_context: String,
    /// Part name used for the grammar segment.
    pub grammar_type: String,
    pub x_args: String,
    pub content_language: Option<String>,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            speech_context: "GenericHints".to_string(),
            grammar_type: "x-grammar".to_string(),
            x_args: String::new(),
            content_language: None,
        }
    }
}

impl CustomOptions {
    pub fn with_speech_context(mut self, speech_context: impl Into<String>) -> Self {
        self.speech_context = speech_context.into();
        self
    }

    pub fn with_grammar_type(mut self, grammar_type: impl Into<String>) -> Self {
        self.grammar_type = grammar_type.into();
        self
    }

    pub fn with_x_args(mut self, x_args: impl Into<String>) -> Self {
        self.x_args = x_args.into();
        self
    }

    pub fn with_content_language(mut self, language: impl Into<String>) -> Self {
        self.content_language = Some(language.into());
        self
    }
}

/// Convenience request resolved by [`speech_to_text`](crate::SpeechClient::speech_to_text)
/// onto the matching flow. The two flows remain directly callable; this is a
/// thin router, not an independent contract.
#[derive(Debug, Clone)]
pub enum SpeechToText {
    Standard {
        audio: PathBuf,
        options: StandardOptions,
    },
    Custom {
        audio: PathBuf,
        dictionary: Option<PathBuf>,
        grammar: Option<PathBuf>,
        options: CustomOptions,
    },
}
