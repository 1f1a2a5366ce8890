//! Speech-to-text client for the Speech v3 endpoints.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use super::mime::audio_mime_for_path;
use super::multipart::{encode_multipart, generate_boundary, MultipartSegment};
use super::types::{CustomOptions, SpeechToText, StandardOptions};
use crate::config::CloudConfig;
use crate::error::{Result, SpeechError};
use crate::http::{bearer_headers, shared_client};
use crate::model::SpeechResponse;

const STANDARD_SERVICE_URL: &str = "/speech/v3/speechToText";
const CUSTOM_SERVICE_URL: &str = "/speech/v3/speechToTextCustom";

const DICTIONARY_PART_NAME: &str = "x-dictionary";
const AUDIO_PART_NAME: &str = "x-voice";
const DICTIONARY_CONTENT_TYPE: &str = "application/pls+xml";
const GRAMMAR_CONTENT_TYPE: &str = "application/srgs+xml";

/// Characters percent-encoded in the `X-Arg` header value (URI unsafe set).
const X_ARG_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Client for the standard and custom recognition operations.
///
/// Holds only immutable configuration; concurrent calls share the
/// process-wide connection pool and need no locking. Each call is one
/// stateless request/response exchange with no retries.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    config: CloudConfig,
}

impl SpeechClient {
    pub fn new(config: CloudConfig) -> Self {
        Self { config }
    }

    /// Resolve a [`SpeechToText`] request onto the matching flow.
    pub async fn speech_to_text(&self, request: SpeechToText) -> Result<SpeechResponse> {
        match request {
            SpeechToText::Standard { audio, options } => {
                self.standard_speech_to_text(&audio, &options).await
            }
            SpeechToText::Custom {
                audio,
                dictionary,
                grammar,
                options,
            } => {
                self.custom_speech_to_text(&audio, dictionary.as_deref(), grammar.as_deref(), &options)
                    .await
            }
        }
    }

    /// Submit an audio file for recognition (`speechToText`).
    ///
    /// The file is read fully into memory and posted as the raw request body
    /// with its MIME type resolved from the extension.
    pub async fn standard_speech_to_text(
        &self,
        audio: impl AsRef<Path>,
        options: &StandardOptions,
    ) -> Result<SpeechResponse> {
        let audio = audio.as_ref();
        let contents = read_file(audio).await?;
        let mime = audio_mime_for_path(audio);

        let mut headers = bearer_headers(self.config.access_token());
        insert_header(&mut headers, "X-Arg", &escape_x_args(&options.x_args))?;
        insert_header(&mut headers, "X-SpeechContext", &options.speech_context)?;
        insert_header(&mut headers, "Content-Type", mime)?;
        if let Some(language) = &options.content_language {
            insert_header(&mut headers, "Content-Language", language)?;
        }
        // Sub-context is a Gaming-only extension point; dropped silently for
        // every other context.
        if options.speech_context == "Gaming" {
            if let Some(sub_context) = &options.speech_sub_context {
                insert_header(&mut headers, "X-SpeechSubContext", sub_context)?;
            }
        }
        if options.chunked {
            insert_header(&mut headers, "Content-Transfer-Encoding", "chunked")?;
        }

        let url = format!("{}{STANDARD_SERVICE_URL}", self.config.base_url());
        debug!(
            url = url.as_str(),
            context = options.speech_context.as_str(),
            mime,
            "standard speechToText"
        );
        self.post(&url, headers, contents).await
    }

    /// Submit an audio file plus optional dictionary and grammar constraint
    /// files for recognition (`speechToTextCustom`).
    ///
    /// Present parts are encoded into one multipart body in the order
    /// dictionary, grammar, audio; absent parts are omitted entirely.
    pub async fn custom_speech_to_text(
        &self,
        audio: impl AsRef<Path>,
        dictionary: Option<&Path>,
        grammar: Option<&Path>,
        options: &CustomOptions,
    ) -> Result<SpeechResponse> {
        let audio = audio.as_ref();
        let segments =
            build_custom_segments(audio, dictionary, grammar, &options.grammar_type).await?;

        let boundary = generate_boundary();
        let body = encode_multipart(&boundary, &segments);

        let mut headers = bearer_headers(self.config.access_token());
        insert_header(&mut headers, "X-Arg", &escape_x_args(&options.x_args))?;
        insert_header(&mut headers, "X-SpeechContext", &options.speech_context)?;
        insert_header(
            &mut headers,
            "Content-Type",
            &format!("multipart/x-srgs-audio; boundary=\"{boundary}\""),
        )?;
        if let Some(language) = &options.content_language {
            insert_header(&mut headers, "Content-Language", language)?;
        }

        let url = format!("{}{CUSTOM_SERVICE_URL}", self.config.base_url());
        debug!(
            url = url.as_str(),
            context = options.speech_context.as_str(),
            parts = segments.len(),
            "custom speechToText"
        );
        self.post(&url, headers, body).await
    }

    /// Issue the POST and normalize the outcome: non-success statuses and
    /// connection failures both become [`SpeechError::Service`].
    async fn post(&self, url: &str, headers: HeaderMap, body: Vec<u8>) -> Result<SpeechResponse> {
        let response = shared_client()
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(SpeechError::service_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(SpeechError::service_transport)?;
        if !status.is_success() {
            return Err(SpeechError::service_status(status.as_u16(), body));
        }

        SpeechResponse::from_json(&body)
    }
}

/// Build the multipart segments for the custom flow, keeping the fixed
/// dictionary, grammar, audio order.
async fn build_custom_segments(
    audio: &Path,
    dictionary: Option<&Path>,
    grammar: Option<&Path>,
    grammar_type: &str,
) -> Result<Vec<MultipartSegment>> {
    let mut segments = Vec::with_capacity(3);

    if let Some(path) = dictionary {
        segments.push(MultipartSegment::new(
            DICTIONARY_PART_NAME,
            base_name(path),
            DICTIONARY_CONTENT_TYPE,
            read_file(path).await?,
        ));
    }
    if let Some(path) = grammar {
        segments.push(MultipartSegment::new(
            grammar_type,
            base_name(path),
            GRAMMAR_CONTENT_TYPE,
            read_file(path).await?,
        ));
    }

    let mime = audio_mime_for_path(audio);
    segments.push(MultipartSegment::new(
        AUDIO_PART_NAME,
        base_name(audio),
        format!("{mime}; charset=\"binary\""),
        read_file(audio).await?,
    ));

    Ok(segments)
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .map_err(|source| SpeechError::file_access(path, source))
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn escape_x_args(x_args: &str) -> String {
    utf8_percent_encode(x_args, X_ARG_ESCAPE).to_string()
}

fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| SpeechError::InvalidArgument(format!("invalid value for {name} header")))?;
    headers.insert(name, value);
    Ok(())
}
