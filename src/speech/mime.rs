//! Audio MIME type resolution from file extensions.

use std::path::Path;

const DEFAULT_MIME: &str = "application/octet-stream";

/// Resolve the audio MIME type from a file extension.
///
/// Unknown or missing extensions fall back to `application/octet-stream`;
/// the service sniffs the payload in that case.
pub(super) fn audio_mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "amr" => "audio/amr",
        "awb" => "audio/amr-wb",
        "wav" => "audio/wav",
        "spx" => "audio/x-speex",
        "ogg" => "audio/ogg",
        "oga" => "audio/ogg",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/x-m4a",
        "webm" => "audio/webm",
        "flac" => "audio/flac",
        _ => DEFAULT_MIME,
    }
}
