//! Multipart body construction for the custom recognition endpoint.

use uuid::Uuid;

/// One named part of a multipart request body: a pronunciation dictionary,
/// a grammar, or the audio payload itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartSegment {
    pub name: String,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl MultipartSegment {
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// Generate a random numeric boundary token.
///
/// Collisions with part contents are not checked; acceptable for
/// non-adversarial payloads.
pub(super) fn generate_boundary() -> String {
    Uuid::new_v4().as_u128().to_string()
}

/// Encode segments into a single multipart body with the given boundary.
///
/// Each part carries a `Content-Disposition` with its name and filename plus
/// a `Content-Type`; parts are emitted in slice order.
pub fn encode_multipart(boundary: &str, segments: &[MultipartSegment]) -> Vec<u8> {
    let payload_len: usize = segments.iter().map(|segment| segment.data.len()).sum();
    let mut body = Vec::with_capacity(payload_len + segments.len() * 256);

    for segment in segments {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                segment.name, segment.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", segment.content_type).as_bytes());
        body.extend_from_slice(&segment.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, filename: &str, content_type: &str, data: &[u8]) -> MultipartSegment {
        MultipartSegment::new(name, filename, content_type, data.to_vec())
    }

    /// Minimal multipart parse: (disposition line, content-type line, payload)
    /// per part.
    fn parse_multipart(boundary: &str, body: &[u8]) -> Vec<(String, String, Vec<u8>)> {
        let text = body.to_vec();
        let delimiter = format!("--{boundary}\r\n").into_bytes();
        let terminator = format!("--{boundary}--\r\n").into_bytes();

        assert!(text.ends_with(&terminator), "missing terminator");
        let inner = &text[..text.len() - terminator.len()];

        let mut parts = Vec::new();
        let mut rest = inner;
        while !rest.is_empty() {
            assert!(rest.starts_with(&delimiter), "missing part delimiter");
            rest = &rest[delimiter.len()..];

            let header_end = rest
                .windows(4)
                .position(|w| w == b"\r\n\r\n")
                .expect("missing header terminator");
            let headers = String::from_utf8(rest[..header_end].to_vec()).expect("utf-8 headers");
            let mut lines = headers.lines();
            let disposition = lines.next().expect("disposition line").to_string();
            let content_type = lines.next().expect("content-type line").to_string();

            rest = &rest[header_end + 4..];
            let payload_end = next_boundary_offset(rest, &delimiter);
            parts.push((disposition, content_type, rest[..payload_end].to_vec()));
            rest = &rest[payload_end + 2..];
        }
        parts
    }

    fn next_boundary_offset(rest: &[u8], delimiter: &[u8]) -> usize {
        let mut offset = 0;
        while offset + 2 <= rest.len() {
            if rest[offset..].starts_with(b"\r\n")
                && (rest[offset + 2..].starts_with(delimiter) || rest.len() == offset + 2)
            {
                return offset;
            }
            offset += 1;
        }
        panic!("payload not terminated by boundary");
    }

    #[test]
    fn boundary_is_numeric() {
        let boundary = generate_boundary();
        assert!(!boundary.is_empty());
        assert!(boundary.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn single_segment_body_round_trips() {
        let audio = segment("x-voice", "clip.wav", "audio/wav; charset=\"binary\"", b"RIFFdata");
        let body = encode_multipart("12345", &[audio]);

        let parts = parse_multipart("12345", &body);
        assert_eq!(parts.len(), 1);
        assert_eq!(
            parts[0].0,
            "Content-Disposition: form-data; name=\"x-voice\"; filename=\"clip.wav\""
        );
        assert_eq!(parts[0].1, "Content-Type: audio/wav; charset=\"binary\"");
        assert_eq!(parts[0].2, b"RIFFdata");
    }

    #[test]
    fn segments_encode_in_slice_order() {
        let segments = [
            segment("x-dictionary", "words.pls", "application/pls+xml", b"<lexicon/>"),
            segment("x-grammar", "menu.srgs", "application/srgs+xml", b"<grammar/>"),
            segment("x-voice", "clip.amr", "audio/amr; charset=\"binary\"", &[0x23, 0x21, 0x00]),
        ];
        let body = encode_multipart("987654", &segments);

        let parts = parse_multipart("987654", &body);
        assert_eq!(parts.len(), 3);
        for (part, expected) in parts.iter().zip(&segments) {
            assert!(part.0.contains(&format!("name=\"{}\"", expected.name)));
            assert!(part.0.contains(&format!("filename=\"{}\"", expected.filename)));
            assert_eq!(part.1, format!("Content-Type: {}", expected.content_type));
            assert_eq!(part.2, expected.data);
        }
    }

    #[test]
    fn binary_payload_bytes_survive_encoding() {
        let data: Vec<u8> = (0_u16..=255).map(|b| b as u8).collect();
        let audio = segment("x-voice", "clip.raw", "application/octet-stream", &data);
        let body = encode_multipart("42", &[audio]);

        let parts = parse_multipart("42", &body);
        assert_eq!(parts[0].2, data);
    }
}
