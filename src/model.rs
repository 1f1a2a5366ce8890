//! Response model for the Speech v3 recognition endpoints.

use serde::Deserialize;

use crate::error::Result;

/// Parsed result of a recognition call. Returned to the caller as-is; the
/// client has no further interest in it once the exchange completes.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechResponse {
    #[serde(rename = "Recognition")]
    pub recognition: Recognition,
}

/// The `Recognition` envelope: overall status plus n-best hypotheses.
#[derive(Debug, Clone, Deserialize)]
pub struct Recognition {
    #[serde(rename = "ResponseId")]
    pub response_id: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "NBest", default)]
    pub n_best: Vec<NBest>,
}

/// One recognition hypothesis with its confidence metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NBest {
    #[serde(rename = "Hypothesis")]
    pub hypothesis: Option<String>,
    #[serde(rename = "LanguageId")]
    pub language_id: Option<String>,
    #[serde(rename = "Confidence")]
    pub confidence: Option<f64>,
    #[serde(rename = "Grade")]
    pub grade: Option<String>,
    #[serde(rename = "ResultText")]
    pub result_text: Option<String>,
    #[serde(rename = "Words", default)]
    pub words: Vec<String>,
    #[serde(rename = "WordScores", default)]
    pub word_scores: Vec<f64>,
}

impl SpeechResponse {
    /// Parse a JSON response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Whether the service reported successful recognition.
    pub fn is_ok(&self) -> bool {
        self.recognition.status == "OK"
    }

    /// Hypothesis text of the first (highest-ranked) n-best entry.
    pub fn best_hypothesis(&self) -> Option<&str> {
        self.recognition
            .n_best
            .first()
            .and_then(|nbest| nbest.hypothesis.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognition_envelope() {
        let body = r#"{
            "Recognition": {
                "ResponseId": "abc123",
                "Status": "OK",
                "NBest": [{
                    "Hypothesis": "hello world",
                    "LanguageId": "en-US",
                    "Confidence": 0.92,
                    "Grade": "accept",
                    "ResultText": "hello world",
                    "Words": ["hello", "world"],
                    "WordScores": [0.95, 0.89]
                }]
            }
        }"#;

        let response = SpeechResponse::from_json(body).expect("valid body");
        assert!(response.is_ok());
        assert_eq!(response.best_hypothesis(), Some("hello world"));
        assert_eq!(response.recognition.response_id.as_deref(), Some("abc123"));
        assert_eq!(response.recognition.n_best[0].words.len(), 2);
    }

    #[test]
    fn tolerates_missing_nbest() {
        let body = r#"{"Recognition": {"Status": "Speech Not Recognized"}}"#;
        let response = SpeechResponse::from_json(body).expect("valid body");
        assert!(!response.is_ok());
        assert!(response.best_hypothesis().is_none());
    }
}
