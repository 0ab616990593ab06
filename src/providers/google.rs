use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Free Google Translate web endpoint (the one the translate widget uses)
const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Google Translate web endpoint
///
/// Stateless apart from the pooled HTTP client, so it can be shared freely
/// across worker tasks.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a new client with the default request timeout
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        Ok(GoogleTranslate { client })
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source_language),
                ("tl", target_language),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // The endpoint answers with nested positional arrays; the
        // translation is the concatenation of segment[0] over body[0].
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing segment array in response".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(piece);
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "no translated text in response".to_string(),
            ));
        }

        debug!(
            "Translated {} chars {} -> {}",
            text.len(),
            source_language,
            target_language
        );

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_translation(body: &Value) -> Option<String> {
        let segments = body.get(0)?.as_array()?;
        let text: String = segments
            .iter()
            .filter_map(|s| s.get(0).and_then(Value::as_str))
            .collect();
        Some(text)
    }

    #[test]
    fn test_response_shape_should_concatenate_segments() {
        // Shape returned by the endpoint for multi-sentence input
        let body: Value = serde_json::from_str(
            r#"[[["Hello world. ","Halo dunia. ",null,null,1],["Good morning","Selamat pagi",null,null,1]],null,"id"]"#,
        )
        .unwrap();
        assert_eq!(
            parse_translation(&body).unwrap(),
            "Hello world. Good morning"
        );
    }

    #[test]
    fn test_client_should_build() {
        assert!(GoogleTranslate::new().is_ok());
    }
}
