use crate::config::get_config;
use crate::constants::{COACH_INSTRUCTION, GEMINI_API_BASE};
use crate::errors::{KarirError, KarirResult};
use crate::models::{Message, Role};
use log::info;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub content: String,
    pub usage: Option<TokenUsage>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_output_tokens: u32,
    temperature: f32,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GeminiClient {
    pub fn from_config() -> Self {
        let config = get_config();
        GeminiClient {
            http: reqwest::Client::new(),
            base_url: GEMINI_API_BASE.to_string(),
            api_key: config.api_key,
            model: config.model,
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }

    /// Points the client at a different endpoint. Used by the tests to target
    /// a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Maps the prior conversation onto Gemini `contents` and appends the
    /// prefixed question as the final user turn. The raw question is what the
    /// caller keeps in its message list; the prefix only travels on the wire.
    fn build_request_body(&self, history: &[Message], question: &str) -> Value {
        let mut contents: Vec<Value> = history
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                json!({
                    "role": role,
                    "parts": [{ "text": m.content }]
                })
            })
            .collect();

        contents.push(json!({
            "role": "user",
            "parts": [{ "text": format!("{}{}", COACH_INSTRUCTION, question) }]
        }));

        json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.max_output_tokens,
                "temperature": self.temperature,
            }
        })
    }

    /// Sends one constrained-topic completion request and returns the
    /// assistant's reply as literal text.
    pub async fn generate(&self, history: &[Message], question: &str) -> KarirResult<ApiResponse> {
        let payload = self.build_request_body(history, question);
        let url = self.api_url();
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| KarirError::api_error(format!("request failed: {}", e)))?;

        let status = response.status();
        info!(
            "POST {} -> {} ({}ms)",
            url,
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(KarirError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| KarirError::api_error(format!("failed to parse API response: {}", e)))?;

        if let Some(error) = body["error"].as_object() {
            return Err(KarirError::api_error(format!(
                "{}: {}",
                error.get("status").and_then(|v| v.as_str()).unwrap_or("unknown"),
                error.get("message").and_then(|v| v.as_str()).unwrap_or("no message")
            )));
        }

        let parts = body["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| KarirError::api_error("response missing expected content"))?;

        let mut content = String::new();
        for part in parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        if content.is_empty() {
            return Err(KarirError::api_error("empty response from API"));
        }

        let usage = if let (Some(input), Some(output)) = (
            body["usageMetadata"]["promptTokenCount"].as_u64(),
            body["usageMetadata"]["candidatesTokenCount"].as_u64(),
        ) {
            Some(TokenUsage {
                input_tokens: input,
                output_tokens: output,
            })
        } else {
            None
        };

        Ok(ApiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
        }
    }

    fn success_body(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                }
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 34
            }
        })
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Halo!")))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let response = client.generate(&[], "Tips interview?").await.unwrap();

        assert_eq!(response.content, "Halo!");
        let usage = response.usage.unwrap();
        assert_eq!(usage.input_tokens, 12);
        assert_eq!(usage.output_tokens, 34);
    }

    #[tokio::test]
    async fn test_request_carries_prefix_and_bounded_output() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Oke")))
            .mount(&mock_server)
            .await;

        let history = vec![
            Message::user("Halo"),
            Message::assistant("Halo juga! Ada yang bisa dibantu?"),
        ];
        let client = test_client(&mock_server.uri());
        client.generate(&history, "Tips interview?").await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: Value = requests[0].body_json().unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");

        let final_turn = contents[2]["parts"][0]["text"].as_str().unwrap();
        assert!(final_turn.starts_with(COACH_INSTRUCTION));
        assert!(final_turn.ends_with("Tips interview?"));

        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1000);
    }

    #[tokio::test]
    async fn test_generate_http_error_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.generate(&[], "Halo").await.unwrap_err();
        assert!(matches!(err, KarirError::Api(_)));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_generate_error_object_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {
                    "status": "INVALID_ARGUMENT",
                    "message": "API key not valid"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.generate(&[], "Halo").await.unwrap_err();
        assert!(err.to_string().contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_generate_missing_content_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert!(client.generate(&[], "Halo").await.is_err());
    }
}
