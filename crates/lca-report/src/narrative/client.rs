//! OpenAI-compatible chat-completion client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompletionError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for a `/chat/completions` endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: Option<String>,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .build()
            .map_err(|e| CompletionError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Send one completion request and return the first choice's text
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Completion request to {} with model {}", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status.as_u16() {
                401 => CompletionError::AuthFailed(body),
                404 => CompletionError::ModelNotFound(body),
                429 => CompletionError::RateLimited(body),
                code => CompletionError::Status { status: code, body },
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::InvalidResponse("No content in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CompletionClient {
        CompletionClient::new("sk-test", DEFAULT_MODEL, Some(format!("{}/v1/", server.uri())))
            .unwrap()
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let msg = ChatMessage::system("hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"role": "system", "content": "hi"})
        );
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({"model": "gpt-4-turbo", "temperature": 0.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "First"}},
                    {"index": 1, "message": {"role": "assistant", "content": "Second"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let text = client
            .complete(&[ChatMessage::user("Write")], 0.5)
            .await
            .unwrap();

        assert_eq!(text, "First");
    }

    #[tokio::test]
    async fn test_status_codes_map_to_variants() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .complete(&[ChatMessage::user("Write")], 0.7)
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::RateLimited(ref body) if body == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .complete(&[ChatMessage::user("Write")], 0.7)
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::InvalidResponse(_)));
    }
}
