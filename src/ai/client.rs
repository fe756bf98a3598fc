use crate::config::GatewayConfig;
use crate::error::GeoIntError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Boundary to the text-completion service.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Sends one system/user pair and returns the raw model text. Failures are
    /// returned as-is; implementations must not retry.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, GeoIntError>;

    fn model_name(&self) -> &str;
}

pub struct OpenAiClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: GatewayConfig) -> Result<Self, GeoIntError> {
        let config = config.validate()?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionGateway for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, GeoIntError> {
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let res = self
            .client
            .post(self.config.chat_completions_url())
            .bearer_auth(self.config.api_key.trim())
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error: {}", err_text);
            return Err(GeoIntError::UpstreamFailed(format!("API Error {status}: {err_text}")));
        }

        let parsed: ChatResponse = res.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GeoIntError::UpstreamFailed("No text content returned".into()))?;

        log::debug!("Raw completion: {}", text);
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAiClient {
        let config = GatewayConfig::new("sk-test").with_api_base(format!("{}/v1", server.uri()));
        OpenAiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn sends_model_temperature_and_both_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4",
                "temperature": 0.2,
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "usr" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "\"https://example/ows\"" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).complete("sys", "usr").await.unwrap();
        assert_eq!(text, "\"https://example/ows\"");
    }

    #[tokio::test]
    async fn error_status_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).complete("sys", "usr").await.unwrap_err();
        match err {
            GeoIntError::UpstreamFailed(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("rate limited"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server).complete("sys", "usr").await.unwrap_err();
        assert!(matches!(err, GeoIntError::UpstreamFailed(_)));
    }

    #[test]
    fn missing_api_key_rejected_at_construction() {
        assert!(OpenAiClient::new(GatewayConfig::new("")).is_err());
    }
}
