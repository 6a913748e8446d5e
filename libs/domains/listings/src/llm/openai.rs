use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::LlmProvider;
use crate::error::{ListingError, ListingResult};

/// OpenAI provider configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_chat_model(mut self, model: String) -> Self {
        self.chat_model = model;
        self
    }

    pub fn with_embedding_model(mut self, model: String) -> Self {
        self.embedding_model = model;
        self
    }

    pub fn from_env() -> ListingResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ListingError::Config("OPENAI_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("OPENAI_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        Ok(config)
    }
}

/// OpenAI chat-completion and embedding provider
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> ListingResult<Self> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
    encoding_format: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> ListingResult<String> {
        let request = ChatRequest {
            model: self.config.chat_model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            max_tokens: 400,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ListingError::Llm(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ListingError::Llm("No completion returned".to_string()))?;

        Ok(content.trim().to_string())
    }

    async fn embed(&self, text: &str) -> ListingResult<Vec<f32>> {
        let request = EmbeddingRequest {
            model: self.config.embedding_model.clone(),
            input: vec![text.to_string()],
            encoding_format: "float".to_string(),
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ListingError::Llm(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let embedding_response: EmbeddingResponse = response.json().await?;

        // Sort by index to maintain order
        let mut data = embedding_response.data;
        data.sort_by_key(|d| d.index);

        data.into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| ListingError::Llm("No embedding returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenAiProvider {
        let config = OpenAiConfig::new("test-key".to_string()).with_base_url(server.uri());
        OpenAiProvider::new(config)
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("key".to_string());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.chat_model, "gpt-4");
        assert_eq!(config.embedding_model, "text-embedding-3-small");
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4",
                "max_tokens": 400,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "  A lovely home.  "}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let text = provider
            .generate("You are a copywriter", "Write about this house")
            .await
            .unwrap();
        assert_eq!(text, "A lovely home.");
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider.generate("system", "user").await.unwrap_err();
        assert!(matches!(err, ListingError::Llm(_)));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_embed_returns_vector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .and(body_partial_json(serde_json::json!({
                "model": "text-embedding-3-small",
                "input": ["pool and garden"],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"embedding": [0.1, -0.2, 0.3], "index": 0}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let vector = provider.embed("pool and garden").await.unwrap();
        assert_eq!(vector, vec![0.1, -0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_embed_empty_data_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": []})),
            )
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        let err = provider.embed("anything").await.unwrap_err();
        assert!(matches!(err, ListingError::Llm(_)));
    }
}
