use crate::config::ProviderConfig;
use crate::error::BasketError;
use crate::providers::MealPlanGenerator;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

pub struct OpenAIGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl OpenAIGenerator {
    /// Create a new OpenAI generator from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, BasketError> {
        // Try config first, then fall back to environment variable
        let api_key = match config.api_key.clone() {
            Some(key) => key,
            None => std::env::var("OPENAI_API_KEY")?,
        };

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(OpenAIGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: Some(config.max_tokens),
        })
    }

    /// Create a generator with just a credential: `gpt-4o` at temperature 0.7
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    #[doc(hidden)]
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        OpenAIGenerator {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

#[async_trait]
impl MealPlanGenerator for OpenAIGenerator {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, BasketError> {
        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": self.temperature
        });
        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                BasketError::GenerationError(
                    "Failed to extract content from response".to_string(),
                )
            })?
            .to_string();

        Ok(content)
    }
}
