use crate::config::ProviderConfig;
use crate::error::BasketError;
use crate::providers::MealPlanGenerator;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

pub struct AnthropicGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicGenerator {
    /// Create a new Anthropic generator from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, BasketError> {
        // Try config first, then fall back to environment variable
        let api_key = match config.api_key.clone() {
            Some(key) => key,
            None => std::env::var("ANTHROPIC_API_KEY")?,
        };

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(AnthropicGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        AnthropicGenerator {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            temperature: 0.7,
            max_tokens: 4000,
        }
    }
}

#[async_trait]
impl MealPlanGenerator for AnthropicGenerator {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String, BasketError> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["content"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                BasketError::GenerationError(
                    "Failed to extract text from Anthropic response".to_string(),
                )
            })?
            .to_string();

        Ok(content)
    }
}
