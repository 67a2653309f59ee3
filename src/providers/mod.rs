mod anthropic;
mod factory;
mod open_ai;

pub use anthropic::AnthropicGenerator;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIGenerator;

use async_trait::async_trait;

use crate::error::BasketError;

/// Narrow seam over any text-generation vendor: prompt in, text out.
///
/// Failures are surfaced as-is; implementations do not retry.
#[async_trait]
pub trait MealPlanGenerator: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Generate meal plan text for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, BasketError>;
}
