use thiserror::Error;

/// Errors that can occur while building shopping lists or generating meal plans
#[derive(Error, Debug)]
pub enum BasketError {
    /// HTTP request to a generation provider failed
    #[error("Failed to reach provider: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Provider answered but no usable text came back
    #[error("Meal plan generation failed: {0}")]
    GenerationError(String),

    /// Provider could not be created from configuration
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Price table file could not be understood
    #[error("Invalid price table: {0}")]
    PriceTableError(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
