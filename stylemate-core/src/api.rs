use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    ApiError, Config,
    model::{FormInput, HealthStatus, RecommendationSet, WeatherInfo},
};

pub mod http;

pub use http::HttpApi;

/// The three calls the recommendation page makes against the backend.
#[async_trait]
pub trait StyleApi: Send + Sync + Debug {
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// Current weather for a free-form location.
    async fn weather(&self, location: &str) -> Result<WeatherInfo, ApiError>;

    /// Outfit recommendations for the submitted form.
    async fn recommend(&self, form: &FormInput) -> Result<RecommendationSet, ApiError>;
}

/// Construct the HTTP client from config, optionally overriding the base URL.
pub fn api_from_config(config: &Config, base_url_override: Option<&str>) -> anyhow::Result<HttpApi> {
    let base_url = base_url_override.unwrap_or_else(|| config.api_base_url());
    let api = HttpApi::new(base_url)?;
    Ok(api)
}
