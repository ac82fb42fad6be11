use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::{
    ApiError,
    model::{FormInput, HealthStatus, RecommendationSet, WeatherInfo},
};

use super::StyleApi;

/// `StyleApi` over HTTP/JSON.
///
/// No timeout or retry is configured; a slow call simply keeps the page in its
/// loading state until it resolves.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: Client,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Validate an API root and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let invalid = |reason: String| ApiError::InvalidUrl { url: raw.to_string(), reason };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[derive(Debug, Serialize)]
struct WeatherRequest<'a> {
    location: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    recommendations: Option<RecommendationSet>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl StyleApi for HttpApi {
    #[instrument(skip(self), level = "debug")]
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let res = self.http.get(self.endpoint("health")).send().await?;
        let (status, body) = read_body(res).await?;

        decode(status, &body)
    }

    #[instrument(skip(self), level = "debug")]
    async fn weather(&self, location: &str) -> Result<WeatherInfo, ApiError> {
        let res = self
            .http
            .post(self.endpoint("weather"))
            .json(&WeatherRequest { location })
            .send()
            .await?;
        let (status, body) = read_body(res).await?;

        let envelope: Envelope = decode(status, &body)?;
        if !envelope.success {
            return Err(ApiError::Rejected { message: envelope.error });
        }

        Ok(serde_json::from_str(&body)?)
    }

    #[instrument(skip(self, form), fields(location = %form.location), level = "debug")]
    async fn recommend(&self, form: &FormInput) -> Result<RecommendationSet, ApiError> {
        let res = self.http.post(self.endpoint("recommend")).json(form).send().await?;
        let (status, body) = read_body(res).await?;

        let parsed: RecommendResponse = decode(status, &body)?;
        if !parsed.success {
            return Err(ApiError::Rejected { message: parsed.error });
        }

        parsed.recommendations.ok_or(ApiError::MissingField("recommendations"))
    }
}

async fn read_body(res: Response) -> Result<(StatusCode, String), ApiError> {
    let status = res.status();
    let body = res.text().await?;
    Ok((status, body))
}

/// Decode a JSON body whatever the status, so a server that reports
/// `success: false` with a 4xx still gets its message through. Only an
/// undecodable body turns a non-2xx status into an error.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        }),
        Err(err) => Err(ApiError::Decode(err)),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
