use std::time::Duration;

use futures_util::StreamExt;
use recipe_logging::recipe_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::{FailureKind, FetchError, FetchOutput};

/// Recipe documents first, directory markup second.
const ACCEPT_VALUE: &str = "application/json, text/html;q=0.9, */*;q=0.5";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
                "application/json".to_string(),
                "text/plain".to_string(),
            ],
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

/// One pooled HTTP client shared by every directory and recipe request.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    max_bytes: u64,
    allowed_content_types: Vec<String>,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            max_bytes: settings.max_bytes,
            allowed_content_types: settings.allowed_content_types,
        })
    }

    fn check_content_type(&self, content_type: &str) -> Result<(), FetchError> {
        let essence = content_type.split(';').next().unwrap_or(content_type).trim();
        if self
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(essence))
        {
            return Ok(());
        }
        Err(FetchError::new(
            FailureKind::UnsupportedContentType {
                content_type: content_type.to_string(),
            },
            "unsupported content type",
        ))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }

    async fn read_capped(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let len = body.len() as u64 + chunk.len() as u64;
            if len > self.max_bytes {
                return Err(self.too_large(len));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        recipe_debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .header(ACCEPT, ACCEPT_VALUE)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes {
                return Err(self.too_large(declared));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        if let Some(content_type) = content_type.as_deref() {
            self.check_content_type(content_type)?;
        }

        let bytes = self.read_capped(response).await?;
        recipe_debug!("GET {} -> {} bytes", url, bytes.len());
        Ok(FetchOutput {
            bytes,
            content_type,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
