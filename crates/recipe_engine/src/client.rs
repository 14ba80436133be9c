use std::sync::Arc;

use recipe_core::{Recipe, RecipeStub};
use recipe_logging::recipe_info;
use url::Url;

use crate::{
    decode_text, parse_catalog, parse_recipe, FailureKind, FetchError, FetchSettings, Fetcher,
    ReqwestFetcher,
};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Absolute path of the directory page. Also the prefix of every stub url.
    pub catalog_path: String,
    pub fetch: FetchSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            catalog_path: "/recipes".to_string(),
            fetch: FetchSettings::default(),
        }
    }
}

/// Talks to the recipe server: the directory page and individual recipe documents.
#[derive(Clone)]
pub struct RecipeClient {
    base: Url,
    catalog_path: String,
    fetcher: Arc<dyn Fetcher>,
}

impl RecipeClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone())?);
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self, FetchError> {
        let base = Url::parse(&config.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self {
            base,
            catalog_path: config.catalog_path,
            fetcher,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET {catalog_path}` and parse it into stubs. No retry.
    pub async fn load_catalog(&self) -> Result<Vec<RecipeStub>, FetchError> {
        let url = self.resolve(&self.catalog_path)?;
        let output = self.fetcher.fetch(url.as_str()).await?;
        let decoded = decode_text(&output.bytes, output.content_type.as_deref())
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        let stubs = parse_catalog(&decoded.text, &self.catalog_path);
        recipe_info!("Found {} recipes at {}", stubs.len(), url);
        Ok(stubs)
    }

    /// `GET {path}` where `path` is a stub url, and parse the recipe document.
    pub async fn fetch_recipe(&self, path: &str) -> Result<Recipe, FetchError> {
        let url = self.resolve(path)?;
        let output = self.fetcher.fetch(url.as_str()).await?;
        parse_recipe(&output)
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}
