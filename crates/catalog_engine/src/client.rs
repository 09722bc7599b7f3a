use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_warn};
use futures_util::future::try_join;
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{DiscoverBody, GenreListBody};
use crate::{CatalogRequest, CatalogResponse, FailureKind, FetchError, Genre, Movie};

const DISCOVER_PATH: &str = "discover/movie";
const ITEM_PATH: &str = "movie/";
const GENRES_PATH: &str = "genre/movie/list";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_key: String,
    /// Locale of the category list.
    pub language: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3/".to_string(),
            api_key: String::new(),
            language: "en-US".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Runs the item query and the category query and combines them.
    /// A failure of either one fails the whole call.
    async fn fetch_catalog(&self, request: &CatalogRequest) -> Result<CatalogResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    settings: ClientSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestCatalogClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    fn endpoint(&self, path: &str, params: &[(String, String)]) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.settings.api_key);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        // The query string carries the credential; only log the path.
        let path = url.path().to_string();
        catalog_debug!("GET {}", path);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            catalog_warn!("GET {} returned {}", path, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body).map_err(|err| {
            catalog_warn!("GET {} returned an undecodable body: {}", path, err);
            FetchError::new(FailureKind::Decode, err.to_string())
        })
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        let params = [("language".to_string(), self.settings.language.clone())];
        let url = self.endpoint(GENRES_PATH, &params)?;
        let body: GenreListBody = self.get_json(url).await?;
        Ok(body.genres)
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn fetch_catalog(&self, request: &CatalogRequest) -> Result<CatalogResponse, FetchError> {
        if let Some(item_id) = request.item_id {
            let url = self.endpoint(&format!("{ITEM_PATH}{item_id}"), &[])?;
            let (item, categories) =
                try_join(self.get_json::<Movie>(url), self.fetch_genres()).await?;
            return Ok(CatalogResponse::Single { item, categories });
        }

        let url = self.endpoint(DISCOVER_PATH, &request.list_params())?;
        let (body, categories) =
            try_join(self.get_json::<DiscoverBody>(url), self.fetch_genres()).await?;
        Ok(CatalogResponse::List {
            items: body.results,
            categories,
            total_pages: body.total_pages,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    // `Url::join` drops the last segment unless the base ends with a slash.
    let raw = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
