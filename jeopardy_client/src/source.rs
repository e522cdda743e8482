use std::time::Duration;

use async_trait::async_trait;
use jeopardy::{CategoryDetails, CategoryId, CategoryRef};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::DataFetchError;

/// Where categories and clues come from.
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Lists up to `count` candidate categories.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategoryRef>, DataFetchError>;

    /// Fetches the title and clues of one category.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetails, DataFetchError>;
}

/// A [`TriviaSource`] backed by the JSON API of a trivia service.
pub struct HttpSource {
    http: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DataFetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DataFetchError::Http {
                url: base_url.clone(),
                err,
            })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DataFetchError> {
        let url = format!("{}/{}", self.base_url, path);
        trace!(name: "Sending request", url = %url, ?query);
        let to_err = |err: reqwest::Error| {
            if err.is_decode() {
                DataFetchError::malformed(None, format!("{} returned undecodable JSON: {}", url, err))
            } else {
                DataFetchError::Http {
                    url: url.clone(),
                    err,
                }
            }
        };
        self.http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(to_err)?
            .error_for_status()
            .map_err(to_err)?
            .json()
            .await
            .map_err(to_err)
    }
}

#[async_trait]
impl TriviaSource for HttpSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategoryRef>, DataFetchError> {
        self.get_json("categories", &[("count", count.to_string())])
            .await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetails, DataFetchError> {
        self.get_json("category", &[("id", id.to_string())]).await
    }
}
