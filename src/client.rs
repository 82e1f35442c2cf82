// src/client.rs
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Client for one request context against the remote store.
///
/// Built from the shared config plus the caller's token, used for the
/// handful of round trips that context needs, then dropped. The token is
/// opaque here; the store's access policy interprets it.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl StoreClient {
    pub fn new(config: &StoreConfig, token: &str) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            token: token.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Read rows from `table` with a fixed nested selection and optional
    /// filter predicates.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, StoreError> {
        trace!("select from {} with {} predicates", table, params.len());
        let request = self
            .http
            .get(self.table_url(table))
            .query(&[("select", select)])
            .query(params);
        self.send(request).await
    }

    /// Insert a single row and return the created representation.
    pub(crate) async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        payload: &B,
    ) -> Result<Vec<T>, StoreError> {
        trace!("insert into {}", table);
        let request = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&[payload]);
        self.send(request).await
    }

    /// Patch rows matching `params` and return the updated representation.
    pub(crate) async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        params: &[(String, String)],
        patch: &B,
    ) -> Result<Vec<T>, StoreError> {
        trace!("update {} with {} predicates", table, params.len());
        let request = self
            .http
            .patch(self.table_url(table))
            .query(params)
            .header("Prefer", "return=representation")
            .json(patch);
        self.send(request).await
    }

    /// Delete rows matching `params` and return the deleted representation.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, StoreError> {
        trace!("delete from {} with {} predicates", table, params.len());
        let request = self
            .http
            .delete(self.table_url(table))
            .query(params)
            .header("Prefer", "return=representation");
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, StoreError> {
        let response = request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<Vec<T>>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::from_status(status, &body))
        }
    }
}
