use async_trait::async_trait;
use common::error::Result;
use common::{ALL_USERS_PATH, ApiError, UsersApi, UsersPage};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::settings;

/// `UsersApi` backed by the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().api_base_url)
    }

    /// GET `endpoint` and decode the JSON body.
    ///
    /// Non-success responses surface the body's `message`/`error` field.
    async fn get<T>(&self, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("GET {} - Request failed: {}", endpoint, e);
                ApiError::from_cause(e)
            })?;

        if !response.ok() {
            log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_error_body(response.status(), &body));
        }

        log::trace!("GET {} - Response received, parsing JSON", endpoint);
        let data = response.json::<T>().await.map_err(|e| {
            log::error!("GET {} - Failed to parse response: {}", endpoint, e);
            ApiError::from_cause(e)
        })?;

        log::info!("GET {} - Success", endpoint);
        Ok(data)
    }
}

#[async_trait(?Send)]
impl UsersApi for HttpUsersApi {
    async fn fetch_users(&self) -> Result<UsersPage> {
        log::trace!("Fetching all users");
        let result = self.get::<UsersPage>(ALL_USERS_PATH).await;
        match &result {
            Ok(page) => log::info!("Fetched {} users (server count {})", page.users.len(), page.count),
            Err(e) => log::error!("Failed to fetch users: {}", e),
        }
        result
    }
}
