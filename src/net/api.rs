//! REST bindings for the to-do collection.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native build: `HttpTodoApi` returns `ApiError::Unavailable` so state and
//! controller code compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers decide which failures are
//! user-facing; this layer only classifies them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{TodoId, TodoItem, TodoPayload};
use crate::config;

/// Failure of a single collection call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{}", rejected_message(*.status, .body))]
    Rejected { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown to the user when a mutation fails.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn rejected_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("request failed: {status}")
    } else {
        body.to_owned()
    }
}

/// The four operations the view needs from the remote collection.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// `GET {base}`: the full collection in server order.
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError>;

    /// `POST {base}`: any OK-class status is success.
    async fn create(&self, payload: &TodoPayload) -> Result<(), ApiError>;

    /// `PUT {base}/{id}`: any OK-class status is success.
    async fn update(&self, id: &TodoId, payload: &TodoPayload) -> Result<(), ApiError>;

    /// `DELETE {base}/{id}`: the response status is not inspected.
    async fn delete(&self, id: &TodoId) -> Result<(), ApiError>;
}

/// `TodoApi` over the browser `fetch` API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTodoApi {
    base_url: String,
}

impl Default for HttpTodoApi {
    fn default() -> Self {
        Self::new(config::API_BASE_URL)
    }
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn collection_url(&self) -> &str {
        config::collection_endpoint(&self.base_url)
    }

    pub fn item_url(&self, id: &TodoId) -> String {
        config::item_endpoint(&self.base_url, id)
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    log::warn!("{} rejected with status {status}", resp.url());
    let body = resp.text().await.unwrap_or_default();
    ApiError::Rejected { status, body }
}

impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(self.collection_url())
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            resp.json::<Vec<TodoItem>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, payload: &TodoPayload) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(self.collection_url())
                .json(payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: &TodoId, payload: &TodoPayload) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.item_url(id);
            let resp = gloo_net::http::Request::put(&url)
                .json(payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(rejection(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.item_url(id);
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                log::debug!("DELETE {url} returned {}", resp.status());
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}
