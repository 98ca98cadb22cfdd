//! Build-time client configuration.
//!
//! DESIGN
//! ======
//! The collection endpoint is fixed when the WASM bundle is built. Values are
//! read with `option_env!` so a plain `trunk build` gets working defaults and
//! deployments can override them without any runtime discovery.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the remote to-do collection.
pub const API_BASE_URL: &str = match option_env!("TODO_API_URL") {
    Some(url) => url,
    None => "http://localhost:5026/todos",
};

/// Stylesheet linked from the document head.
pub const STYLESHEET_URL: &str = match option_env!("TODO_STYLESHEET_URL") {
    Some(url) => url,
    None => "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css",
};

/// Collection URL with any trailing slash removed.
pub fn collection_endpoint(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// URL of a single item inside the collection.
pub fn item_endpoint(base: &str, id: &impl std::fmt::Display) -> String {
    format!("{}/{id}", collection_endpoint(base))
}
