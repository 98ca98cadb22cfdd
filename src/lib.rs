//! # todo-client
//!
//! Leptos + WASM to-do list client for a remote `/todos` REST collection.
//!
//! This crate contains the page, view state, effect controller, and HTTP
//! bindings. Everything except DOM wiring and the `gloo-net` transport builds
//! natively so state transitions can be unit tested without a browser.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
