//! Networking modules for the to-do REST collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and `api` issues the four collection calls
//! (list, create, update, delete).

pub mod api;
pub mod types;
