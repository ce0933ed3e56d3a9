//! Data models for the storefront.
//!
//! Shared structures passed between the page and the Rust core: cart lines,
//! the saved profile, catalog entries, measurement fields, order form input
//! and persisted settings.

pub mod cart;
pub mod catalog;
pub mod measurement;
pub mod order;
pub mod profile;
pub mod settings;
