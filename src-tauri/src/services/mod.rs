//! Business logic layer.
//!
//! Stores (cart, profile), the catalog index, the measurement schema and the
//! order submission state machine, plus the render step and the page session
//! that ties them together. Called by the `commands` layer; delegates
//! persistence to the `storage` layer.

pub mod cart;
pub mod catalog;
pub mod measurement;
pub mod order;
pub mod profile;
pub mod render;
pub mod session;
