//! Shared types and models for the AgriSmart advisory platform
//!
//! This crate contains types shared between the backend and any future
//! clients of the API.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
