//! HTTP handlers for the AgriSmart advisory API

pub mod health;
pub mod market;
pub mod recommendation;
pub mod weather;

pub use health::*;
pub use market::*;
pub use recommendation::*;
pub use weather::*;
