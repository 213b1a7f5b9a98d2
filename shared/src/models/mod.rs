//! Domain models for the AgriSmart advisory platform

mod market;
mod recommendation;
mod user;
mod weather;

pub use market::*;
pub use recommendation::*;
pub use user::*;
pub use weather::*;
