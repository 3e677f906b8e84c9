//! Value objects shared across services.

pub mod route;

pub use route::Route;
