// Retail Express API client - library root

pub mod auth;
pub mod client;
pub mod config;
pub mod error;

pub use auth::{AuthMode, RENEWAL_SKEW_SECONDS};
pub use client::{Page, RetailExpressClient};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
