// Authentication module
// Manages the bearer token lifecycle for the Retail Express API

mod exchange;
mod manager;
mod types;

pub use manager::TokenManager;
pub use types::{AuthMode, Token, RENEWAL_SKEW_SECONDS};
