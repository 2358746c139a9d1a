//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Endpoint returning the full country list
pub const COUNTRIES_API_URL: &str =
    "https://restcountries.com/v2/all?fields=name,capital,alpha2Code,region";

/// How long a failure toast stays on screen
pub const TOAST_TTL_MS: u64 = 3500;

/// App actor timer tick (drives toast expiry and the loading spinner)
pub const TICK_MS: u64 = 250;

/// Application name
pub const APP_NAME: &str = "Countries TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
