//! Backend Endpoint Configuration
//!
//! Resolved at compile time so the deployed bundle carries no runtime
//! config fetch. Local development falls back to a local PostgREST port.

pub const API_URL: &str = match option_env!("SOCIETY_HUB_API_URL") {
    Some(url) => url,
    None => "http://localhost:54321/rest/v1",
};

pub const API_KEY: &str = match option_env!("SOCIETY_HUB_API_KEY") {
    Some(key) => key,
    None => "dev-anon-key",
};
