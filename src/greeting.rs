//! The greeting handler.

use crate::config::Config;
use crate::response::Response;

/// Formats the response body for a provider label.
pub fn greeting(provider: &str) -> String {
    format!("Hello, World! I am running on {provider}!")
}

/// The root-path handler.
///
/// Holds the body precomputed from the provider label resolved at startup.
/// Request handling reads it and nothing else, so responses are identical
/// for the lifetime of the process.
pub struct Greeter {
    body: String,
}

impl Greeter {
    /// Builds the handler from a resolved configuration.
    pub fn new(config: &Config) -> Self {
        Self { body: greeting(&config.provider) }
    }

    /// `GET /` — `200 OK`, plain text, the greeting.
    pub fn handle_root(&self) -> Response {
        Response::text(self.body.clone())
    }
}
