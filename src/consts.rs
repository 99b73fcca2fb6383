//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Default Gemini model when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Port the gateway listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Where the console looks for the gateway by default.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:5000";

/// The single review endpoint.
pub const REVIEW_PATH: &str = "/api/code-review";

/// Body of every gateway-side failure. Never carries detail.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong!";

/// Shown by the console whenever the gateway call fails, whatever the cause.
pub const CLIENT_FAILURE_MESSAGE: &str = "Failed to get feedback from the server.";

/// Shown by the console when code or language is missing.
pub const VALIDATION_MESSAGE: &str = "Please provide both code and language.";

/// Languages offered by the console form.
pub const LANGUAGES: &[&str] = &["JavaScript", "Python", "Java"];
