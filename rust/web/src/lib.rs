//! # botnaught_web: HTTP front end for the Botnaught decision engine
//!
//! Serves two routes over warp:
//!
//! - `GET /health` answers `{"status":"ok"}`
//! - `POST /action` takes `{"game": GameState}` and answers `{"action": Action}`
//!
//! Errors come back as [`ErrorResponse`] JSON bodies.

pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;

pub use errors::{handle_rejection, ApiError, ErrorResponse, ErrorSeverity, IntoErrorResponse};
pub use logging::{init_logging, init_test_logging, LogEntry, LogFormat, TestLogSubscriber};
pub use middleware::{log_response, with_request_logging};
pub use server::{AppContext, ServerConfig, ServerError, ServerHandle, WebServer};

#[cfg(test)]
mod tests {
    use super::*;
    use botnaught_ai::config::Config;

    #[test]
    fn context_provides_shared_components() {
        let ctx = AppContext::from_config(&Config::default()).expect("context");

        assert_eq!(ctx.strategy().name(), "staged");
        assert_eq!(ctx.tracker().last_seen(), None);
    }
}
