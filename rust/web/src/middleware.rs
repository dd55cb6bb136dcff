use std::time::Instant;
use uuid::Uuid;
use warp::http::{Method, StatusCode};
use warp::reject::Rejection;
use warp::reply::{Reply, Response};
use warp::Filter;

#[derive(Debug, Clone)]
struct RequestInfo {
    id: Uuid,
    path: String,
    method: Method,
    start: Instant,
}

/// Wrap `filter` so every request it answers is logged on the way in and out
/// with a per-request id, status and duration.
pub fn with_request_logging<F, T>(
    filter: F,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone
where
    F: Filter<Extract = (T,), Error = Rejection> + Clone + Send + Sync + 'static,
    T: Reply,
{
    warp::any()
        .and(warp::path::full())
        .and(warp::method())
        .map(|path: warp::path::FullPath, method: Method| {
            let info = RequestInfo {
                id: Uuid::new_v4(),
                path: path.as_str().to_string(),
                method,
                start: Instant::now(),
            };
            tracing::info!(
                request_id = %info.id,
                path = %info.path,
                method = %info.method,
                "incoming request"
            );
            info
        })
        .and(filter)
        .map(|info: RequestInfo, reply: T| {
            let response = reply.into_response();
            log_response(
                response.status(),
                &info.path,
                info.method.as_str(),
                info.start.elapsed().as_millis(),
            );
            response
        })
}

pub fn log_response(status: StatusCode, path: &str, method: &str, duration_ms: u128) {
    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms = duration_ms,
            "server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms = duration_ms,
            "client error"
        );
    } else {
        tracing::info!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms = duration_ms,
            "response sent"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLogSubscriber;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Registry;

    #[tokio::test]
    async fn logs_request_and_response() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        let _guard = tracing::subscriber::set_default(registry);

        let route = warp::path!("ping")
            .and(warp::get())
            .map(|| warp::reply::json(&"pong"));

        let response = warp::test::request()
            .method("GET")
            .path("/ping")
            .reply(&with_request_logging(route))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let entries = subscriber.entries();
        let incoming = entries
            .iter()
            .find(|e| e.message.contains("incoming request"))
            .expect("incoming entry");
        assert!(incoming.field("request_id").is_some());
        assert_eq!(incoming.field("path"), Some("/ping"));

        let sent = entries
            .iter()
            .find(|e| e.message.contains("response sent"))
            .expect("response entry");
        assert_eq!(sent.level, Level::INFO);
        assert_eq!(sent.field("status"), Some("200"));
    }

    #[test]
    fn client_errors_log_as_warnings() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

        tracing::subscriber::with_default(registry, || {
            log_response(StatusCode::BAD_REQUEST, "/action", "POST", 3);
            log_response(StatusCode::INTERNAL_SERVER_ERROR, "/action", "POST", 3);
        });

        let entries = subscriber.entries();
        assert_eq!(entries[0].level, Level::WARN);
        assert_eq!(entries[0].field("status"), Some("400"));
        assert_eq!(entries[1].level, Level::ERROR);
    }
}
