use serde::Serialize;
use warp::reply::Json;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Liveness probe. The bot has no dependencies to check, so this always
/// succeeds.
pub fn health() -> Json {
    warp::reply::json(&HealthBody { status: "ok" })
}
