use axum::{extract::Request, middleware::Next, response::Response};
use chrono::{SecondsFormat, Utc};

/// Logs method, path and arrival time before the request reaches a handler.
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(
        method = %req.method(),
        path = %req.uri().path(),
        at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Incoming request"
    );
    next.run(req).await
}
