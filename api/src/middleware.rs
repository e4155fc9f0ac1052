//! Request logging middleware.

use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Origin, UserAgent},
};
use std::{net::SocketAddr, time::Instant};
use tracing::info;

/// Logs every non-preflight request once the response is ready.
///
/// ```rust,ignore
/// use axum::{Router, middleware::from_fn};
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// ### Fields Logged:
/// - `method`, `path`, `status`
/// - `ip`: remote address, `unknown` when the server was not started with connect info
/// - `origin`, `user_agent`: header values if present
/// - `latency_ms`
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let ip = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_string();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        ip = %ip,
        origin = %origin.unwrap_or_else(|| "unknown".into()),
        user_agent = %user_agent.unwrap_or_else(|| "unknown".into()),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
