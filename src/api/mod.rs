//! API handlers for the guestbook REST endpoints

pub mod comments;
pub mod health;
pub mod openapi;
pub mod visitors;

use std::{
    convert::Infallible,
    net::{IpAddr, SocketAddr},
};

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequest, FromRequestParts},
    http::{request::Parts, HeaderMap},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{error::AppError, models::visitor::UNKNOWN_CLIENT, AppState};

/// JSON extractor whose rejections are reported as `{"error": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Identifier of the calling client, see [`resolve_client_identifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentifier(pub String);

#[async_trait]
impl FromRequestParts<AppState> for ClientIdentifier {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(ClientIdentifier(resolve_client_identifier(
            &parts.headers,
            peer,
            state.config.server.trust_forwarded_headers,
        )))
    }
}

/// Resolve the client identifier for visit counting.
///
/// Priority order:
/// 1. when `trust_forwarded` is set, the left-most parseable address in
///    `X-Forwarded-For`, then `X-Real-IP`;
/// 2. the TCP peer address;
/// 3. [`UNKNOWN_CLIENT`].
///
/// IPv4-mapped IPv6 addresses are reported in their IPv4 form.
pub fn resolve_client_identifier(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded: bool,
) -> String {
    let forwarded = if trust_forwarded {
        forwarded_for(headers).or_else(|| real_ip(headers))
    } else {
        None
    };

    forwarded
        .or_else(|| peer.map(|addr| addr.ip()))
        .map(|ip| canonical_ip(ip).to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|entry| entry.trim().parse().ok())
}

fn real_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

fn canonical_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(IpAddr::V6(v6)),
        v4 => v4,
    }
}

async fn api_not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Visitor counter
        .route("/visitors/count", get(visitors::get_count))
        .route("/visitors/increment", post(visitors::increment))
        // Guestbook
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .fallback(api_not_found)
        .with_state(state.clone());

    // Everything outside /api comes from the static site directory
    let static_files = ServeDir::new(&state.config.static_files.dir);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
