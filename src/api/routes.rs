use axum::extract::ConnectInfo;
use axum::http::{header, HeaderValue, Method, Request};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tower_governor::{key_extractor::KeyExtractor, GovernorError};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

#[cfg(not(test))]
use {
    std::sync::Arc,
    tower_governor::{governor::GovernorConfigBuilder, GovernorLayer},
};

use crate::api::handlers::{self, AppState};
use crate::config::Settings;
use crate::{Error, Result};

/// Rate limit key: the peer IP recorded by `into_make_service_with_connect_info`.
/// Requests without connection info (e.g. in-process calls) share the loopback key.
#[derive(Clone, Copy, Debug)]
pub struct PeerAddrKeyExtractor;

impl KeyExtractor for PeerAddrKeyExtractor {
    type Key = IpAddr;

    fn extract<B>(&self, req: &Request<B>) -> std::result::Result<Self::Key, GovernorError> {
        Ok(req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)))
    }
}

/// Governor quota for a requests-per-second limit: the replenish period in
/// milliseconds and a burst of twice the limit
pub fn rate_limit_quota(requests_per_second: u64) -> Result<(u64, u32)> {
    if requests_per_second == 0 {
        return Err(Error::Config("Rate limit must be non-zero".to_string()));
    }

    let burst = u32::try_from(requests_per_second)
        .ok()
        .and_then(|limit| limit.checked_mul(2))
        .ok_or_else(|| {
            Error::Config(format!(
                "Rate limit {requests_per_second} is too large for the burst size"
            ))
        })?;
    let period_ms = (1000 / requests_per_second).max(1);

    Ok((period_ms, burst))
}

/// Create the router with all endpoints
pub fn create_router(state: AppState, settings: &Settings) -> Result<Router> {
    // Catalog queries - read-only, no authentication required
    #[cfg_attr(test, allow(unused_mut))]
    let mut api_routes = Router::new()
        .route("/", get(handlers::index))
        .route("/listMeals", get(handlers::list_meals))
        .route("/getMeal", get(handlers::get_meal))
        .route("/quality", post(handlers::calculate_quality))
        .route("/price", post(handlers::calculate_price))
        .route("/random", post(handlers::random_meal))
        .route("/search", get(handlers::search_meals))
        .with_state(state.clone());

    #[cfg_attr(test, allow(unused_variables))]
    let (period_ms, burst) = rate_limit_quota(settings.server.api_rate_limit)?;

    // Apply rate limiting only in non-test builds
    // NOTE: behind a reverse proxy every client shares the proxy's address;
    // have the proxy set X-Real-IP and switch to a header based extractor.
    #[cfg(not(test))]
    {
        let governor_conf = GovernorConfigBuilder::default()
            .key_extractor(PeerAddrKeyExtractor)
            .per_millisecond(period_ms)
            .burst_size(burst)
            .finish()
            .ok_or_else(|| Error::Config("Invalid rate limit configuration".to_string()))?;
        let governor_layer = GovernorLayer {
            config: Arc::new(governor_conf),
        };
        api_routes = api_routes.layer(governor_layer);
    }

    let api_routes = api_routes;

    // Health check stays outside the rate limiter
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(state);

    let router = Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(
            // Request body size limit - quality forms are small
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
