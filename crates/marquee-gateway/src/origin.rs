//! Cross-origin allow-list enforced in front of the router.
//!
//! Requests without an `Origin` header (same-origin navigation, curl,
//! server-to-server) pass through. Requests from a listed origin pass and
//! receive CORS headers. Everything else is answered with 403 before it
//! reaches a handler.

use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::error::AppError;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://localhost:3333",
    "https://movies.com",
    "https://midu.dev",
];

#[derive(Debug, Error)]
#[error("invalid origin '{0}'")]
pub struct InvalidOrigin(pub String);

#[derive(Debug, Clone, TypedBuilder)]
pub struct OriginPolicy {
    allowed_origins: Vec<HeaderValue>,
    /// Whether requests carrying no `Origin` header are let through.
    #[builder(default = true)]
    allow_missing: bool,
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::builder()
            .allowed_origins(
                DEFAULT_ALLOWED_ORIGINS
                    .into_iter()
                    .map(HeaderValue::from_static)
                    .collect(),
            )
            .build()
    }
}

impl OriginPolicy {
    /// Builds a policy from textual origins such as `https://movies.com`.
    pub fn from_origins<I, S>(origins: I) -> Result<Self, InvalidOrigin>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_origins = origins
            .into_iter()
            .map(|origin| {
                let origin = origin.as_ref().trim();
                HeaderValue::from_str(origin).map_err(|_| InvalidOrigin(origin.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::builder().allowed_origins(allowed_origins).build())
    }

    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }

    /// Decides whether a request with the given `Origin` header may proceed.
    pub fn permits(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => self.allow_missing,
            Some(origin) => self.allowed_origins.contains(origin),
        }
    }

    /// CORS response headers for the allowed origins.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed_origins.clone()))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
    }
}

pub async fn guard_origin(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN);
    if policy.permits(origin) {
        return next.run(request).await;
    }

    warn!(
        origin = ?origin,
        method = %request.method(),
        path = %request.uri().path(),
        "rejected cross-origin request"
    );
    AppError::OriginRejected.into_response()
}
