//! Request tracing and HTTP metrics.
//!
//! Every API request runs inside a `request` span and ends with one summary
//! event. Metrics are labelled by matched route and [`RequestOutcome`] rather
//! than raw status, so a missing title (404) and a record whose facets could
//! not be loaded (503) stay distinguishable without unbounded label sets.

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::AppState;

/// `GET /api/metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.prometheus_handle {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::NOT_FOUND,
            "Metrics are disabled in this configuration".to_string(),
        ),
    }
}

/// How a request ended, as far as catalog clients care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Ok,
    Invalid,
    Unauthorized,
    NotFound,
    Conflict,
    /// The content exists but one of its facets failed to load.
    Unavailable,
    Failed,
}

impl RequestOutcome {
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            s if s.is_success() => Self::Ok,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::SERVICE_UNAVAILABLE => Self::Unavailable,
            s if s.is_client_error() => Self::Invalid,
            _ => Self::Failed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Invalid => "invalid",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unavailable => "unavailable",
            Self::Failed => "failed",
        }
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        route = %route,
        user_id = tracing::field::Empty,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();
        let outcome = RequestOutcome::from_status(status);
        let elapsed = started.elapsed();

        metrics::counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "route" => route.clone(),
            "outcome" => outcome.as_str(),
        )
        .increment(1);
        metrics::histogram!("http_request_duration_seconds", "route" => route)
            .record(elapsed.as_secs_f64());

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        if outcome == RequestOutcome::Unavailable {
            warn!(status = status.as_u16(), duration_ms, outcome = outcome.as_str(), "Request finished");
        } else {
            info!(status = status.as_u16(), duration_ms, outcome = outcome.as_str(), "Request finished");
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_failures_get_distinct_outcomes() {
        assert_eq!(
            RequestOutcome::from_status(StatusCode::NOT_FOUND),
            RequestOutcome::NotFound
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::SERVICE_UNAVAILABLE),
            RequestOutcome::Unavailable
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            RequestOutcome::Failed
        );
    }

    #[test]
    fn remaining_statuses_collapse_into_few_labels() {
        assert_eq!(RequestOutcome::from_status(StatusCode::OK), RequestOutcome::Ok);
        assert_eq!(
            RequestOutcome::from_status(StatusCode::BAD_REQUEST),
            RequestOutcome::Invalid
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::PAYLOAD_TOO_LARGE),
            RequestOutcome::Invalid
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::CONFLICT).as_str(),
            "conflict"
        );
    }
}
