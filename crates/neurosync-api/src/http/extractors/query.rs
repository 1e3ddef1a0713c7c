//! Query parameter extractors.
//!
//! Both reject malformed parameters with the JSON error envelope.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::http::error::AppError;

fn now_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Query parameters for the demo data endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct DemoQuery {
    /// Generator seed; identical seeds yield identical data.
    pub seed: Option<u64>,
}

impl DemoQuery {
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(now_seed)
    }
}

impl<S> FromRequestParts<S> for DemoQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Self>::from_request_parts(parts, state).await?;
        Ok(query)
    }
}

/// Query parameters for the sleep cycle endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct SleepQuery {
    pub seed: Option<u64>,
    /// Milliseconds since dream mode was switched on.
    #[serde(default)]
    pub elapsed_ms: u64,
}

impl SleepQuery {
    pub fn seed_or_now(&self) -> u64 {
        self.seed.unwrap_or_else(now_seed)
    }
}

impl<S> FromRequestParts<S> for SleepQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Self>::from_request_parts(parts, state).await?;
        Ok(query)
    }
}
