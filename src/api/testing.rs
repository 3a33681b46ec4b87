//! src/api/testing.rs
//!
//! Routes for end-to-end test runs, mounted only with `testing_routes`.

use crate::{api::ApiState, error::Result, store::Collections};
use axum::{extract::State, http::StatusCode};

/// Restores the fixture set, discarding everything else.
pub async fn reset(State(state): State<ApiState>) -> Result<StatusCode> {
    state.store.reset(Collections::fixtures()?).await?;
    Ok(StatusCode::NO_CONTENT)
}
