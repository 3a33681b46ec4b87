//! src/api/users.rs
//!
//! Handlers for `/api/users`. Users are append-only.

use crate::{
    api::{protocol::UserView, ApiState},
    domain::NewUser,
    error::Result,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<ApiState>) -> Json<Vec<UserView>> {
    let users = state.store.list_users().await;
    Json(users.iter().map(UserView::from).collect())
}

pub async fn create(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<UserView>)> {
    let Json(new_user) = payload?;
    let user = state.store.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}
