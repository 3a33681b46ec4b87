//! src/api/blogs.rs
//!
//! Handlers for `/api/blogs`.

use crate::{
    api::ApiState,
    domain::{Blog, BlogUpdate, NewBlog, ObjectId},
    error::Result,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<ApiState>) -> Json<Vec<Blog>> {
    Json(state.store.list_blogs().await)
}

pub async fn get(State(state): State<ApiState>, Path(id): Path<String>) -> Result<Json<Blog>> {
    let id: ObjectId = id.parse()?;
    Ok(Json(state.store.get_blog(id).await?))
}

pub async fn create(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<NewBlog>, JsonRejection>,
) -> Result<(StatusCode, Json<Blog>)> {
    let Json(new_blog) = payload?;
    let blog = state.store.create_blog(new_blog).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

pub async fn update(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<BlogUpdate>, JsonRejection>,
) -> Result<Json<Blog>> {
    let id: ObjectId = id.parse()?;
    let Json(update) = payload?;
    Ok(Json(state.store.update_blog(id, update).await?))
}

pub async fn delete(State(state): State<ApiState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id: ObjectId = id.parse()?;
    state.store.delete_blog(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
