//! JSON endpoints for posts
//!
//! Same store and validation as the HTML pages, for scripts and frontends.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::BlogState;
use crate::models::{NewPost, Post};

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// GET /api/posts
async fn list_posts(State(state): State<Arc<BlogState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.posts.list_posts().await?;
    Ok(Json(posts))
}

/// POST /api/posts
async fn create_post(
    State(state): State<Arc<BlogState>>,
    ValidJson(req): ValidJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let new_post = NewPost::new(req.title, req.content)?;
    let post = state.posts.create_post(new_post).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// API routes
pub fn router() -> Router<Arc<BlogState>> {
    Router::new().route("/api/posts", get(list_posts).post(create_post))
}
