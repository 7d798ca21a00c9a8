//! Blog pages
//!
//! GET  /         - every post, oldest first
//! GET  /create/  - blank creation form
//! POST /create/  - create a post from form fields, then redirect to /

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidForm;
use crate::http::server::BlogState;
use crate::models::{NewPost, Post};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "create_post.html")]
struct CreatePostTemplate {}

/// Form body for POST /create/.
///
/// Fields are optional here so that a missing field reaches `NewPost::new`
/// and becomes `ValidationError::Missing`; a body that can't be decoded at
/// all is rejected by `ValidForm`. Both are 400.
#[derive(Debug, Deserialize)]
pub struct CreatePostForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn render<T: Template>(template: T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

/// 302 back to the post list
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// GET /
async fn index(State(state): State<Arc<BlogState>>) -> Result<Html<String>, ApiError> {
    let posts = state.posts.list_posts().await?;
    render(IndexTemplate { posts })
}

/// GET /create/
async fn create_post_form() -> Result<Html<String>, ApiError> {
    render(CreatePostTemplate {})
}

/// POST /create/
async fn create_post(
    State(state): State<Arc<BlogState>>,
    ValidForm(form): ValidForm<CreatePostForm>,
) -> Result<Response, ApiError> {
    let new_post = NewPost::new(form.title, form.content)?;
    state.posts.create_post(new_post).await?;
    Ok(redirect_to_index())
}

/// Blog page routes
pub fn router() -> Router<Arc<BlogState>> {
    Router::new()
        .route("/", get(index))
        .route("/create/", get(create_post_form).post(create_post))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_escapes_post_fields() {
        let html = IndexTemplate {
            posts: vec![Post {
                id: 1,
                title: "<script>alert(1)</script>".into(),
                content: "a & b".into(),
            }],
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn index_without_posts() {
        let html = IndexTemplate { posts: vec![] }.render().unwrap();
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn form_has_both_fields() {
        let html = CreatePostTemplate {}.render().unwrap();
        assert!(html.contains(r#"name="title""#));
        assert!(html.contains(r#"name="content""#));
        assert!(html.contains(r#"action="/create/""#));
    }

    #[test]
    fn redirect_is_302_to_root() {
        let response = redirect_to_index();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}
