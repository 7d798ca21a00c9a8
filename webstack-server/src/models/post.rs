//! Post model
//!
//! A post is a title and a body of free-form text. Neither field has a
//! length or emptiness constraint: an empty string is a valid title.
//! Only a field that was never sent is rejected.

use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Post record as stored in the `posts` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Validated input for creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
}

impl NewPost {
    /// Build a new post from raw request fields.
    ///
    /// Values are taken verbatim (no trimming). A `None` field means the
    /// client did not send it at all, which is rejected.
    ///
    /// # Example
    /// ```
    /// use webstack_server::models::NewPost;
    ///
    /// assert!(NewPost::new(Some("Hello".into()), Some("World".into())).is_ok());
    /// assert!(NewPost::new(Some(String::new()), Some(String::new())).is_ok());
    /// assert!(NewPost::new(None, Some("World".into())).is_err());
    /// ```
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, ValidationError> {
        let title = title.ok_or(ValidationError::Missing { field: "title" })?;
        let content = content.ok_or(ValidationError::Missing { field: "content" })?;
        Ok(Self { title, content })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Attach a store-assigned id.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_values_verbatim() {
        let post = NewPost::new(Some("  Hello ".into()), Some("\nWorld".into())).unwrap();
        assert_eq!(post.title(), "  Hello ");
        assert_eq!(post.content(), "\nWorld");
    }

    #[test]
    fn accepts_empty_strings() {
        let post = NewPost::new(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(post.title(), "");
        assert_eq!(post.content(), "");
    }

    #[test]
    fn rejects_missing_title() {
        let err = NewPost::new(None, Some("body".into())).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "title" });
    }

    #[test]
    fn rejects_missing_content() {
        let err = NewPost::new(Some("title".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "content" });
    }

    #[test]
    fn into_post_assigns_id() {
        let post = NewPost::new(Some("a".into()), Some("b".into()))
            .unwrap()
            .into_post(7);
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "a");
    }
}
