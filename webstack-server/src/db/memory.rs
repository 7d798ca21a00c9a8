//! In-memory post store, the test double behind the router tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::{DbError, PostStore};
use crate::models::{NewPost, Post};

/// Post store backed by a `Vec`, ids assigned from 1 upward
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, DbError> {
        Ok(self.posts.read().await.clone())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DbError> {
        let mut posts = self.posts.write().await;
        let id = posts.last().map(|p| p.id + 1).unwrap_or(1);
        let created = post.into_post(id);
        posts.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(Some(title.into()), Some("body".into())).unwrap()
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryPostStore::new();
        let a = store.create_post(new_post("a")).await.unwrap();
        let b = store.create_post(new_post("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = MemoryPostStore::new();
        for title in ["one", "two", "three"] {
            store.create_post(new_post(title)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn concurrent_creates_lose_nothing() {
        let store = Arc::new(MemoryPostStore::new());
        let handles: Vec<_> = (0..25)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create_post(new_post(&i.to_string())).await })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked").unwrap();
        }

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 25);

        let ids: HashSet<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 25);
    }
}
