//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::records::{Post, PostChanges, User};
use postboard_core::storage::{
    assignment_value, item_key, lookup_key, PostRepository, Result, UserRepository,
    CONTENT_PLACEHOLDER, POST_KEY, TITLE_PLACEHOLDER, USER_KEY,
};

/// In-memory storage backend for local runs and tests.
///
/// Uses HashMaps keyed by the identity attribute, wrapped in `Arc<RwLock<_>>`
/// for thread-safe access. Keys are validated with the same rules DynamoDB
/// applies. Data is not persisted and will be lost when the repository is
/// dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    posts: Arc<RwLock<HashMap<String, Post>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn scan_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        let key = item_key(USER_KEY, user.user_id.as_deref())?;
        let mut users = self.users.write().await;
        users.insert(key.to_string(), user.clone());
        Ok(())
    }

    async fn delete_user(&self, user_id: Option<&str>) -> Result<()> {
        let key = lookup_key(USER_KEY, user_id)?;
        let mut users = self.users.write().await;
        users.remove(key);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn scan_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        let key = item_key(POST_KEY, post.post_id.as_deref())?;
        let mut posts = self.posts.write().await;
        posts.insert(key.to_string(), post.clone());
        Ok(())
    }

    async fn update_post(&self, post_id: Option<&str>, changes: &PostChanges) -> Result<()> {
        let key = lookup_key(POST_KEY, post_id)?;
        assignment_value(TITLE_PLACEHOLDER, &changes.title)?;
        assignment_value(CONTENT_PLACEHOLDER, &changes.content)?;

        let mut posts = self.posts.write().await;
        let post = posts
            .entry(key.to_string())
            .or_insert_with(|| Post::new(key));
        changes.apply_to(post);
        Ok(())
    }

    async fn delete_post(&self, post_id: Option<&str>) -> Result<()> {
        let key = lookup_key(POST_KEY, post_id)?;
        let mut posts = self.posts.write().await;
        posts.remove(key);
        Ok(())
    }
}
