use async_trait::async_trait;

use crate::records::{Post, PostChanges, User};

use super::Result;

/// Storage contract for the users collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user in the collection, in no particular order.
    async fn scan_users(&self) -> Result<Vec<User>>;

    /// Writes a user, replacing any existing record with the same key.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Deletes the user with the given key. Deleting a missing key succeeds.
    async fn delete_user(&self, user_id: Option<&str>) -> Result<()>;
}

/// Storage contract for the posts collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post in the collection, in no particular order.
    async fn scan_posts(&self) -> Result<Vec<Post>>;

    /// Writes a post, replacing any existing record with the same key.
    async fn put_post(&self, post: &Post) -> Result<()>;

    /// Assigns `title` and `content` on the post with the given key.
    ///
    /// A post that does not exist yet is created with only the key and the
    /// two assigned fields.
    async fn update_post(&self, post_id: Option<&str>, changes: &PostChanges) -> Result<()>;

    /// Deletes the post with the given key. Deleting a missing key succeeds.
    async fn delete_post(&self, post_id: Option<&str>) -> Result<()>;
}
