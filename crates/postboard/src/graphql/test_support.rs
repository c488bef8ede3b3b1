//! Helpers shared by the resolver tests.

use std::sync::Arc;

use async_trait::async_trait;
use postboard_core::records::{Post, PostChanges, User};
use postboard_core::storage::{PostRepository, RepositoryError, Result, UserRepository};

use crate::state::AppState;

use super::{build_schema, PostboardSchema};

/// A backend whose every call fails with the same query error.
pub struct FailingRepository(pub String);

impl FailingRepository {
    fn fail<T>(&self) -> Result<T> {
        Err(RepositoryError::QueryFailed(self.0.clone()))
    }
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn scan_users(&self) -> Result<Vec<User>> {
        self.fail()
    }

    async fn put_user(&self, _user: &User) -> Result<()> {
        self.fail()
    }

    async fn delete_user(&self, _user_id: Option<&str>) -> Result<()> {
        self.fail()
    }
}

#[async_trait]
impl PostRepository for FailingRepository {
    async fn scan_posts(&self) -> Result<Vec<Post>> {
        self.fail()
    }

    async fn put_post(&self, _post: &Post) -> Result<()> {
        self.fail()
    }

    async fn update_post(&self, _post_id: Option<&str>, _changes: &PostChanges) -> Result<()> {
        self.fail()
    }

    async fn delete_post(&self, _post_id: Option<&str>) -> Result<()> {
        self.fail()
    }
}

pub fn memory_schema() -> PostboardSchema {
    build_schema(AppState::in_memory())
}

pub fn failing_schema(message: &str) -> PostboardSchema {
    let repo = Arc::new(FailingRepository(message.to_string()));
    build_schema(AppState::new(repo.clone(), repo))
}

/// Executes a document, returning the `data` JSON or the error messages.
pub async fn execute(
    schema: &PostboardSchema,
    query: &str,
) -> std::result::Result<serde_json::Value, Vec<String>> {
    let response = schema.execute(query).await;
    if !response.errors.is_empty() {
        return Err(response.errors.into_iter().map(|e| e.message).collect());
    }
    Ok(response.data.into_json().expect("data is valid JSON"))
}
