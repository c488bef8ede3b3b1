//! Application state with repository-based storage.
//!
//! The storage handles are built once at startup and shared by every request.
//! Both handles usually point at the same backend instance.

use std::sync::Arc;

use postboard_core::storage::{PostRepository, UserRepository};

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Process-local maps, lost on exit.
    Memory,
    /// The configured DynamoDB tables.
    Dynamodb,
}

/// Shared application state.
///
/// Cloned into the GraphQL schema data; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Users collection.
    pub users: Arc<dyn UserRepository>,
    /// Posts collection.
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self::new(repo.clone(), repo)
    }

    /// Connects the selected backend.
    pub async fn connect(backend: StorageBackend, config: &Config) -> anyhow::Result<Self> {
        match backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on exit");
                Ok(Self::in_memory())
            }
            StorageBackend::Dynamodb => Self::dynamodb(config).await,
        }
    }

    #[cfg(feature = "dynamodb")]
    async fn dynamodb(config: &Config) -> anyhow::Result<Self> {
        let repo = Arc::new(crate::storage::DynamoDbRepository::from_config(config).await);

        tracing::info!(
            target_store = %config.target_display(),
            users_table = repo.users_table(),
            posts_table = repo.posts_table(),
            "Using DynamoDB storage"
        );

        Ok(Self::new(repo.clone(), repo))
    }

    #[cfg(not(feature = "dynamodb"))]
    async fn dynamodb(_config: &Config) -> anyhow::Result<Self> {
        anyhow::bail!("postboard was built without the `dynamodb` feature; use --storage memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::records::Post;

    #[tokio::test]
    async fn test_in_memory_handles_share_backend_per_state() {
        let state = AppState::in_memory();
        let other = AppState::in_memory();

        state.posts.put_post(&Post::new("p1")).await.unwrap();

        assert_eq!(state.clone().posts.scan_posts().await.unwrap().len(), 1);
        assert!(other.posts.scan_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_connect_memory_backend() {
        let config = Config {
            users_table: "users".to_string(),
            posts_table: "posts".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            request_timeout_seconds: 10,
        };

        let state = AppState::connect(StorageBackend::Memory, &config)
            .await
            .unwrap();

        assert!(state.users.scan_users().await.unwrap().is_empty());
    }
}
