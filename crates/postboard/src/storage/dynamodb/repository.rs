//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `postboard_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use postboard_core::records::{Post, PostChanges, User};
use postboard_core::storage::{PostRepository, Result, UserRepository};

use super::conversions::{item_to_post, item_to_user, post_to_item, user_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_scan_error, map_update_item_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds one client for both tables. The client is cheap to clone and safe to
/// share across requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    users_table: String,
    posts_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table names.
    pub fn new(
        client: Client,
        users_table: impl Into<String>,
        posts_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            users_table: users_table.into(),
            posts_table: posts_table.into(),
        }
    }

    /// Creates a new repository from the application configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region, and
    /// the custom endpoint when one is set.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(
            Client::new(&sdk_config),
            &config.users_table,
            &config.posts_table,
        )
    }

    /// Get the users table name.
    pub fn users_table(&self) -> &str {
        &self.users_table
    }

    /// Get the posts table name.
    pub fn posts_table(&self) -> &str {
        &self.posts_table
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn scan_users(&self) -> Result<Vec<User>> {
        let items = self
            .client
            .scan()
            .table_name(&self.users_table)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(map_scan_error)?;

        tracing::debug!(table = %self.users_table, count = items.len(), "Scanned users");
        Ok(items.iter().map(item_to_user).collect())
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.users_table)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_user(&self, user_id: Option<&str>) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.users_table)
            .set_key(Some(keys::user_key(user_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}

// ============================================================================
// PostRepository implementation
// ============================================================================

#[async_trait]
impl PostRepository for DynamoDbRepository {
    async fn scan_posts(&self) -> Result<Vec<Post>> {
        let items = self
            .client
            .scan()
            .table_name(&self.posts_table)
            .into_paginator()
            .items()
            .send()
            .try_collect()
            .await
            .map_err(map_scan_error)?;

        tracing::debug!(table = %self.posts_table, count = items.len(), "Scanned posts");
        Ok(items.iter().map(item_to_post).collect())
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.posts_table)
            .set_item(Some(post_to_item(post)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_post(&self, post_id: Option<&str>, changes: &PostChanges) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.posts_table)
            .set_key(Some(keys::post_key(post_id)))
            .update_expression(keys::UPDATE_POST_EXPRESSION)
            .set_expression_attribute_values(keys::update_post_values(changes))
            .send()
            .await
            .map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete_post(&self, post_id: Option<&str>) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.posts_table)
            .set_key(Some(keys::post_key(post_id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
