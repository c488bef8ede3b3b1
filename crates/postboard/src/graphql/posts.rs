use async_graphql::{Context, Object, Result};
use postboard_core::records::{self, PostChanges};

use crate::state::AppState;

use super::error::storage_failure;
use super::types::{CreatePostInput, DeletePostInput, MutationResponse, Post, UpdatePostInput};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// Every post in the posts table, in no particular order.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Post>>>> {
        let state = ctx.data::<AppState>()?;
        let posts = state
            .posts
            .scan_posts()
            .await
            .map_err(storage_failure("posts"))?;

        Ok(Some(posts.into_iter().map(|post| Some(Post::from(post))).collect()))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Writes a post, replacing any post with the same `post_id`.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        data: Option<CreatePostInput>,
    ) -> Result<Option<MutationResponse>> {
        let state = ctx.data::<AppState>()?;
        let post: records::Post = data.unwrap_or_default().into();

        state
            .posts
            .put_post(&post)
            .await
            .map_err(storage_failure("createPost"))?;

        tracing::info!(post_id = ?post.post_id, "Created post");
        Ok(Some(MutationResponse::success("post created successfully")))
    }

    /// Sets `title` and `content` on a post.
    ///
    /// A post that does not exist is created with only those two fields.
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        post_id: Option<String>,
        data: Option<UpdatePostInput>,
    ) -> Result<Option<MutationResponse>> {
        let state = ctx.data::<AppState>()?;
        let changes: PostChanges = data.unwrap_or_default().into();

        state
            .posts
            .update_post(post_id.as_deref(), &changes)
            .await
            .map_err(storage_failure("updatePost"))?;

        tracing::info!(?post_id, "Updated post");
        Ok(Some(MutationResponse::success("post updated successfully")))
    }

    /// Deletes a post. Deleting a post that does not exist succeeds.
    async fn delete_post(
        &self,
        ctx: &Context<'_>,
        data: Option<DeletePostInput>,
    ) -> Result<Option<MutationResponse>> {
        let state = ctx.data::<AppState>()?;
        let post_id = data.unwrap_or_default().post_id;

        state
            .posts
            .delete_post(post_id.as_deref())
            .await
            .map_err(storage_failure("deletePost"))?;

        tracing::info!(?post_id, "Deleted post");
        Ok(Some(MutationResponse::success("post deleted successfully")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_graphql::{Request, Variables};
    use serde_json::json;
    use tokio::task::JoinSet;

    use crate::graphql::test_support::{execute, failing_schema, memory_schema};

    const LIST_POSTS: &str = "{ posts { post_id title content } }";

    #[tokio::test]
    async fn test_create_post_then_list() {
        let schema = memory_schema();

        let created = execute(
            &schema,
            r#"mutation { createPost(data: { post_id: "p1", title: "Hi", content: "First" }) { message } }"#,
        )
        .await
        .unwrap();
        assert_eq!(
            created,
            json!({ "createPost": { "message": "post created successfully" } })
        );

        let listed = execute(&schema, LIST_POSTS).await.unwrap();
        assert_eq!(
            listed,
            json!({ "posts": [{ "post_id": "p1", "title": "Hi", "content": "First" }] })
        );
    }

    #[tokio::test]
    async fn test_update_unknown_post_creates_it() {
        let schema = memory_schema();

        let updated = execute(
            &schema,
            r#"mutation { updatePost(postId: "p7", data: { title: "T", content: "C" }) { message error } }"#,
        )
        .await
        .unwrap();
        assert_eq!(
            updated,
            json!({ "updatePost": { "message": "post updated successfully", "error": null } })
        );

        let listed = execute(&schema, LIST_POSTS).await.unwrap();
        assert_eq!(
            listed,
            json!({ "posts": [{ "post_id": "p7", "title": "T", "content": "C" }] })
        );
    }

    #[tokio::test]
    async fn test_update_replaces_both_fields() {
        let schema = memory_schema();
        execute(
            &schema,
            r#"mutation { createPost(data: { post_id: "p1", title: "Old", content: "Old body" }) { message } }"#,
        )
        .await
        .unwrap();

        execute(
            &schema,
            r#"mutation { updatePost(postId: "p1", data: { title: "New", content: "New body" }) { message } }"#,
        )
        .await
        .unwrap();

        let listed = execute(&schema, LIST_POSTS).await.unwrap();
        assert_eq!(
            listed,
            json!({ "posts": [{ "post_id": "p1", "title": "New", "content": "New body" }] })
        );
    }

    #[tokio::test]
    async fn test_update_without_content_is_rejected_by_storage() {
        let schema = memory_schema();

        let errors = execute(
            &schema,
            r#"mutation { updatePost(postId: "p1", data: { title: "T" }) { message } }"#,
        )
        .await
        .unwrap_err();

        assert_eq!(
            errors,
            vec!["Invalid UpdateExpression: An expression attribute value used in expression is not defined; attribute value: :s"]
        );
    }

    #[tokio::test]
    async fn test_update_with_null_title_clears_it() {
        let schema = memory_schema();
        execute(
            &schema,
            r#"mutation { createPost(data: { post_id: "p1", title: "Old", content: "Old body" }) { message } }"#,
        )
        .await
        .unwrap();

        let updated = execute(
            &schema,
            r#"mutation { updatePost(postId: "p1", data: { title: null, content: "C" }) { message } }"#,
        )
        .await
        .unwrap();
        assert_eq!(
            updated,
            json!({ "updatePost": { "message": "post updated successfully" } })
        );

        let listed = execute(&schema, LIST_POSTS).await.unwrap();
        assert_eq!(
            listed,
            json!({ "posts": [{ "post_id": "p1", "title": null, "content": "C" }] })
        );
    }

    #[tokio::test]
    async fn test_delete_never_created_post_succeeds() {
        let schema = memory_schema();

        let deleted = execute(
            &schema,
            r#"mutation { deletePost(data: { post_id: "never" }) { message } }"#,
        )
        .await
        .unwrap();

        assert_eq!(
            deleted,
            json!({ "deletePost": { "message": "post deleted successfully" } })
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_listed() {
        let schema = memory_schema();
        let mut tasks = JoinSet::new();

        for i in 0..16 {
            let schema = schema.clone();
            tasks.spawn(async move {
                let request = Request::new(
                    "mutation Create($data: CreatePostInput) { createPost(data: $data) { message } }",
                )
                .variables(Variables::from_json(json!({
                    "data": { "post_id": format!("p{i}"), "title": format!("Post {i}") }
                })));
                schema.execute(request).await
            });
        }

        while let Some(response) = tasks.join_next().await {
            assert!(response.unwrap().errors.is_empty());
        }

        let listed = execute(&schema, "{ posts { post_id } }").await.unwrap();
        let ids: HashSet<String> = listed["posts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["post_id"].as_str().unwrap().to_string())
            .collect();
        let expected: HashSet<String> = (0..16).map(|i| format!("p{i}")).collect();

        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates_message() {
        let schema = failing_schema("Throughput exceeded, please retry");

        let errors = execute(
            &schema,
            r#"mutation { deletePost(data: { post_id: "p1" }) { message } }"#,
        )
        .await
        .unwrap_err();

        assert_eq!(
            errors,
            vec!["Query failed: Throughput exceeded, please retry"]
        );
    }
}
