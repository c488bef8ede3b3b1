use async_graphql::{Context, Object, Result};
use postboard_core::records;

use crate::state::AppState;

use super::error::storage_failure;
use super::types::{CreateUserInput, DeleteUserInput, MutationResponse, User};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Every user in the users table, in no particular order.
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let state = ctx.data::<AppState>()?;
        let users = state
            .users
            .scan_users()
            .await
            .map_err(storage_failure("users"))?;

        Ok(Some(users.into_iter().map(|user| Some(User::from(user))).collect()))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Writes a user, replacing any user with the same `user_id`.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        data: Option<CreateUserInput>,
    ) -> Result<Option<MutationResponse>> {
        let state = ctx.data::<AppState>()?;
        let user: records::User = data.unwrap_or_default().into();

        state
            .users
            .put_user(&user)
            .await
            .map_err(storage_failure("createUser"))?;

        tracing::info!(user_id = ?user.user_id, "Created user");
        Ok(Some(MutationResponse::success("user created successfully")))
    }

    /// Deletes a user. Deleting a user that does not exist succeeds.
    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        data: Option<DeleteUserInput>,
    ) -> Result<Option<MutationResponse>> {
        let state = ctx.data::<AppState>()?;
        let user_id = data.unwrap_or_default().user_id;

        state
            .users
            .delete_user(user_id.as_deref())
            .await
            .map_err(storage_failure("deleteUser"))?;

        tracing::info!(?user_id, "Deleted user");
        Ok(Some(MutationResponse::success("user deleted successfully")))
    }
}
