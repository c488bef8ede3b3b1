use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Object, Schema};

use crate::state::AppState;

use super::posts::{PostMutation, PostQuery};
use super::users::{UserMutation, UserQuery};

pub const GREETING: &str = "Hello world!";

pub type PostboardSchema = Schema<Query, Mutation, EmptySubscription>;

#[derive(Default)]
pub struct GreetingQuery;

#[Object]
impl GreetingQuery {
    async fn hello(&self) -> Option<String> {
        Some(GREETING.to_string())
    }
}

#[derive(MergedObject, Default)]
pub struct Query(GreetingQuery, UserQuery, PostQuery);

#[derive(MergedObject, Default)]
pub struct Mutation(UserMutation, PostMutation);

/// Builds the schema with the storage handles every resolver shares.
pub fn build_schema(state: AppState) -> PostboardSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(Tracing)
        .data(state)
        .finish()
}
