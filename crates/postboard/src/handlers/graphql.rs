//! GraphQL transport: one HTTP request becomes one schema execution.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use crate::graphql::PostboardSchema;

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// GET /graphql - GraphiQL explorer pointed at the endpoint.
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// POST /graphql - Execute a GraphQL request.
pub async fn graphql_handler(
    State(schema): State<PostboardSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
