use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    graphql::PostboardSchema,
    handlers::{
        graphql::{graphiql, graphql_handler, GRAPHQL_PATH},
        health::livez,
    },
};

/// Create the application router with all routes and middleware.
pub fn create_app(schema: PostboardSchema, request_timeout: Duration) -> Router {
    // CORS configuration for the GraphQL endpoint
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .layer(cors)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(schema)
}
