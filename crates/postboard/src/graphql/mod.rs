//! GraphQL schema and resolvers.
//!
//! Each resolver issues exactly one storage call and turns its outcome into
//! either a payload or a GraphQL error carrying the storage error's message.
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `users`, `posts`
//! - **Mutations**: `createUser`, `deleteUser`, `createPost`, `updatePost`, `deletePost`

mod error;
mod posts;
mod schema;
#[cfg(test)]
mod test_support;
mod types;
mod users;

pub use schema::{build_schema, PostboardSchema};
