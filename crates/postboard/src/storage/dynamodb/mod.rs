//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`. Each collection is its own table with a single
//! string hash key (`user_id` or `post_id`).

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
