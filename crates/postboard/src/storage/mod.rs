//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `postboard_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always available.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p postboard
//! ```
//!
//! Build with the in-memory backend only:
//! ```bash
//! cargo build -p postboard --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
