mod types;

pub use types::{Assignment, Post, PostChanges, User};
