use async_graphql::{InputObject, MaybeUndefined, SimpleObject};
use postboard_core::records::{self, Assignment, PostChanges};

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct User {
    #[graphql(name = "user_id")]
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<records::User> for User {
    fn from(user: records::User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    #[graphql(name = "post_id")]
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<records::Post> for Post {
    fn from(post: records::Post) -> Self {
        Self {
            post_id: post.post_id,
            title: post.title,
            content: post.content,
        }
    }
}

/// Outcome of a mutation. `error` is part of the contract but is never set:
/// failures are reported as GraphQL errors instead.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "Response")]
pub struct MutationResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }
}

#[derive(InputObject, Debug, Default)]
pub struct CreateUserInput {
    #[graphql(name = "user_id")]
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<CreateUserInput> for records::User {
    fn from(input: CreateUserInput) -> Self {
        Self {
            user_id: input.user_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }
}

#[derive(InputObject, Debug, Default)]
pub struct DeleteUserInput {
    #[graphql(name = "user_id")]
    pub user_id: Option<String>,
}

#[derive(InputObject, Debug, Default)]
pub struct CreatePostInput {
    #[graphql(name = "post_id")]
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<CreatePostInput> for records::Post {
    fn from(input: CreatePostInput) -> Self {
        Self {
            post_id: input.post_id,
            title: input.title,
            content: input.content,
        }
    }
}

/// An explicit `null` clears the field; an omitted field is rejected by storage.
#[derive(InputObject, Debug, Default)]
pub struct UpdatePostInput {
    pub title: MaybeUndefined<String>,
    pub content: MaybeUndefined<String>,
}

impl From<UpdatePostInput> for PostChanges {
    fn from(input: UpdatePostInput) -> Self {
        Self {
            title: assignment(input.title),
            content: assignment(input.content),
        }
    }
}

fn assignment(field: MaybeUndefined<String>) -> Assignment {
    match field {
        MaybeUndefined::Undefined => Assignment::Missing,
        MaybeUndefined::Null => Assignment::Null,
        MaybeUndefined::Value(value) => Assignment::Value(value),
    }
}

#[derive(InputObject, Debug, Default)]
pub struct DeletePostInput {
    #[graphql(name = "post_id")]
    pub post_id: Option<String>,
}
