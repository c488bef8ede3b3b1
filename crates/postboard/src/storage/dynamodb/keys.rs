//! DynamoDB key and expression builders.
//!
//! Pure functions with no side effects. A missing key produces an empty key
//! map; the service rejects it, not this module.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use postboard_core::records::PostChanges;
use postboard_core::storage::{CONTENT_PLACEHOLDER, POST_KEY, TITLE_PLACEHOLDER, USER_KEY};

/// Update expression assigning both mutable post fields.
pub const UPDATE_POST_EXPRESSION: &str = "SET title = :t, content = :s";

/// Key map addressing a user.
pub fn user_key(user_id: Option<&str>) -> HashMap<String, AttributeValue> {
    key_map(USER_KEY, user_id)
}

/// Key map addressing a post.
pub fn post_key(post_id: Option<&str>) -> HashMap<String, AttributeValue> {
    key_map(POST_KEY, post_id)
}

/// Expression attribute values for [`UPDATE_POST_EXPRESSION`].
///
/// A `Null` assignment binds a NULL attribute; a `Missing` one is left unbound.
/// Returns `None` when nothing is bound, since the service refuses an empty
/// value map.
pub fn update_post_values(changes: &PostChanges) -> Option<HashMap<String, AttributeValue>> {
    let values: HashMap<_, _> = [
        (TITLE_PLACEHOLDER, &changes.title),
        (CONTENT_PLACEHOLDER, &changes.content),
    ]
    .into_iter()
    .filter_map(|(placeholder, assignment)| {
        let value = match assignment.resolve()? {
            Some(text) => AttributeValue::S(text.to_string()),
            None => AttributeValue::Null(true),
        };
        Some((placeholder.to_string(), value))
    })
    .collect();

    (!values.is_empty()).then_some(values)
}

fn key_map(attribute: &str, value: Option<&str>) -> HashMap<String, AttributeValue> {
    value
        .map(|v| (attribute.to_string(), AttributeValue::S(v.to_string())))
        .into_iter()
        .collect()
}
