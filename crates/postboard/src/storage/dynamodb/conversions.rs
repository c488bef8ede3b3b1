//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and records.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use postboard_core::records::{Post, User};
use postboard_core::storage::{POST_KEY, USER_KEY};

// ============================================================================
// Attribute names
// ============================================================================

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";

// ============================================================================
// User conversions
// ============================================================================

/// Convert a User to DynamoDB item. Absent fields are left out of the item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    put_optional_string(&mut item, USER_KEY, user.user_id.as_deref());
    put_optional_string(&mut item, FIRST_NAME, user.first_name.as_deref());
    put_optional_string(&mut item, LAST_NAME, user.last_name.as_deref());
    put_optional_string(&mut item, EMAIL, user.email.as_deref());

    item
}

/// Convert a DynamoDB item to User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> User {
    User {
        user_id: get_optional_string(item, USER_KEY),
        first_name: get_optional_string(item, FIRST_NAME),
        last_name: get_optional_string(item, LAST_NAME),
        email: get_optional_string(item, EMAIL),
    }
}

// ============================================================================
// Post conversions
// ============================================================================

/// Convert a Post to DynamoDB item. Absent fields are left out of the item.
pub fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    put_optional_string(&mut item, POST_KEY, post.post_id.as_deref());
    put_optional_string(&mut item, TITLE, post.title.as_deref());
    put_optional_string(&mut item, CONTENT, post.content.as_deref());

    item
}

/// Convert a DynamoDB item to Post.
pub fn item_to_post(item: &HashMap<String, AttributeValue>) -> Post {
    Post {
        post_id: get_optional_string(item, POST_KEY),
        title: get_optional_string(item, TITLE),
        content: get_optional_string(item, CONTENT),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn put_optional_string(
    item: &mut HashMap<String, AttributeValue>,
    key: &str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        item.insert(key.to_string(), AttributeValue::S(value.to_string()));
    }
}

/// Get an optional attribute rendered as a string.
///
/// Scalars (string, number, boolean) are rendered as text. `NULL`,
/// collections and binaries read as absent, so one odd attribute never
/// hides the rest of the record.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    match item.get(key)? {
        AttributeValue::S(s) | AttributeValue::N(s) => Some(s.clone()),
        AttributeValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("u1")
            .with_first_name("Ann")
            .with_last_name("Lee")
            .with_email("a@x.com")
    }

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();
        let item = user_to_item(&user);
        let parsed = item_to_user(&item);

        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_item_uses_record_attribute_names() {
        let item = user_to_item(&sample_user());

        assert_eq!(item.get("user_id").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("firstName").unwrap().as_s().unwrap(), "Ann");
        assert_eq!(item.get("lastName").unwrap().as_s().unwrap(), "Lee");
        assert_eq!(item.get("email").unwrap().as_s().unwrap(), "a@x.com");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let item = post_to_item(&Post::new("p1").with_title("Hello"));

        assert_eq!(item.len(), 2);
        assert!(!item.contains_key("content"));
    }

    #[test]
    fn test_item_without_key_converts() {
        let mut item = HashMap::new();
        item.insert("title".to_string(), AttributeValue::S("Orphan".to_string()));

        let post = item_to_post(&item);

        assert_eq!(post.post_id, None);
        assert_eq!(post.title.as_deref(), Some("Orphan"));
    }

    #[test]
    fn test_scalar_attributes_render_as_text() {
        let mut item = HashMap::new();
        item.insert("post_id".to_string(), AttributeValue::N("42".to_string()));
        item.insert("title".to_string(), AttributeValue::Bool(true));
        item.insert("content".to_string(), AttributeValue::Null(true));

        let post = item_to_post(&item);

        assert_eq!(post.post_id.as_deref(), Some("42"));
        assert_eq!(post.title.as_deref(), Some("true"));
        assert_eq!(post.content, None);
    }

    #[test]
    fn test_unsupported_attribute_is_ignored() {
        let mut item = user_to_item(&sample_user());
        item.insert(
            "email".to_string(),
            AttributeValue::L(vec![AttributeValue::S("a@x.com".to_string())]),
        );
        item.insert("lastName".to_string(), AttributeValue::M(HashMap::new()));

        let user = item_to_user(&item);

        assert_eq!(user, User::new("u1").with_first_name("Ann"));
    }
}
