//! Key rules shared by the storage backends.
//!
//! Pure functions reproducing the validation DynamoDB applies to item keys and
//! update expressions, so every backend rejects the same inputs with the same
//! messages.

use super::{RepositoryError, Result};
use crate::records::Assignment;

/// Hash key attribute of the users collection.
pub const USER_KEY: &str = "user_id";
/// Hash key attribute of the posts collection.
pub const POST_KEY: &str = "post_id";

/// Expression placeholder bound to a post's `title` on update.
pub const TITLE_PLACEHOLDER: &str = ":t";
/// Expression placeholder bound to a post's `content` on update.
pub const CONTENT_PLACEHOLDER: &str = ":s";

/// Validates the key of an item being written in full.
///
/// Fails when the item has no key attribute or when the key is empty.
pub fn item_key<'a>(attribute: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        None => Err(RepositoryError::InvalidData(format!(
            "One or more parameter values were invalid: Missing the key {attribute} in the item"
        ))),
        Some(value) => non_empty_key(attribute, value),
    }
}

/// Validates a key used to address an existing item (update, delete).
pub fn lookup_key<'a>(attribute: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        None => Err(RepositoryError::InvalidData(
            "The provided key element does not match the schema".to_string(),
        )),
        Some(value) => non_empty_key(attribute, value),
    }
}

/// Validates that an update expression placeholder has a value bound to it.
///
/// A `Null` assignment is bound and resolves to `None`.
pub fn assignment_value<'a>(
    placeholder: &str,
    value: &'a Assignment,
) -> Result<Option<&'a str>> {
    value.resolve().ok_or_else(|| {
        RepositoryError::InvalidData(format!(
            "Invalid UpdateExpression: An expression attribute value used in expression is not defined; attribute value: {placeholder}"
        ))
    })
}

fn non_empty_key<'a>(attribute: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(RepositoryError::InvalidData(format!(
            "One or more parameter values are not valid. The AttributeValue for a key attribute cannot contain an empty string value. Key: {attribute}"
        )));
    }
    Ok(value)
}
