mod error;
mod keys;
mod traits;

pub use error::{RepositoryError, Result};
pub use keys::{
    assignment_value, item_key, lookup_key, CONTENT_PLACEHOLDER, POST_KEY, TITLE_PLACEHOLDER,
    USER_KEY,
};
pub use traits::{PostRepository, UserRepository};
