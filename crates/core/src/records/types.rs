/// A user record as stored in the users collection.
///
/// Every field is optional. The store decides whether a record without a
/// `user_id` is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates a user with only its identity key set.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A post record as stored in the posts collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    pub post_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Creates a post with only its identity key set.
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: Some(post_id.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// The value bound to one field of an update.
///
/// `Missing` means the caller sent nothing for the field, which the store
/// rejects. `Null` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Assignment {
    #[default]
    Missing,
    Null,
    Value(String),
}

impl Assignment {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    /// The field value after the assignment, or `None` when nothing was sent.
    pub fn resolve(&self) -> Option<Option<&str>> {
        match self {
            Assignment::Missing => None,
            Assignment::Null => Some(None),
            Assignment::Value(value) => Some(Some(value)),
        }
    }
}

/// The two assignments of a post update.
///
/// Both fields are always assigned together. A `Missing` field is passed
/// through to the store as-is and it is up to the store to reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Assignment,
    pub content: Assignment,
}

impl PostChanges {
    /// Applies the assignments to a post. `Missing` fields are left untouched.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = self.title.resolve() {
            post.title = title.map(str::to_string);
        }
        if let Some(content) = self.content.resolve() {
            post.content = content.map(str::to_string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_fields() {
        let user = User::new("u1")
            .with_first_name("Ann")
            .with_last_name("Lee")
            .with_email("a@x.com");

        assert_eq!(user.user_id.as_deref(), Some("u1"));
        assert_eq!(user.first_name.as_deref(), Some("Ann"));
        assert_eq!(user.last_name.as_deref(), Some("Lee"));
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert_eq!(Post::new("p1").title, None);
    }

    #[test]
    fn test_assignment_resolve() {
        assert_eq!(Assignment::Missing.resolve(), None);
        assert_eq!(Assignment::Null.resolve(), Some(None));
        assert_eq!(Assignment::value("T").resolve(), Some(Some("T")));
    }

    #[test]
    fn test_changes_overwrite_and_clear_fields() {
        let mut post = Post::new("p1").with_title("old").with_content("old body");
        let changes = PostChanges {
            title: Assignment::value("new"),
            content: Assignment::Null,
        };

        changes.apply_to(&mut post);

        assert_eq!(post, Post::new("p1").with_title("new"));
    }

    #[test]
    fn test_missing_assignment_leaves_field() {
        let mut post = Post::new("p1").with_title("old");

        PostChanges::default().apply_to(&mut post);

        assert_eq!(post, Post::new("p1").with_title("old"));
    }
}
