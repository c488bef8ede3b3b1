//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    fn keyed_by(table_name: &str, partition_key: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            partition_key: KeyAttribute {
                name: partition_key.to_string(),
                attribute_type: AttributeType::String,
            },
            billing_mode: BillingMode::PayPerRequest,
        }
    }
}

/// The users table, keyed by `user_id`.
pub fn users_table_config(table_name: &str) -> TableConfig {
    TableConfig::keyed_by(table_name, "user_id")
}

/// The posts table, keyed by `post_id`.
pub fn posts_table_config(table_name: &str) -> TableConfig {
    TableConfig::keyed_by(table_name, "post_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_use_identity_attributes_as_hash_keys() {
        let users = users_table_config("users-dev");
        let posts = posts_table_config("posts");

        assert_eq!(users.table_name, "users-dev");
        assert_eq!(users.partition_key.name, "user_id");
        assert_eq!(posts.partition_key.name, "post_id");
        assert_eq!(posts.billing_mode, BillingMode::PayPerRequest);
    }
}
