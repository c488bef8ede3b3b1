use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the users table (default: "users")
    pub users_table: String,
    /// Name of the posts table (default: "posts")
    pub posts_table: String,
    /// AWS region of the storage client (default: "us-east-1")
    pub region: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: none)
    pub endpoint_url: Option<String>,
    /// Per-request deadline in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `USERS_TABLE` - Users table name (default: "users")
    /// - `POSTS_TABLE` - Posts table name (default: "posts")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request deadline (default: 10)
    pub fn from_env() -> Self {
        Self {
            users_table: env::var("USERS_TABLE").unwrap_or_else(|_| "users".to_string()),
            posts_table: env::var("POSTS_TABLE").unwrap_or_else(|_| "posts".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns a display string for the storage target.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "USERS_TABLE",
        "POSTS_TABLE",
        "AWS_REGION",
        "AWS_ENDPOINT_URL",
        "REQUEST_TIMEOUT_SECONDS",
    ];

    fn config() -> Config {
        Config {
            users_table: "users".to_string(),
            posts_table: "posts".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            request_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            ..config()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_target_display() {
        let remote = config();
        let local = Config {
            endpoint_url: Some("http://localhost:8000".to_string()),
            ..config()
        };

        assert_eq!(remote.target_display(), "AWS DynamoDB (region: us-east-1)");
        assert_eq!(
            local.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }

    // The process environment is shared across test threads.
    #[test]
    fn test_defaults_and_overrides() {
        for var in VARS {
            env::remove_var(var);
        }

        assert_eq!(Config::from_env(), config());

        env::set_var("USERS_TABLE", "users-dev");
        env::set_var("POSTS_TABLE", "posts-dev");
        env::set_var("AWS_REGION", "eu-west-1");
        env::set_var("AWS_ENDPOINT_URL", "http://localhost:8000");
        env::set_var("REQUEST_TIMEOUT_SECONDS", "not-a-number");

        let config = Config::from_env();

        for var in VARS {
            env::remove_var(var);
        }

        assert_eq!(config.users_table, "users-dev");
        assert_eq!(config.posts_table, "posts-dev");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
