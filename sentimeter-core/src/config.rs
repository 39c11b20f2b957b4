use crate::error::ConfigError;
use std::env;

pub const DEFAULT_MAX_POSTS: u32 = 100;
pub const DEFAULT_USER_AGENT: &str = "sentimeter/0.1";

/// Credentials and analysis settings, loaded from the environment.
///
/// Credentials are optional: a missing credential disables that source
/// instead of failing the run. The values are handed to the API clients
/// as explicit constructor arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub twitter_bearer_token: Option<String>,
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub reddit_user_agent: String,
    pub max_tweets: u32,
    pub max_reddit_posts: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            twitter_bearer_token: read_optional("TWITTER_BEARER_TOKEN"),
            reddit_client_id: read_optional("REDDIT_CLIENT_ID"),
            reddit_client_secret: read_optional("REDDIT_CLIENT_SECRET"),
            reddit_user_agent: read_optional("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_tweets: read_limit("SENTIMETER_MAX_TWEETS")?,
            max_reddit_posts: read_limit("SENTIMETER_MAX_REDDIT_POSTS")?,
        })
    }

    pub fn twitter_configured(&self) -> bool {
        self.twitter_bearer_token.is_some()
    }

    pub fn reddit_configured(&self) -> bool {
        self.reddit_client_id.is_some() && self.reddit_client_secret.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            twitter_bearer_token: None,
            reddit_client_id: None,
            reddit_client_secret: None,
            reddit_user_agent: DEFAULT_USER_AGENT.to_string(),
            max_tweets: DEFAULT_MAX_POSTS,
            max_reddit_posts: DEFAULT_MAX_POSTS,
        }
    }
}

fn read_optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_limit(name: &str) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: name.to_string(),
            value,
        }),
        Err(_) => Ok(DEFAULT_MAX_POSTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Env vars are process-global and the test harness runs in
    /// parallel, so each test uses its own variable name and restores
    /// the previous state on drop.
    struct EnvGuard {
        name: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(name: &'static str, value: &str) -> Self {
            let previous = env::var(name).ok();
            env::set_var(name, value);
            Self { name, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => env::set_var(self.name, value),
                None => env::remove_var(self.name),
            }
        }
    }

    #[test]
    fn missing_limit_var_falls_back_to_default() {
        env::remove_var("SENTIMETER_TEST_LIMIT_ABSENT");
        assert_eq!(
            read_limit("SENTIMETER_TEST_LIMIT_ABSENT").unwrap(),
            DEFAULT_MAX_POSTS
        );
    }

    #[test]
    fn non_numeric_limit_is_a_config_error() {
        let _guard = EnvGuard::set("SENTIMETER_TEST_LIMIT_BAD", "lots");
        let err = read_limit("SENTIMETER_TEST_LIMIT_BAD").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let _guard = EnvGuard::set("SENTIMETER_TEST_BLANK_CRED", "   ");
        assert_eq!(read_optional("SENTIMETER_TEST_BLANK_CRED"), None);
    }

    #[test]
    fn env_guard_restores_previous_value() {
        env::set_var("SENTIMETER_TEST_GUARDED", "before");
        {
            let _guard = EnvGuard::set("SENTIMETER_TEST_GUARDED", "during");
            assert_eq!(env::var("SENTIMETER_TEST_GUARDED").unwrap(), "during");
        }
        assert_eq!(env::var("SENTIMETER_TEST_GUARDED").unwrap(), "before");
        env::remove_var("SENTIMETER_TEST_GUARDED");
    }

    #[test]
    fn default_config_has_no_sources() {
        let config = AppConfig::default();
        assert!(!config.twitter_configured());
        assert!(!config.reddit_configured());
        assert_eq!(config.max_tweets, DEFAULT_MAX_POSTS);
    }
}
