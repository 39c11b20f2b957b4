use sentimeter_core::{
    ConfigError, CoreError, ErrorExt, MappingError, RedditApiError, TwitterApiError,
};

#[test]
fn test_error_codes() {
    let twitter_error = CoreError::TwitterApi(TwitterApiError::InvalidToken);
    assert_eq!(twitter_error.error_code(), "TWITTER_API");

    let reddit_error = CoreError::RedditApi(RedditApiError::InvalidToken);
    assert_eq!(reddit_error.error_code(), "REDDIT_API");

    let mapping_error = CoreError::Mapping(MappingError::MissingField {
        platform: "twitter".to_string(),
        field: "id".to_string(),
    });
    assert_eq!(mapping_error.error_code(), "MAPPING");

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "SENTIMETER_MAX_TWEETS".to_string(),
        value: "many".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");
}

#[test]
fn test_user_friendly_messages() {
    let twitter_error = CoreError::TwitterApi(TwitterApiError::InvalidToken);
    let message = twitter_error.user_friendly_message();
    assert!(!message.is_empty());
    assert!(message.contains("bearer token"));

    let reddit_error = CoreError::RedditApi(RedditApiError::SubredditNotFound {
        subreddit: "rustlang".to_string(),
    });
    assert!(reddit_error.user_friendly_message().contains("rustlang"));

    let mapping_error = CoreError::Mapping(MappingError::MissingField {
        platform: "reddit".to_string(),
        field: "id".to_string(),
    });
    assert!(mapping_error.user_friendly_message().contains("'id'"));
}

#[test]
fn test_api_error_conversion() {
    let error: CoreError = TwitterApiError::RateLimitExceeded { retry_after: 60 }.into();
    assert!(matches!(error, CoreError::TwitterApi(_)));

    let error: CoreError = RedditApiError::ServerError { status_code: 503 }.into();
    assert!(matches!(error, CoreError::RedditApi(_)));
}

#[test]
fn test_mapping_error_display() {
    let error = MappingError::MissingField {
        platform: "twitter".to_string(),
        field: "id".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Required field 'id' missing in twitter record"
    );
}
