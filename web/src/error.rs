use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SUGGEST_API_URL is not a valid URL ({value}): {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("SUGGEST_API_URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}

/// Every way a suggestion request can fail. The page treats all of them as
/// one failure class; the variants only matter for server logs.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("suggestion service responded with status {0}")]
    Status(u16),

    #[error("suggestion service sent an unreadable payload: {0}")]
    Decode(#[source] reqwest::Error),
}
