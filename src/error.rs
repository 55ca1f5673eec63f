use async_openai::error::OpenAIError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems, surfaced before any evaluation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "OPENAI_API_KEY is not set. Export it, or add `api_key` to the [openai] section of the config file."
    )]
    MissingApiKey,

    #[error("failed to read config file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Unparsable {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid temperature value {0:?}")]
    InvalidTemperature(String),

    #[error("temperature {0} is outside the supported 0-2 range")]
    TemperatureOutOfRange(f64),
}

/// The single outbound model call failed. The call is never retried
/// automatically; the user resubmits manually.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("could not reach the model endpoint: {0}")]
    Transport(String),

    #[error("model endpoint rejected the request: {0}")]
    Api(String),

    #[error("could not build the completion request: {0}")]
    InvalidRequest(String),

    #[error("model returned an empty response")]
    EmptyResponse,
}

impl From<OpenAIError> for EvalError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::ApiError(api) => EvalError::Api(api.message),
            OpenAIError::Reqwest(e) => EvalError::Transport(e.to_string()),
            OpenAIError::InvalidArgument(message) => EvalError::InvalidRequest(message),
            other => EvalError::Transport(other.to_string()),
        }
    }
}

/// The model payload could not be decoded into a `PromptAnalysis`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not a JSON object: {0}")]
    InvalidJson(String),

    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` has the wrong type, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("score {0} is not an integer between 0 and 100")]
    InvalidScore(serde_json::Value),
}
