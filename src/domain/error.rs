use thiserror::Error;

/// Every way a completion request can fail.
///
/// The set is closed: callers dispatch on the variant, never on the message text.
/// Display strings are the ones surfaced to operators and logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// No API credential was configured.
    #[error("API configuration error")]
    Configuration,

    /// The request never produced an HTTP response (DNS, connect, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("API request failed: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Success status, but the body did not carry a usable `choices` list.
    #[error("Invalid API response format")]
    MalformedResponse,

    /// The first choice was present but its content was empty.
    #[error("Empty response from API")]
    EmptyReply,

    /// A failure that fits none of the above.
    #[error("An unexpected error occurred while processing your request")]
    Unexpected(String),
}

impl CompletionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn http(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, Self::MalformedResponse)
    }

    pub fn is_empty_reply(&self) -> bool {
        matches!(self, Self::EmptyReply)
    }

    /// HTTP status code, if the failure came from a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
