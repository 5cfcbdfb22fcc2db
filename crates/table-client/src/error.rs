//! Client Error Types
//!
//! Every failed table call surfaces as a `ClientError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never reached the service, or no response came back
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body did not match the expected envelope
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ClientError::Server { status: 502, body: "bad gateway".to_string() };
        assert_eq!(err.to_string(), "server error 502: bad gateway");
        assert!(err.is_server());
        assert!(!err.is_network());
    }

    #[test]
    fn test_from_serde() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
