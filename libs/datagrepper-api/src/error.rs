/// Message returned to callers for any non-success HTTP status.
pub const UNAVAILABLE_MESSAGE: &str = "Error: Could not connect to Datagrepper";

#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("invalid endpoint '{endpoint}': {detail}")]
    Endpoint { endpoint: String, detail: String },

    #[error("package name is empty")]
    EmptyPackage,

    /// Datagrepper answered with a non-2xx status.
    #[error("Error: Could not connect to Datagrepper")]
    Unavailable { status: reqwest::StatusCode },

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ConnectorError {
    /// True for the HTTP-level failure, false for transport and decode errors.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        let err = ConnectorError::Unavailable {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), UNAVAILABLE_MESSAGE);
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_decode_is_transparent() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = inner.to_string();
        let err = ConnectorError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_unavailable());
    }
}
