use thiserror::Error;

/// Errors from talking to the remote APIs.
///
/// Kept `Clone + PartialEq` so a loader can hold the last failure in view
/// state next to its snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A scoped request was attempted without the identifier it needs.
    #[error("missing {0}")]
    MissingPrecondition(&'static str),
}

impl ClientError {
    /// Generic message shown to the user. Details only go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "Erro de conexão. Tente novamente.",
            ClientError::Status { .. } | ClientError::Decode(_) => "Erro ao buscar os dados",
            ClientError::MissingPrecondition(_) => "Operação indisponível no momento",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
