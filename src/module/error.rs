use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Error fetching module {module} ({url}): {source}")]
    Fetch {
        module: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error parsing JSON for {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response for {url}, received HTTP {status}")]
    Upstream {
        url: String,
        status: u16,
        payload: Option<serde_json::Value>,
    },

    #[error("unexpected response for module {module} ({url}): {body}")]
    UnexpectedResponse {
        module: String,
        url: String,
        status: u16,
        body: String,
    },
}

impl LookupError {
    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Upstream { status, .. }
            | LookupError::UnexpectedResponse { status, .. } => Some(*status),
            LookupError::Fetch { source, .. } => source.status().map(|s| s.as_u16()),
            LookupError::Client(_) | LookupError::Parse { .. } => None,
        }
    }
}
