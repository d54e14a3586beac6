#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Package(String),

    #[error("http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Connector(#[from] datagrepper_api::ConnectorError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output: {0}")]
    Io(#[from] std::io::Error),
}
