pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid rendering context: {0}")]
    Context(#[source] serde_json::Error),

    #[error("invalid preview user: {0}")]
    PreviewUser(#[source] serde_json::Error),

    #[error("failed to read rendering context: {0}")]
    ReadContext(#[source] std::io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
