use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("no edit feed configured: pass --edits or --sample, or set feeds.edits in competition.toml")]
    NoEditFeed,

    #[error("edit feed {0}: {1}")]
    EditFeed(String, String),

    #[error("unknown contest: {0}")]
    UnknownContest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
