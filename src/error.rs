use thiserror::Error;

#[derive(Error, Debug)]
pub enum BallotFinderError {
    #[error("Missing config.json at: {0}")]
    ConfigNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown language '{0}' (configured: {1})")]
    UnknownLanguage(String, String),

    #[error("Unknown ballot type '{0}' (configured: {1})")]
    UnknownBallotType(String, String),

    #[error("Could not find a registered PDF print handler for: {0}")]
    PrintHandlerMissing(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] ballot_finder_common::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BallotFinderError>;
