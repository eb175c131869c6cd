use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    #[error("invalid navigator config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("presenter failure: {0}")]
    Presenter(String),

    #[error("chart setup failure for mount `{mount_id}`: {reason}")]
    Chart { mount_id: String, reason: String },
}
