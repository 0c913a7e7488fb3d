use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Flag combinations that have no encoding in the stop-name vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("chinese page count must be 1, 2 or 3, got {0}")]
    InvalidChinesePages(u8),

    #[error("a 6-wide/8-wide split needs at least 2 chinese pages")]
    UnrepresentableSplit,
}
