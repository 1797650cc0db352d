use thiserror::Error;

/// Rejected page content. Raised when a typed content record is built from
/// values that the page could not render meaningfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("progress percentage {value} is outside 0..=100")]
    PercentageOutOfRange { value: u32 },

    #[error("unparseable start date: {value:?}")]
    InvalidDate { value: String },

    #[error("tagline list must contain at least one entry")]
    EmptyTaglines,
}

pub type Result<T> = std::result::Result<T, ContentError>;
