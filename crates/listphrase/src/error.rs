use phrase_template::PhraseError;
use thiserror::Error;

use crate::PatternPosition;

/// Error produced when a list pattern does not reference exactly the keys
/// `{a}` and `{b}`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("{position} list pattern should only contain keys {{a}} and {{b}}")]
pub struct InvalidPatternError {
    /// Which of the three patterns was invalid.
    pub position: PatternPosition,
}

/// Error produced when constructing a [`crate::ListPhrase`].
///
/// `E` is the error type of the underlying pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<E = PhraseError> {
    /// Pattern has the wrong set of keys.
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPatternError),
    /// No string with the given ID exists in the string store.
    #[error("no string with ID `{id}`")]
    MissingString {
        /// String ID that was looked up.
        id: String,
    },
    /// Error from the underlying pattern, such as a syntax error.
    #[error(transparent)]
    Template(E),
}

/// Error produced when loading a [`crate::Strings`] table.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading the file.
    #[error("error reading string table: {0}")]
    Io(#[from] std::io::Error),
    /// KDL syntax error.
    #[error("error parsing string table: {0}")]
    Kdl(#[from] kdl::KdlError),
}

impl From<PhraseError> for Error<PhraseError> {
    fn from(value: PhraseError) -> Self {
        Self::Template(value)
    }
}
