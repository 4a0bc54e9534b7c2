use itertools::Itertools;
use thiserror::Error;

/// Error produced when compiling or formatting a [`crate::Phrase`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhraseError {
    /// Pattern text is malformed.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset of the offending `{`.
        offset: usize,
        /// Description of the problem.
        message: String,
    },
    /// Values were bound to keys that the pattern does not reference.
    #[error("pattern does not contain keys {}", fmt_keys(.0))]
    UnknownKeys(Vec<String>),
    /// Keys referenced by the pattern were not bound.
    #[error("missing values for keys {}", fmt_keys(.0))]
    MissingKeys(Vec<String>),
}

impl PhraseError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Returns whether the error is caused by a mismatch between the bound
    /// keys and the keys in the pattern.
    pub fn is_key_mismatch(&self) -> bool {
        matches!(self, Self::UnknownKeys(_) | Self::MissingKeys(_))
    }
}

fn fmt_keys(keys: &[String]) -> String {
    keys.iter().map(|k| format!("{{{k}}}")).join(", ")
}
