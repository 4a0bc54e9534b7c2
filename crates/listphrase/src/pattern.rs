use std::fmt;

use phrase_template::{Phrase, PhraseError};

use crate::{Error, InvalidPatternError};

/// Pattern that joins two strings, bound to the keys `{a}` and `{b}`.
pub trait PairPattern {
    /// Error produced when formatting fails.
    type Error: std::error::Error;

    /// Binds `a` and `b` and formats the pattern.
    ///
    /// This must succeed if and only if the pattern references exactly the
    /// keys `{a}` and `{b}`. It is called once per join, so it must not depend
    /// on state left over from a previous call.
    fn format_pair(&self, a: &str, b: &str) -> Result<String, Self::Error>;

    /// Returns whether `error` is caused by the pattern referencing the wrong
    /// set of keys.
    fn is_key_mismatch(error: &Self::Error) -> bool;
}

impl PairPattern for Phrase {
    type Error = PhraseError;

    fn format_pair(&self, a: &str, b: &str) -> Result<String, Self::Error> {
        self.put("a", a).put("b", b).format()
    }

    fn is_key_mismatch(error: &Self::Error) -> bool {
        error.is_key_mismatch()
    }
}

/// Position of a pattern within a [`crate::ListPhrase`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PatternPosition {
    /// Separator for lists with exactly 2 elements.
    TwoElement,
    /// Separator for all but the last element of lists with 3 or more
    /// elements.
    NonFinal,
    /// Separator for the last element of lists with 3 or more elements.
    Final,
}

impl fmt::Display for PatternPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternPosition::TwoElement => write!(f, "two-element"),
            PatternPosition::NonFinal => write!(f, "non-final"),
            PatternPosition::Final => write!(f, "final"),
        }
    }
}

/// Returns `pattern` if it references exactly the keys `{a}` and `{b}`.
///
/// Other errors from the pattern are returned unchanged.
pub(crate) fn validate<P: PairPattern>(
    position: PatternPosition,
    pattern: P,
) -> Result<P, Error<P::Error>> {
    match pattern.format_pair("", "") {
        Ok(_) => {
            log::trace!("validated {position} list pattern");
            Ok(pattern)
        }
        Err(e) if P::is_key_mismatch(&e) => Err(InvalidPatternError { position }.into()),
        Err(e) => Err(Error::Template(e)),
    }
}
