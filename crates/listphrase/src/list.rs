use std::fmt;
use std::str::FromStr;

use phrase_template::{Phrase, PhraseError};

use crate::pattern::validate;
use crate::{Error, PairPattern, PatternPosition};

/// Formats a list in a size-dependent way.
///
/// All three patterns are checked when the `ListPhrase` is constructed, so
/// formatting a list never fails because of a malformed pattern. A
/// `ListPhrase` is never mutated after construction; each call to a `format`
/// method is independent of all others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPhrase<P = Phrase> {
    two_element: P,
    non_final: P,
    final_element: P,
}

impl FromStr for ListPhrase {
    type Err = Error;

    /// Constructs a `ListPhrase` that uses the same pattern for all elements.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::uniform(s.parse()?)
    }
}

impl ListPhrase {
    /// Compiles and validates three patterns.
    ///
    /// See [`ListPhrase::new()`] for the meaning of each pattern.
    pub fn from_patterns(
        two_element: &str,
        non_final: &str,
        final_element: &str,
    ) -> Result<Self, Error<PhraseError>> {
        Self::new(two_element.parse()?, non_final.parse()?, final_element.parse()?)
    }
}

impl<P: PairPattern> ListPhrase<P> {
    /// Validates three patterns and constructs a `ListPhrase`.
    ///
    /// - `two_element` is the separator for 2-element lists.
    /// - `non_final` is the separator for non-final elements of lists with 3
    ///   or more elements.
    /// - `final_element` is the separator for the final element of lists with
    ///   3 or more elements.
    ///
    /// Returns an error if any pattern does not reference exactly the keys
    /// `{a}` and `{b}`.
    pub fn new(two_element: P, non_final: P, final_element: P) -> Result<Self, Error<P::Error>> {
        Ok(Self {
            two_element: validate(PatternPosition::TwoElement, two_element)?,
            non_final: validate(PatternPosition::NonFinal, non_final)?,
            final_element: validate(PatternPosition::Final, final_element)?,
        })
    }

    /// Constructs a `ListPhrase` that uses the same pattern for all elements.
    pub fn uniform(pattern: P) -> Result<Self, Error<P::Error>>
    where
        P: Clone,
    {
        Self::new(pattern.clone(), pattern.clone(), pattern)
    }

    /// Returns the separator for 2-element lists.
    pub fn two_element_pattern(&self) -> &P {
        &self.two_element
    }
    /// Returns the separator for non-final elements of lists with 3 or more
    /// elements.
    pub fn non_final_element_pattern(&self) -> &P {
        &self.non_final
    }
    /// Returns the separator for the final element of lists with 3 or more
    /// elements.
    pub fn final_element_pattern(&self) -> &P {
        &self.final_element
    }

    /// Returns the pattern at `position`.
    pub fn pattern(&self, position: PatternPosition) -> &P {
        match position {
            PatternPosition::TwoElement => &self.two_element,
            PatternPosition::NonFinal => &self.non_final,
            PatternPosition::Final => &self.final_element,
        }
    }

    /// Formats a list of items using their [`fmt::Display`] implementations.
    ///
    /// `items` may be any iterable collection; items are joined in the order
    /// that the collection iterates over them.
    pub fn format<I>(&self, items: I) -> Result<String, P::Error>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.format_with(items, |item| item.to_string())
    }

    /// Formats a list of optional items using their [`fmt::Display`]
    /// implementations. `None` is formatted as an empty string.
    pub fn format_optional<I, T>(&self, items: I) -> Result<String, P::Error>
    where
        I: IntoIterator<Item = Option<T>>,
        T: fmt::Display,
    {
        self.format_with(items, |item| {
            item.map(|it| it.to_string()).unwrap_or_default()
        })
    }

    /// Formats a list of items using `formatter` to convert each item to a
    /// string.
    ///
    /// `formatter` is called exactly once on every item, in order, including
    /// items that are `None` when the item type is an [`Option`].
    pub fn format_with<I, F, S>(&self, items: I, formatter: F) -> Result<String, P::Error>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> S,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(formatter).map(Into::into).collect();
        self.fold(&items)
    }

    fn fold(&self, items: &[String]) -> Result<String, P::Error> {
        log::trace!("folding list of {} items", items.len());

        match items {
            [] => Ok(String::new()),
            [only] => Ok(only.clone()),
            [a, b] => self.two_element.format_pair(a, b),
            [first, middle @ .., last] => {
                let mut result = first.clone();
                for item in middle {
                    result = self.non_final.format_pair(&result, item)?;
                }
                self.final_element.format_pair(&result, last)
            }
        }
    }
}
