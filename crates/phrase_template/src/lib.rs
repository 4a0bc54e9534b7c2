//! Compiled text patterns with named placeholders.
//!
//! A [`Phrase`] is compiled once from pattern text such as `"{a} and {b}"`.
//! Values are bound to its keys using a [`Binding`], which is then formatted
//! into a string. Formatting only succeeds if the set of bound keys is
//! _exactly_ the set of keys referenced by the pattern, so a typo in a
//! translation shows up as an error instead of as silently broken text.
//!
//! ```
//! use phrase_template::Phrase;
//!
//! let phrase: Phrase = "{name} has {count} apples".parse()?;
//! let s = phrase.put("name", "Alice").put("count", "3").format()?;
//! assert_eq!(s, "Alice has 3 apples");
//! # Ok::<(), phrase_template::PhraseError>(())
//! ```
//!
//! # Syntax
//!
//! - `{key}` is a placeholder. Keys start with a lowercase ASCII letter and
//!   may contain lowercase ASCII letters and underscores.
//! - `{{` is a literal `{`.
//! - Any other text, including a lone `}`, is literal.

#[macro_use]
extern crate lazy_static;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use regex::Regex;

mod error;

pub use error::PhraseError;

lazy_static! {
    static ref KEY_REGEX: Regex = Regex::new(r"^[a-z][a-z_]*$").expect("bad regex");
}

/// Piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text, with escapes already resolved.
    Literal(String),
    /// Placeholder for the value of a key.
    Key(String),
}

/// Compiled pattern containing named placeholders.
///
/// A `Phrase` is immutable. Binding values creates a separate [`Binding`], so
/// the same `Phrase` may be formatted any number of times, from any number of
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    source: String,
    segments: Vec<Segment>,
    keys: IndexSet<String>,
}

impl FromStr for Phrase {
    type Err = PhraseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = vec![];
        let mut keys = IndexSet::new();
        let mut literal = String::new();

        let mut chars = s.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }

            // escaped brace
            if chars.next_if(|&(_, c)| c == '{').is_some() {
                literal.push('{');
                continue;
            }

            let key_start = i + 1;
            let Some(key_len) = s[key_start..].find('}') else {
                return Err(PhraseError::syntax(i, "unclosed placeholder"));
            };
            let key = &s[key_start..key_start + key_len];
            if key.is_empty() {
                return Err(PhraseError::syntax(i, "empty placeholder"));
            }
            if !KEY_REGEX.is_match(key) {
                return Err(PhraseError::syntax(
                    i,
                    format!("invalid key {{{key}}}; keys must match [a-z][a-z_]*"),
                ));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Key(key.to_owned()));
            keys.insert(key.to_owned());

            // skip the key and its closing brace
            while chars.next_if(|&(j, _)| j <= key_start + key_len).is_some() {}
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: s.to_owned(),
            segments,
            keys,
        })
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Phrase {
    /// Returns the original pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the compiled segments of the pattern.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the distinct keys referenced by the pattern, in order of first
    /// occurrence.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Returns whether the pattern references `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Starts a binding with no keys bound.
    pub fn bind(&self) -> Binding<'_> {
        Binding {
            phrase: self,
            values: HashMap::new(),
        }
    }

    /// Starts a binding with `key` bound to `value`.
    pub fn put<'a>(&'a self, key: &'a str, value: impl Into<Cow<'a, str>>) -> Binding<'a> {
        self.bind().put(key, value)
    }
}

/// Set of values bound to the keys of a [`Phrase`].
#[derive(Debug, Clone)]
#[must_use = "a binding does nothing until it is formatted"]
pub struct Binding<'a> {
    phrase: &'a Phrase,
    values: HashMap<&'a str, Cow<'a, str>>,
}

impl<'a> Binding<'a> {
    /// Binds `key` to `value`, replacing any existing value for `key`.
    ///
    /// Binding a key that the pattern does not reference is not an error
    /// here, but [`Binding::format()`] will fail.
    pub fn put(mut self, key: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Binds `key` to `value` only if the pattern references `key`.
    pub fn put_optional(self, key: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        if self.phrase.has_key(key) {
            self.put(key, value)
        } else {
            self
        }
    }

    /// Formats the pattern using the bound values.
    ///
    /// Returns an error if any bound key is not referenced by the pattern or
    /// any referenced key is not bound.
    pub fn format(&self) -> Result<String, PhraseError> {
        let mut unknown: Vec<String> = self
            .values
            .keys()
            .filter(|&&k| !self.phrase.has_key(k))
            .map(|&k| k.to_owned())
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(PhraseError::UnknownKeys(unknown));
        }

        let missing: Vec<String> = self
            .phrase
            .keys()
            .filter(|&k| !self.values.contains_key(k))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(PhraseError::MissingKeys(missing));
        }

        let mut ret = String::new();
        for segment in &self.phrase.segments {
            match segment {
                Segment::Literal(s) => ret += s,
                Segment::Key(k) => ret += &self.values[k.as_str()],
            }
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests;
