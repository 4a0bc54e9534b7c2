//! String tables that list patterns can be looked up from.
//!
//! Any type implementing [`StringStore`] can be used with
//! [`ListPhrase::from_store()`] and [`ListPhrase::from_store_ids()`]. The
//! [`Strings`] table is loaded from a KDL document in which each node defines
//! one string, and child nodes define strings with dotted IDs:
//!
//! ```kdl
//! list {
//!     and {
//!         two "{a} and {b}"
//!         middle "{a}, {b}"
//!         end "{a}, and {b}"
//!     }
//!     comma "{a}, {b}"
//! }
//! ```
//!
//! This defines `list.and.two`, `list.and.middle`, `list.and.end`, and
//! `list.comma`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::path::Path;

use indexmap::IndexMap;
use kdl::{KdlDocument, KdlNode};
use phrase_template::{Phrase, PhraseError};

use crate::{Error, ListPhrase, StoreError};

/// Source of strings, looked up by ID.
pub trait StringStore {
    /// Returns the string with ID `id`, or `None` if there is none.
    fn get_string(&self, id: &str) -> Option<&str>;
}

impl<S: BuildHasher> StringStore for HashMap<String, String, S> {
    fn get_string(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl StringStore for BTreeMap<String, String> {
    fn get_string(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl<S: BuildHasher> StringStore for IndexMap<String, String, S> {
    fn get_string(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl StringStore for Strings {
    fn get_string(&self, id: &str) -> Option<&str> {
        self.get(id)
    }
}

impl ListPhrase {
    /// Looks up a pattern from `store` and uses it for all elements.
    pub fn from_store<S: StringStore + ?Sized>(
        store: &S,
        id: &str,
    ) -> Result<Self, Error<PhraseError>> {
        Self::uniform(lookup(store, id)?)
    }

    /// Looks up three patterns from `store`.
    ///
    /// See [`ListPhrase::new()`] for the meaning of each pattern.
    pub fn from_store_ids<S: StringStore + ?Sized>(
        store: &S,
        two_element_id: &str,
        non_final_id: &str,
        final_id: &str,
    ) -> Result<Self, Error<PhraseError>> {
        Self::new(
            lookup(store, two_element_id)?,
            lookup(store, non_final_id)?,
            lookup(store, final_id)?,
        )
    }
}

fn lookup<S: StringStore + ?Sized>(store: &S, id: &str) -> Result<Phrase, Error<PhraseError>> {
    let s = store.get_string(id).ok_or_else(|| Error::MissingString {
        id: id.to_owned(),
    })?;
    Ok(s.parse()?)
}

/// Nonfatal problem encountered while loading a string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Line number (starting from 1).
    pub line: usize,
    /// Column number (starting from 0).
    pub column: usize,
    /// Description of the problem.
    pub msg: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { line, column, msg } = self;
        write!(f, "{msg} at {line}:{column}")
    }
}

/// Table of strings, indexed by dotted ID.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Strings(IndexMap<String, String>);

impl Strings {
    /// Constructs an empty string table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a string table from a KDL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<(Self, Vec<Warning>), StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loading string table from {}", path.display());
        Self::from_kdl_str(&contents)
    }

    /// Loads a string table from a KDL document.
    ///
    /// Malformed nodes are skipped and reported as warnings. The first
    /// definition of a string wins over later ones.
    pub fn from_kdl_str(src: &str) -> Result<(Self, Vec<Warning>), StoreError> {
        let doc: KdlDocument = src.parse()?;

        let mut loader = Loader {
            src,
            strings: Strings::new(),
            warnings: vec![],
        };
        loader.load_children("", &doc);

        let Loader {
            strings, warnings, ..
        } = loader;
        for warning in &warnings {
            log::warn!("warning loading string table: {warning}");
        }
        log::debug!("loaded {} strings", strings.len());
        Ok((strings, warnings))
    }

    /// Returns the string with ID `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Adds a string to the table, returning the old value if there was one.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(id.into(), value.into())
    }

    /// Returns the number of strings in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over IDs and strings in the order they were defined.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Strings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

struct Loader<'a> {
    src: &'a str,
    strings: Strings,
    warnings: Vec<Warning>,
}

impl Loader<'_> {
    fn load_children(&mut self, prefix: &str, doc: &KdlDocument) {
        for node in doc.nodes() {
            let id = format!("{prefix}{}", node.name().value());
            self.load_node(&id, node);
            if let Some(children) = node.children() {
                self.load_children(&format!("{id}."), children);
            }
        }
    }

    fn load_node(&mut self, id: &str, node: &KdlNode) {
        if let Some(ty) = node.ty() {
            self.warn(ty.span().offset(), "ignoring type annotation");
        }

        let mut entries = node.entries().iter();
        let Some(entry) = entries.next() else {
            if node.children().is_none() {
                let offset = node.name().span().offset();
                self.warn(offset, format!("expected string value for `{id}`"));
            }
            return;
        };
        for extra in entries {
            self.warn(extra.span().offset(), format!("ignoring extra entry for `{id}`"));
        }

        if let Some(name) = entry.name() {
            self.warn(name.span().offset(), format!("ignoring key `{}`", name.value()));
        }
        let Some(value) = entry.value().as_string() else {
            self.warn(entry.span().offset(), format!("expected string value for `{id}`"));
            return;
        };

        if self.strings.get(id).is_some() {
            self.warn(entry.span().offset(), format!("duplicate string `{id}`"));
            return;
        }
        self.strings.insert(id, unindent::unindent(value));
    }

    fn warn(&mut self, offset: usize, msg: impl Into<String>) {
        let before = &self.src[..offset.min(self.src.len())];
        self.warnings.push(Warning {
            line: before.matches('\n').count() + 1,
            column: before.rsplit('\n').next().unwrap_or_default().chars().count(),
            msg: msg.into(),
        });
    }
}
