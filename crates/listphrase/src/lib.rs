//! Localizable list formatting.
//!
//! A [`ListPhrase`] joins a list of items into a single string using three
//! separator patterns, each of which references the keys `{a}` and `{b}`:
//!
//! - the **two-element** pattern, for lists with exactly 2 elements (e.g.
//!   `"{a} and {b}"` produces "first _and_ second")
//! - the **non-final** pattern, for all but the last element of lists with 3
//!   or more elements (e.g. `"{a}, {b}"` produces "first_,_ second_,_ …")
//! - the **final** pattern, for the second-last and last element of lists
//!   with 3 or more elements (e.g. `"{a}, and {b}"` produces "second-last_,
//!   and_ last")
//!
//! ```
//! use listphrase::ListPhrase;
//!
//! let list = ListPhrase::from_patterns("{a} and {b}", "{a}, {b}", "{a}, and {b}")?;
//! assert_eq!(list.format(Vec::<&str>::new())?, "");
//! assert_eq!(list.format(["one"])?, "one");
//! assert_eq!(list.format(["one", "two"])?, "one and two");
//! assert_eq!(list.format(["one", "two", "three"])?, "one, two, and three");
//! # Ok::<(), listphrase::Error>(())
//! ```
//!
//! The separator patterns don't have to be different:
//!
//! ```
//! use listphrase::ListPhrase;
//!
//! let list: ListPhrase = "{a}, {b}".parse()?;
//! assert_eq!(list.format(["one", "two"])?, "one, two");
//! assert_eq!(list.format(["one", "two", "three"])?, "one, two, three");
//! # Ok::<(), listphrase::Error>(())
//! ```
//!
//! Patterns may also be looked up from a string table; see [`store`].

mod error;
mod list;
mod pattern;
pub mod store;

pub use error::{Error, InvalidPatternError, StoreError};
pub use list::ListPhrase;
pub use pattern::{PairPattern, PatternPosition};
pub use phrase_template::{Phrase, PhraseError};
pub use store::{StringStore, Strings, Warning};
