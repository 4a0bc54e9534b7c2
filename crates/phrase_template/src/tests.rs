use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn phrase(s: &str) -> Phrase {
    s.parse().unwrap()
}

#[test]
fn test_compile_segments() {
    let p = phrase("{a} and {b}");
    assert_eq!(
        p.segments(),
        [
            Segment::Key("a".to_owned()),
            Segment::Literal(" and ".to_owned()),
            Segment::Key("b".to_owned()),
        ],
    );
    assert_eq!(p.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(p.as_str(), "{a} and {b}");
    assert_eq!(p.to_string(), "{a} and {b}");
}

#[test]
fn test_escaped_brace() {
    let p = phrase("{{a} {b}}");
    assert_eq!(p.keys().collect::<Vec<_>>(), ["b"]);
    assert_eq!(p.put("b", "x").format().unwrap(), "{a} x}");

    let p = phrase("}}{{");
    assert_eq!(p.keys().count(), 0);
    assert_eq!(p.bind().format().unwrap(), "}}{");
}

#[test]
fn test_syntax_errors() {
    assert_eq!(
        "ab {a".parse::<Phrase>(),
        Err(PhraseError::Syntax {
            offset: 3,
            message: "unclosed placeholder".to_owned(),
        }),
    );
    assert_eq!(
        "{}".parse::<Phrase>(),
        Err(PhraseError::Syntax {
            offset: 0,
            message: "empty placeholder".to_owned(),
        }),
    );
    "{A}".parse::<Phrase>().expect_err("uppercase key");
    "{_a}".parse::<Phrase>().expect_err("leading underscore");
    "{a b}".parse::<Phrase>().expect_err("space in key");
    "{a{b}".parse::<Phrase>().expect_err("brace in key");
}

#[test]
fn test_format() {
    let p = phrase("{greeting}, {name_here}!");
    let s = p.put("greeting", "Hello").put("name_here", "world");
    assert_eq!(s.format().unwrap(), "Hello, world!");

    // rebinding replaces
    let s = s.put("greeting", "Goodbye");
    assert_eq!(s.format().unwrap(), "Goodbye, world!");

    // owned values
    let name = String::from("owned");
    assert_eq!(
        p.put("greeting", "Hi").put("name_here", name).format().unwrap(),
        "Hi, owned!",
    );
}

#[test]
fn test_format_is_repeatable() {
    let p = phrase("{a}-{b}");
    for i in 0..3 {
        let b = i.to_string();
        assert_eq!(p.put("a", "x").put("b", b.as_str()).format().unwrap(), format!("x-{i}"));
    }
}

#[test]
fn test_duplicate_key() {
    let p = phrase("{a}...{a}");
    assert_eq!(p.keys().collect::<Vec<_>>(), ["a"]);
    assert_eq!(p.put("a", "x").format().unwrap(), "x...x");
}

#[test]
fn test_key_set_mismatch() {
    let p = phrase("{a}");

    let err = p.put("a", "").put("b", "").format().unwrap_err();
    assert_eq!(err, PhraseError::UnknownKeys(vec!["b".to_owned()]));
    assert!(err.is_key_mismatch());
    assert_eq!(err.to_string(), "pattern does not contain keys {b}");

    let err = p.bind().format().unwrap_err();
    assert_eq!(err, PhraseError::MissingKeys(vec!["a".to_owned()]));
    assert!(err.is_key_mismatch());
    assert_eq!(err.to_string(), "missing values for keys {a}");

    let p = phrase("{one}{two}");
    let err = p.put("b", "").put("a", "").format().unwrap_err();
    assert_eq!(
        err,
        PhraseError::UnknownKeys(vec!["a".to_owned(), "b".to_owned()]),
    );

    let err = "{".parse::<Phrase>().unwrap_err();
    assert!(!err.is_key_mismatch());
}

#[test]
fn test_put_optional() {
    let p = phrase("{a}!");
    let s = p.bind().put_optional("a", "x").put_optional("b", "y");
    assert_eq!(s.format().unwrap(), "x!");
}

#[test]
fn test_phrase_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Phrase>();
}

proptest! {
    #[test]
    fn proptest_literal_text_is_unchanged(s in "[^{]*") {
        let p: Phrase = s.parse().unwrap();
        prop_assert_eq!(p.keys().count(), 0);
        prop_assert_eq!(p.bind().format().unwrap(), s);
    }

    #[test]
    fn proptest_substitution(prefix in "[^{]*", value in ".*", suffix in "[^{]*") {
        let p: Phrase = format!("{prefix}{{key}}{suffix}").parse().unwrap();
        prop_assert_eq!(
            p.put("key", value.as_str()).format().unwrap(),
            format!("{prefix}{value}{suffix}"),
        );
    }
}
