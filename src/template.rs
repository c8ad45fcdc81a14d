//! Placeholder scanning, missing-parameter detection, and string assembly.
//!
//! A template is raw text with zero or more placeholders of the form
//! `%name%`, where `name` is a run of ASCII word characters
//! (`[A-Za-z0-9_]`, possibly empty). A `%` that is not closed by another
//! `%` directly after such a run is ordinary text: `"100% sure"` and
//! `"%not-a-name%"` contain no placeholders.
//!
//! [`scan`] is the single parsing routine; both [`missing_parameters`] and
//! [`assemble`] are built on it so the two can never disagree about where a
//! placeholder starts or ends.

use crate::pack::Params;

/// Substituted for a placeholder whose parameter was not supplied.
pub const SENTINEL: &str = "???";

/// The placeholder delimiter. Not configurable.
pub const MARKER: char = '%';

/// One segment of a scanned template.
///
/// A scan always yields a strict alternation starting and ending with a
/// (possibly empty) `Literal`: literal, placeholder, literal, …, literal.
/// Placeholder names therefore sit at odd zero-indexed positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part<'a> {
    /// Text copied verbatim into the output.
    Literal(&'a str),
    /// A placeholder name (without markers); may be empty, as in `%%`.
    Placeholder(&'a str),
}

/// Splits a template into its alternating literal/placeholder sequence.
///
/// Two-state scanner: a literal run accumulates until a `%` opens a valid
/// placeholder run; an unclosed run falls back into the literal.
#[must_use]
pub fn scan(template: &str) -> Vec<Part<'_>> {
    let bytes = template.as_bytes();
    let mut parts = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == MARKER as u8 {
            if let Some(close) = placeholder_close(bytes, i) {
                parts.push(Part::Literal(&template[literal_start..i]));
                parts.push(Part::Placeholder(&template[i + 1..close]));
                i = close + 1;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    parts.push(Part::Literal(&template[literal_start..]));
    parts
}

/// Index of the closing marker for a placeholder opened at `open`, if the
/// characters after `open` form a name run terminated by a marker.
fn placeholder_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    while i < bytes.len() && is_name_byte(bytes[i]) {
        i += 1;
    }
    (i < bytes.len() && bytes[i] == MARKER as u8).then_some(i)
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Placeholder names referenced by `template` but absent from `params`,
/// in template order, duplicates retained.
///
/// `params = None` behaves like a map that is missing every key.
#[must_use]
pub fn missing_parameters<'a>(template: &'a str, params: Option<&Params>) -> Vec<&'a str> {
    scan(template)
        .into_iter()
        .filter_map(|part| match part {
            Part::Placeholder(name) if !params.is_some_and(|p| p.contains(name)) => Some(name),
            _ => None,
        })
        .collect()
}

/// Expands a scanned template against `params`.
///
/// Literals are appended verbatim; placeholders resolve through `params`,
/// with [`SENTINEL`] standing in for any absent value. Never fails.
#[must_use]
pub fn assemble(parts: &[Part<'_>], params: Option<&Params>) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            Part::Literal(text) => out.push_str(text),
            Part::Placeholder(name) => match params.and_then(|p| p.get(name)) {
                Some(value) => out.push_str(value),
                None => out.push_str(SENTINEL),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(parts: &[Part<'a>]) -> Vec<&'a str> {
        parts
            .iter()
            .filter_map(|p| match p {
                Part::Placeholder(name) => Some(*name),
                Part::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn scan_plain_text_is_one_literal() {
        assert_eq!(scan("Hello there"), vec![Part::Literal("Hello there")]);
        assert_eq!(scan(""), vec![Part::Literal("")]);
    }

    #[test]
    fn scan_single_placeholder() {
        assert_eq!(
            scan("Hello, %who%!"),
            vec![
                Part::Literal("Hello, "),
                Part::Placeholder("who"),
                Part::Literal("!"),
            ]
        );
    }

    #[test]
    fn scan_adjacent_placeholders_keep_empty_literal_between() {
        assert_eq!(
            scan("%a%%b%"),
            vec![
                Part::Literal(""),
                Part::Placeholder("a"),
                Part::Literal(""),
                Part::Placeholder("b"),
                Part::Literal(""),
            ]
        );
    }

    #[test]
    fn scan_empty_name_is_a_placeholder() {
        assert_eq!(
            scan("%%"),
            vec![Part::Literal(""), Part::Placeholder(""), Part::Literal("")]
        );
    }

    #[test]
    fn scan_unclosed_marker_stays_literal() {
        assert_eq!(scan("100% sure"), vec![Part::Literal("100% sure")]);
        assert_eq!(scan("trailing %"), vec![Part::Literal("trailing %")]);
    }

    #[test]
    fn scan_non_name_characters_break_the_run() {
        // '-' is not a name character, so neither marker opens a placeholder.
        assert_eq!(scan("%not-a-name%"), vec![Part::Literal("%not-a-name%")]);
    }

    #[test]
    fn scan_triple_marker_matches_leading_pair() {
        assert_eq!(
            scan("%%%"),
            vec![Part::Literal(""), Part::Placeholder(""), Part::Literal("%")]
        );
    }

    #[test]
    fn scan_alternation_starts_and_ends_with_literal() {
        let parts = scan("%a% and %b%");
        assert!(matches!(parts.first(), Some(Part::Literal(_))));
        assert!(matches!(parts.last(), Some(Part::Literal(_))));
        for (i, part) in parts.iter().enumerate() {
            match part {
                Part::Literal(_) => assert_eq!(i % 2, 0),
                Part::Placeholder(_) => assert_eq!(i % 2, 1),
            }
        }
    }

    #[test]
    fn missing_parameters_ordered_with_duplicates() {
        let params = Params::new().with("b", "2");
        assert_eq!(
            missing_parameters("%a% %b% %a%", Some(&params)),
            vec!["a", "a"]
        );
    }

    #[test]
    fn missing_parameters_without_map_reports_everything() {
        assert_eq!(missing_parameters("%a%%b%", None), vec!["a", "b"]);
        assert_eq!(names(&scan("%a%%b%")), vec!["a", "b"]);
    }

    #[test]
    fn assemble_substitutes_and_falls_back_to_sentinel() {
        let params = Params::new().with("who", "Coder");
        assert_eq!(
            assemble(&scan("Hello, %who%, meet %other%!"), Some(&params)),
            "Hello, Coder, meet ???!"
        );
    }

    #[test]
    fn assemble_is_not_recursive() {
        // A substituted value containing markers is not re-expanded.
        let params = Params::new().with("a", "%b%").with("b", "deep");
        assert_eq!(assemble(&scan("%a%"), Some(&params)), "%b%");
    }

    #[test]
    fn assemble_preserves_multibyte_literals() {
        let params = Params::new().with("who", "世界");
        assert_eq!(
            assemble(&scan("こんにちは、%who%！"), Some(&params)),
            "こんにちは、世界！"
        );
    }
}
