//! Doc comment body heuristics.
//!
//! A body is free text, optionally followed by a paragraph of `name: text`
//! lines (the parameters), optionally followed by a final `return: text` line:
//!
//! ```text
//! Adds two numbers.
//!
//! a: first operand
//! b: second operand
//! return: the sum
//! ```
//!
//! These are pattern-matching rules, not a grammar. Anything that does not fit
//! them simply ends up in the description.

use crate::model::{Param, ParsedDoc};

/// Prefix of the return line, checked after normalization.
const RETURN_MARKER: &str = "return: ";

/// Parse the raw interior of a `/** ... */` block.
pub fn parse(raw: &str) -> ParsedDoc {
    let body = normalize(raw);
    let (body, returns) = split_return(&body);
    let (description, params) = split_params(&body);

    ParsedDoc {
        description,
        params,
        returns,
    }
}

/// Strip ` * ` decoration from every line and surrounding whitespace from the block.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '*'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Detach a trailing `return: text` line.
///
/// The line is dropped even when its text is empty; only a non-empty text
/// counts as a return description.
fn split_return(body: &str) -> (String, Option<String>) {
    let lines: Vec<&str> = body.lines().collect();
    match lines.split_last() {
        Some((last, rest)) if last.starts_with(RETURN_MARKER) => {
            let text = last
                .split_once(':')
                .map(|(_, text)| text.trim())
                .unwrap_or_default();
            let returns = (!text.is_empty()).then(|| text.to_string());
            (rest.join("\n"), returns)
        }
        _ => (body.to_string(), None),
    }
}

/// Split off the parameter paragraph, if the last paragraph is one.
///
/// Paragraphs are separated by exactly `\n\n`. An empty last paragraph
/// passes the colon check vacuously and yields an empty list.
fn split_params(body: &str) -> (String, Option<Vec<Param>>) {
    if body.is_empty() {
        return (String::new(), None);
    }

    let paragraphs: Vec<&str> = body.split("\n\n").collect();
    let Some((last, rest)) = paragraphs.split_last() else {
        return (body.to_string(), None);
    };

    if !last.lines().all(|line| line.contains(':')) {
        return (body.to_string(), None);
    }

    let params = last.lines().map(parse_param).collect();
    (rest.join("\n\n"), Some(params))
}

/// `name: text` → Param. Later colons stay in the text.
fn parse_param(line: &str) -> Param {
    let (name, description) = line.split_once(':').unwrap_or((line, ""));
    Param {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, description: &str) -> Param {
        Param {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn normalize_strips_decoration() {
        let raw = " * First line.\n *\n *   Indented ** text **\n ";
        assert_eq!(normalize(raw), "First line.\n\nIndented ** text");
    }

    #[test]
    fn normalize_keeps_inner_stars() {
        assert_eq!(normalize(" * a * b\n"), "a * b");
    }

    #[test]
    fn full_block() {
        let raw = " * Adds two numbers.\n *\n * a: first operand\n * b: second operand\n * return: the sum\n ";
        let doc = parse(raw);
        assert_eq!(doc.description, "Adds two numbers.");
        assert_eq!(
            doc.params,
            Some(vec![
                param("a", "first operand"),
                param("b", "second operand")
            ])
        );
        assert_eq!(doc.returns.as_deref(), Some("the sum"));
    }

    #[test]
    fn description_only() {
        let doc = parse(" * Just words.\n * More words.\n");
        assert_eq!(doc.description, "Just words.\nMore words.");
        assert_eq!(doc.params, None);
        assert_eq!(doc.returns, None);
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse(" *\n   \n"), ParsedDoc::default());
        assert_eq!(parse(""), ParsedDoc::default());
    }

    #[test]
    fn mixed_last_paragraph_is_description() {
        let raw = "Intro.\n\nx: has colon\nno colon here\nreturn: value";
        let doc = parse(raw);
        assert_eq!(doc.description, "Intro.\n\nx: has colon\nno colon here");
        assert_eq!(doc.params, None);
        assert_eq!(doc.returns.as_deref(), Some("value"));
    }

    #[test]
    fn param_description_keeps_extra_colons() {
        let doc = parse("Intro.\n\nurl: scheme://host:port\n");
        assert_eq!(
            doc.params,
            Some(vec![param("url", "scheme://host:port")])
        );
    }

    #[test]
    fn single_paragraph_of_params_has_empty_description() {
        let doc = parse("fname: file to read\nbuf: destination");
        assert_eq!(doc.description, "");
        assert_eq!(
            doc.params,
            Some(vec![param("fname", "file to read"), param("buf", "destination")])
        );
    }

    #[test]
    fn return_without_params() {
        let doc = parse("Computes a thing.\nreturn: the thing");
        assert_eq!(doc.description, "Computes a thing.");
        assert_eq!(doc.params, None);
        assert_eq!(doc.returns.as_deref(), Some("the thing"));
    }

    #[test]
    fn return_text_keeps_extra_colons() {
        let doc = parse("Doc.\nreturn: ratio a:b");
        assert_eq!(doc.returns.as_deref(), Some("ratio a:b"));
    }

    #[test]
    fn return_marker_needs_space() {
        let doc = parse("Doc.\nreturn:tight");
        assert_eq!(doc.returns, None);
        assert_eq!(doc.params, None);
        assert_eq!(doc.description, "Doc.\nreturn:tight");
    }

    #[test]
    fn return_only_on_last_line() {
        let doc = parse("return: early\nThen prose.");
        assert_eq!(doc.returns, None);
        assert_eq!(doc.description, "return: early\nThen prose.");
    }

    #[test]
    fn params_then_blank_then_return() {
        let doc = parse("a: first\n\nreturn: r");
        assert_eq!(doc.description, "");
        assert_eq!(doc.params, Some(vec![param("a", "first")]));
        assert_eq!(doc.returns.as_deref(), Some("r"));
    }

    #[test]
    fn empty_last_paragraph_yields_empty_param_list() {
        let doc = parse("Desc.\n\n\nreturn: r");
        assert_eq!(doc.description, "Desc.");
        assert_eq!(doc.params, Some(vec![]));
        assert_eq!(doc.returns.as_deref(), Some("r"));
    }

    #[test]
    fn multi_paragraph_description() {
        let doc = parse("One.\n\nTwo.\n\nx: the x");
        assert_eq!(doc.description, "One.\n\nTwo.");
        assert_eq!(doc.params, Some(vec![param("x", "the x")]));
    }
}
