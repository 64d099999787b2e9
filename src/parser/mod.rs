//! Parser module: locate documented declarations and build a Document.

pub mod comment;
pub mod defines;

use crate::model::{Document, FunctionDoc, RawMatch};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

// `/**` + rest of the opener line, shortest body, `*/`, then on the very next
// line: `void|int|double`, optional `*`, one space, name, `(`.
static RE_DOCUMENTED_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)/\*\*(?P<summary>.*?)\n(?P<doc>.*?)\*/\n",
        r"(?P<ret>void|int|double)(?P<ptr>\*)? (?P<func>\w+?)\("
    ))
    .unwrap()
});

/// Find every documented declaration, in source order.
pub fn scan(input: &str) -> impl Iterator<Item = RawMatch<'_>> + '_ {
    RE_DOCUMENTED_FN.captures_iter(input).map(|caps| RawMatch {
        summary: group(&caps, "summary"),
        comment: group(&caps, "doc"),
        name: group(&caps, "func"),
        return_type: group(&caps, "ret"),
        pointer: caps.name("ptr").is_some(),
    })
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Parse a whole source file. Constants are only collected when asked for.
pub fn parse(input: &str, with_defines: bool) -> Document {
    let functions: Vec<FunctionDoc> = scan(input)
        .map(|raw| {
            debug!(function = raw.name, return_type = raw.return_type, "documented function");
            to_function_doc(&raw)
        })
        .collect();

    let openers = input.matches("/**").count();
    if openers > functions.len() {
        debug!(
            openers,
            matched = functions.len(),
            "some doc comments have no recognized declaration"
        );
    }

    let constants = if with_defines {
        defines::scan(input)
    } else {
        Vec::new()
    };

    Document {
        constants,
        functions,
    }
}

fn to_function_doc(raw: &RawMatch<'_>) -> FunctionDoc {
    let return_type = if raw.pointer {
        format!("{}*", raw.return_type)
    } else {
        raw.return_type.to_string()
    };
    let summary = raw.summary.trim();

    FunctionDoc {
        name: raw.name.to_string(),
        return_type,
        summary: (!summary.is_empty()).then(|| summary.to_string()),
        doc: comment::parse(raw.comment),
    }
}
