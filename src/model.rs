//! Data model for extracted documentation: format-agnostic.

use serde::Serialize;

/// A `/** ... */` block found directly above a recognized declaration.
///
/// Borrows from the scanned source; only lives for one scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// Text after `/**` on the opener line
    pub summary: &'a str,
    /// Comment interior, starting on the line after `/**`.
    pub comment: &'a str,
    pub name: &'a str,
    /// `void`, `int` or `double`
    pub return_type: &'a str,
    /// Declaration had a `*` right after the return type
    pub pointer: bool,
}

/// Structured view of one comment body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub description: String,
    /// Present only when the last paragraph is a `name: text` list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

/// One `name: description` line of a parameter paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub description: String,
}

/// A documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    /// Declared return type, e.g. `int` or `double*`
    pub return_type: String,
    /// Opener line text. Not part of the parsed body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub doc: ParsedDoc,
}

/// `#define NAME value /* doc */`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: String,
    pub description: String,
}

/// Everything extracted from a single source file, in source order.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub constants: Vec<Constant>,
    pub functions: Vec<FunctionDoc>,
}
