//! `#define` constants with a trailing block comment.
//!
//! ```c
//! #define INPUT_NEURON_NUM 2  /* number of input neurons */
//! ```

use crate::model::Constant;
use regex::Regex;
use std::sync::LazyLock;

static RE_DEFINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#define (?P<name>\S+)[ \t]+.*?/\*(?P<doc>.+)\*/").unwrap()
});

/// Collect documented constants in source order.
pub fn scan(input: &str) -> Vec<Constant> {
    RE_DEFINE
        .captures_iter(input)
        .map(|caps| Constant {
            name: caps["name"].to_string(),
            description: caps["doc"].trim().to_string(),
        })
        .collect()
}
