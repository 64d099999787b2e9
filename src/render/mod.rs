//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod latex;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
}

/// Fixed sub-heading texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub arguments: &'static str,
    pub returns: &'static str,
    pub constants: &'static str,
}

impl Labels {
    pub const JA: Labels = Labels {
        arguments: "引数",
        returns: "戻り値",
        constants: "定数",
    };

    pub const EN: Labels = Labels {
        arguments: "Arguments",
        returns: "Return value",
        constants: "Constants",
    };

    pub fn for_lang(lang: &str) -> Result<Labels> {
        match lang {
            "ja" => Ok(Labels::JA),
            "en" => Ok(Labels::EN),
            _ => Err(anyhow!("unknown language: {}. Use ja or en", lang)),
        }
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, labels: Labels) -> Result<Box<dyn Renderer>> {
    match format {
        "latex" | "tex" => Ok(Box::new(latex::LatexRenderer::new(labels))),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(labels))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use latex, markdown, or json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        for format in ["latex", "tex", "markdown", "md", "json"] {
            assert!(create_renderer(format, Labels::JA).is_ok(), "{format}");
        }
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", Labels::JA).err().unwrap();
        assert!(err.to_string().contains("unknown format: xml"));
    }

    #[test]
    fn labels_by_lang() {
        assert_eq!(Labels::for_lang("ja").unwrap(), Labels::JA);
        assert_eq!(Labels::for_lang("en").unwrap().arguments, "Arguments");
        assert!(Labels::for_lang("fr").is_err());
    }
}
