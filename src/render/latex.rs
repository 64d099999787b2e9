//! LaTeX renderer: one `\subsection` fragment per function.
//!
//! Fragments are meant to be `\input` into a larger report, so no preamble
//! is written. `_` is the only character escaped.

use crate::model::*;
use crate::render::{Labels, Renderer};

pub struct LatexRenderer {
    labels: Labels,
}

impl LatexRenderer {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    fn render_constants(&self, constants: &[Constant]) -> String {
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("\\subsection{{{}}}", self.labels.constants));
        lines.push("\\begin{description}".to_string());
        for constant in constants {
            lines.push(format!(
                "\t\\item[{}] {}",
                escape(&constant.name),
                escape(&constant.description)
            ));
        }
        lines.push("\\end{description}".to_string());
        lines.push(String::new());
        finish(lines)
    }

    fn render_function(&self, func: &FunctionDoc) -> String {
        let doc = &func.doc;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("\\subsection{{{}}}", escape(&func.name)));
        lines.push(String::new());
        lines.push(escape(&doc.description));

        if let Some(ref params) = doc.params {
            lines.push(String::new());
            lines.push(format!("\\subsubsection{{{}}}", self.labels.arguments));
            lines.push("\\begin{description}".to_string());
            for param in params {
                lines.push(format!(
                    "\t\\item[{}] {}",
                    escape(&param.name),
                    escape(&param.description)
                ));
            }
            lines.push("\\end{description}".to_string());
        }

        if let Some(ref returns) = doc.returns {
            lines.push(String::new());
            lines.push(format!("\\subsubsection{{{}}}", self.labels.returns));
            lines.push(escape(returns));
        }

        // blank line between fragments
        lines.push(String::new());
        finish(lines)
    }
}

impl Renderer for LatexRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if !doc.constants.is_empty() {
            output.push_str(&self.render_constants(&doc.constants));
        }

        for func in &doc.functions {
            output.push_str(&self.render_function(func));
        }

        output
    }
}

/// Escape `_` for LaTeX text mode.
pub fn escape(text: &str) -> String {
    text.replace('_', "\\_")
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
