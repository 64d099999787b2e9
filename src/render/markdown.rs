//! Markdown renderer.

use crate::model::*;
use crate::render::{Labels, Renderer};

pub struct MarkdownRenderer {
    labels: Labels,
}

impl MarkdownRenderer {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    fn render_function(&self, func: &FunctionDoc) -> String {
        let doc = &func.doc;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("### {}\n", func.name));

        if !doc.description.is_empty() {
            lines.push(doc.description.clone());
            lines.push(String::new());
        }

        if let Some(ref params) = doc.params {
            lines.push(format!("#### {}\n", self.labels.arguments));
            for param in params {
                lines.push(format!("* `{}`: {}", param.name, param.description));
            }
            lines.push(String::new());
        }

        if let Some(ref returns) = doc.returns {
            lines.push(format!("#### {}\n", self.labels.returns));
            lines.push(returns.clone());
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if !doc.constants.is_empty() {
            output.push_str(&format!("## {}\n\n", self.labels.constants));
            for constant in &doc.constants {
                output.push_str(&format!("* `{}`: {}\n", constant.name, constant.description));
            }
            output.push('\n');
        }

        for func in &doc.functions {
            output.push_str(&self.render_function(func));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_with_everything() {
        let doc = Document {
            functions: vec![FunctionDoc {
                name: "read_data".to_string(),
                return_type: "void".to_string(),
                summary: None,
                doc: ParsedDoc {
                    description: "Reads patterns.".to_string(),
                    params: Some(vec![Param {
                        name: "fname".to_string(),
                        description: "file to read".to_string(),
                    }]),
                    returns: Some("nothing".to_string()),
                },
            }],
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Labels::EN).render(&doc);
        assert_eq!(
            out,
            concat!(
                "### read_data\n\n",
                "Reads patterns.\n\n",
                "#### Arguments\n\n",
                "* `fname`: file to read\n\n",
                "#### Return value\n\n",
                "nothing\n\n",
            )
        );
    }

    #[test]
    fn bare_heading() {
        let doc = Document {
            functions: vec![FunctionDoc {
                name: "f".to_string(),
                return_type: "int".to_string(),
                summary: None,
                doc: ParsedDoc::default(),
            }],
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Labels::JA).render(&doc);
        assert_eq!(out, "### f\n\n");
    }

    #[test]
    fn constants_list() {
        let doc = Document {
            constants: vec![Constant {
                name: "N".to_string(),
                description: "count".to_string(),
            }],
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Labels::JA).render(&doc);
        assert_eq!(out, "## 定数\n\n* `N`: count\n\n");
    }
}
