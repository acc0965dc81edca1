use std::str::FromStr;

use markdown::Constructs;
use serde::ser::SerializeStruct;

use crate::converter::Converter;
use crate::error::ConvertError;
use crate::node::Node;

/// An ADF document: the envelope Jira/Confluence accept as a rich-text
/// body, serializing as `{"version":1,"type":"doc","content":[...]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: Vec<Node>,
}

impl FromStr for Document {
    type Err = ConvertError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::from_str(content)
    }
}

impl serde::Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Document", 3)?;
        state.serialize_field("version", &Self::VERSION)?;
        state.serialize_field("type", "doc")?;
        state.serialize_field("content", &self.content)?;
        state.end()
    }
}

impl Document {
    pub const VERSION: u32 = 1;

    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Encodes the document as the JSON string handed to the REST API.
    pub fn to_json(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, ConvertError> {
        Ok(serde_json::to_value(self)?)
    }

    fn from_str(content: &str) -> Result<Self, ConvertError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let root = markdown::to_mdast(
            content,
            &markdown::ParseOptions {
                gfm_strikethrough_single_tilde: true,
                math_text_single_dollar: false,
                mdx_expression_parse: None,
                mdx_esm_parse: None,
                // Constructs outside the supported subset (HTML, math, MDX,
                // frontmatter, footnotes, task markers) stay literal text.
                constructs: Constructs {
                    attention: true,
                    autolink: true,
                    block_quote: true,
                    character_escape: true,
                    character_reference: true,
                    code_indented: true,
                    code_fenced: true,
                    code_text: true,
                    definition: true,
                    frontmatter: false,
                    gfm_autolink_literal: false,
                    gfm_label_start_footnote: false,
                    gfm_footnote_definition: false,
                    gfm_strikethrough: true,
                    gfm_table: true,
                    gfm_task_list_item: false,
                    hard_break_escape: true,
                    hard_break_trailing: true,
                    heading_atx: true,
                    heading_setext: true,
                    html_flow: false,
                    html_text: false,
                    label_start_image: true,
                    label_start_link: true,
                    label_end: true,
                    list_item: true,
                    math_flow: false,
                    math_text: false,
                    mdx_esm: false,
                    mdx_expression_flow: false,
                    mdx_expression_text: false,
                    mdx_jsx_flow: false,
                    mdx_jsx_text: false,
                    thematic_break: true,
                },
            },
        )
        .map_err(|e| ConvertError::Parse { message: e.reason })?;

        let converter = Converter::new(&root);

        Ok(Self {
            content: converter.document(root),
        })
    }
}
