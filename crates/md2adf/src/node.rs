mod mark;

pub use mark::{LinkAttrs, Mark, MarkSet};

/// An ADF content node.
///
/// Serializes as the JSON object Jira/Confluence expect: an internally
/// tagged `type` field plus the variant's own fields. Empty `content`
/// sequences, empty `marks` and absent attrs are omitted entirely rather
/// than serialized as empty values.
///
/// Inline formatting never appears as nested nodes here. By the time a
/// `Node` is built, formatting has been flattened onto [`Text`] leaves as
/// [`MarkSet`]s, so only `text` nodes carry marks.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph(Paragraph),
    Heading(Heading),
    CodeBlock(CodeBlock),
    BulletList(BulletList),
    OrderedList(OrderedList),
    ListItem(ListItem),
    Blockquote(Blockquote),
    Rule,
    HardBreak,
    Table(Table),
    TableRow(TableRow),
    TableHeader(TableCell),
    TableCell(TableCell),
    Text(Text),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Paragraph {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Heading {
    pub attrs: HeadingAttrs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CodeBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<CodeBlockAttrs>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BulletList {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OrderedList {
    pub attrs: OrderedListAttrs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OrderedListAttrs {
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ListItem {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Blockquote {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableRow {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

/// Cell body shared by the `tableHeader` and `tableCell` variants; the two
/// differ only in their tag.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableCell {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
}

/// A leaf text run carrying the flattened marks of every inline wrapper
/// above it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Text {
    pub text: String,
    #[serde(skip_serializing_if = "MarkSet::is_empty")]
    pub marks: MarkSet,
}

impl Node {
    /// An unmarked text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Text {
            text: text.into(),
            marks: MarkSet::new(),
        })
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::Paragraph(Paragraph { content })
    }
}
