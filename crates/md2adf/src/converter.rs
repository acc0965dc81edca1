use itertools::Itertools;
use markdown::mdast;
use rustc_hash::FxHashMap;

use crate::node::{
    Blockquote, BulletList, CodeBlock, CodeBlockAttrs, Heading, HeadingAttrs, ListItem, Mark,
    MarkSet, Node, OrderedList, OrderedListAttrs, Paragraph, Table, TableCell, TableRow, Text,
};

/// Walks an mdast tree and builds the corresponding ADF nodes.
///
/// Block structure is mirrored one-to-one; inline structure is flattened.
/// Markdown nests inline formatting (`**bold _italic_**`) while ADF keeps a
/// flat sequence of text leaves each carrying a set of marks, so the inline
/// walk threads a [`MarkSet`] down the recursion and emits one leaf per
/// uninterrupted text run.
pub(crate) struct Converter {
    /// Reference definitions (`[label]: url`), keyed by the parser's
    /// normalized identifier. First definition wins.
    definitions: FxHashMap<String, String>,
}

impl Converter {
    pub(crate) fn new(root: &mdast::Node) -> Self {
        let mut definitions = FxHashMap::default();
        collect_definitions(root, &mut definitions);
        Self { definitions }
    }

    /// Converts the parser's root node into the document's top-level blocks.
    pub(crate) fn document(&self, root: mdast::Node) -> Vec<Node> {
        match root {
            mdast::Node::Root(mdast::Root { children, .. }) => self.blocks(children),
            other => self.blocks(vec![other]),
        }
    }

    fn blocks(&self, nodes: Vec<mdast::Node>) -> Vec<Node> {
        nodes
            .into_iter()
            .filter_map(|node| self.block(node))
            .collect()
    }

    fn block(&self, node: mdast::Node) -> Option<Node> {
        match node {
            mdast::Node::Paragraph(mdast::Paragraph { children, .. }) => {
                let content = self.inline(children, &MarkSet::new());
                (!content.is_empty()).then(|| Node::Paragraph(Paragraph { content }))
            }
            mdast::Node::Heading(mdast::Heading {
                children, depth, ..
            }) => Some(Node::Heading(Heading {
                attrs: HeadingAttrs {
                    level: depth.clamp(1, 6),
                },
                content: self.inline(children, &MarkSet::new()),
            })),
            mdast::Node::Code(mdast::Code { value, lang, .. }) => {
                // Marks never apply inside a code block; the body is a
                // single unmarked leaf.
                let content = if value.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::text(value)]
                };
                Some(Node::CodeBlock(CodeBlock {
                    attrs: lang.map(|language| CodeBlockAttrs { language }),
                    content,
                }))
            }
            mdast::Node::Blockquote(mdast::Blockquote { children, .. }) => {
                let content = self.blocks(children);
                (!content.is_empty()).then(|| Node::Blockquote(Blockquote { content }))
            }
            mdast::Node::List(list) => Some(self.list(list)),
            mdast::Node::ThematicBreak(_) => Some(Node::Rule),
            mdast::Node::Table(table) => Some(self.table(table)),
            // Definitions feed the reference map and emit nothing themselves.
            mdast::Node::Definition(_) => None,
            other => {
                // Unrecognized block kinds degrade to a paragraph over
                // their flattened content.
                let content = self.inline(vec![other], &MarkSet::new());
                (!content.is_empty()).then(|| Node::Paragraph(Paragraph { content }))
            }
        }
    }

    fn list(&self, list: mdast::List) -> Node {
        let mdast::List {
            children,
            ordered,
            start,
            ..
        } = list;
        let content = children
            .into_iter()
            .filter_map(|item| match item {
                mdast::Node::ListItem(mdast::ListItem { children, .. }) => {
                    Some(Node::ListItem(ListItem {
                        content: self.blocks(children),
                    }))
                }
                _ => None,
            })
            .collect();

        if ordered {
            Node::OrderedList(OrderedList {
                attrs: OrderedListAttrs {
                    order: start.unwrap_or(1),
                },
                content,
            })
        } else {
            Node::BulletList(BulletList { content })
        }
    }

    fn table(&self, table: mdast::Table) -> Node {
        let content = table
            .children
            .into_iter()
            .enumerate()
            .filter_map(|(row, node)| match node {
                mdast::Node::TableRow(mdast::TableRow { children, .. }) => {
                    let cells = children
                        .into_iter()
                        .filter_map(|cell| match cell {
                            mdast::Node::TableCell(mdast::TableCell { children, .. }) => {
                                // ADF requires block content inside cells, so
                                // the inline run is wrapped in a paragraph.
                                let cell = TableCell {
                                    content: vec![Node::paragraph(
                                        self.inline(children, &MarkSet::new()),
                                    )],
                                };
                                Some(if row == 0 {
                                    Node::TableHeader(cell)
                                } else {
                                    Node::TableCell(cell)
                                })
                            }
                            _ => None,
                        })
                        .collect();
                    Some(Node::TableRow(TableRow { content: cells }))
                }
                _ => None,
            })
            .collect();

        Node::Table(Table { content })
    }

    /// Flattens an inline subtree into text leaves and hard breaks, then
    /// merges adjacent leaves that ended up with identical mark sets.
    fn inline(&self, nodes: Vec<mdast::Node>, marks: &MarkSet) -> Vec<Node> {
        let mut out = Vec::new();
        for node in nodes {
            self.flatten_into(node, marks, &mut out);
        }

        out.into_iter()
            .coalesce(|prev, next| match (prev, next) {
                (Node::Text(mut a), Node::Text(b)) if a.marks == b.marks => {
                    a.text.push_str(&b.text);
                    Ok(Node::Text(a))
                }
                (prev, next) => Err((prev, next)),
            })
            .collect()
    }

    fn flatten_into(&self, node: mdast::Node, marks: &MarkSet, out: &mut Vec<Node>) {
        match node {
            mdast::Node::Text(mdast::Text { value, .. }) => {
                // Soft line breaks survive as literal newlines in text
                // values; ADF has no equivalent, so they become spaces.
                push_text(out, value.replace('\n', " "), marks.clone());
            }
            mdast::Node::Strong(mdast::Strong { children, .. }) => {
                let marks = marks.with(Mark::Strong);
                for child in children {
                    self.flatten_into(child, &marks, out);
                }
            }
            mdast::Node::Emphasis(mdast::Emphasis { children, .. }) => {
                let marks = marks.with(Mark::Em);
                for child in children {
                    self.flatten_into(child, &marks, out);
                }
            }
            mdast::Node::Delete(mdast::Delete { children, .. }) => {
                let marks = marks.with(Mark::Strike);
                for child in children {
                    self.flatten_into(child, &marks, out);
                }
            }
            mdast::Node::InlineCode(mdast::InlineCode { value, .. }) => {
                push_text(out, value, marks.with(Mark::Code));
            }
            mdast::Node::Link(mdast::Link { children, url, .. }) => {
                let marks = marks.with(Mark::link(url));
                for child in children {
                    self.flatten_into(child, &marks, out);
                }
            }
            mdast::Node::Image(mdast::Image { alt, url, .. }) => {
                // ADF's media node requires an upload; images fall back to
                // a link over the alt text, or the URL when alt is blank.
                let text = if alt.is_empty() { url.clone() } else { alt };
                push_text(out, text, marks.with(Mark::link(url)));
            }
            mdast::Node::Break(_) => out.push(Node::HardBreak),
            mdast::Node::LinkReference(mdast::LinkReference {
                children,
                identifier,
                ..
            }) => {
                let marks = match self.definitions.get(&identifier) {
                    Some(url) => marks.with(Mark::link(url.clone())),
                    None => marks.clone(),
                };
                for child in children {
                    self.flatten_into(child, &marks, out);
                }
            }
            mdast::Node::ImageReference(mdast::ImageReference {
                alt, identifier, ..
            }) => match self.definitions.get(&identifier) {
                Some(url) => {
                    let text = if alt.is_empty() { url.clone() } else { alt };
                    push_text(out, text, marks.with(Mark::link(url.clone())));
                }
                None => push_text(out, alt, marks.clone()),
            },
            other => match other.children() {
                // Unrecognized wrappers contribute their children; leaves
                // contribute their raw literal value as plain text.
                Some(children) => {
                    for child in children.clone() {
                        self.flatten_into(child, marks, out);
                    }
                }
                None => push_text(out, literal(&other), marks.clone()),
            },
        }
    }
}

fn push_text(out: &mut Vec<Node>, text: String, marks: MarkSet) {
    if text.is_empty() {
        return;
    }
    out.push(Node::Text(Text { text, marks }));
}

fn literal(node: &mdast::Node) -> String {
    match node {
        mdast::Node::Html(mdast::Html { value, .. })
        | mdast::Node::Math(mdast::Math { value, .. })
        | mdast::Node::InlineMath(mdast::InlineMath { value, .. })
        | mdast::Node::Yaml(mdast::Yaml { value, .. })
        | mdast::Node::Toml(mdast::Toml { value, .. }) => value.clone(),
        _ => String::new(),
    }
}

fn collect_definitions(node: &mdast::Node, definitions: &mut FxHashMap<String, String>) {
    if let mdast::Node::Definition(definition) = node {
        definitions
            .entry(definition.identifier.clone())
            .or_insert_with(|| definition.url.clone());
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, definitions);
        }
    }
}
