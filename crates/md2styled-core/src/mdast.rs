//! mdast (Markdown Abstract Syntax Tree) types
//!
//! The subset of mdast nodes the converter consumes. The Markdown parser that
//! produces these trees is external; trees are built with the convenience
//! constructors or deserialized from mdast-compatible JSON.
//! Reference: https://github.com/syntax-tree/mdast

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root node of an mdast document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
}

/// An mdast node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // Block nodes
    Heading(Heading),
    Paragraph(Paragraph),
    Blockquote(Blockquote),
    List(List),
    ListItem(ListItem),
    Code(Code),

    // Inline nodes
    Text(Text),
    Emphasis(Emphasis),
    Strong(Strong),
    Delete(Delete),
    InlineCode(InlineCode),
    Link(Link),
}

/// Heading node (# to ######)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Node>,
}

/// Paragraph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Vec<Node>,
}

/// Blockquote node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blockquote {
    pub children: Vec<Node>,
}

/// List node (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub ordered: bool,
    pub children: Vec<Node>,
}

/// List item node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<Node>,
}

/// Code block node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub lang: Option<String>,
    pub value: String,
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// Emphasis node (*text* or _text_)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    pub children: Vec<Node>,
}

/// Strong node (**text** or __text__)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub children: Vec<Node>,
}

/// Delete node (~~text~~, GFM strikethrough)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub children: Vec<Node>,
}

/// Inline code node (`code`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineCode {
    pub value: String,
}

/// Link node
///
/// The destination may be absent: a parser can surface a link whose URL it
/// could not resolve, and the converter then styles the text without making it
/// navigable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub url: Option<String>,
    pub children: Vec<Node>,
}

/// Error ingesting an mdast tree from JSON
#[derive(Debug, Error)]
pub enum MdastError {
    #[error("invalid mdast JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("heading depth {0} is outside 1..=6")]
    HeadingDepth(u8),
}

// Convenience constructors
impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(Text { value: s.into() })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Paragraph { children })
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading { depth, children })
    }

    pub fn code(lang: Option<String>, value: impl Into<String>) -> Self {
        Node::Code(Code {
            lang,
            value: value.into(),
        })
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode(InlineCode {
            value: value.into(),
        })
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis(Emphasis { children })
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong(Strong { children })
    }

    pub fn delete(children: Vec<Node>) -> Self {
        Node::Delete(Delete { children })
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(Link {
            url: Some(url.into()),
            children,
        })
    }

    /// Link whose destination could not be resolved
    pub fn link_without_destination(children: Vec<Node>) -> Self {
        Node::Link(Link {
            url: None,
            children,
        })
    }

    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List(List { ordered, children })
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItem { children })
    }

    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote(Blockquote { children })
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Deserialize an mdast tree from JSON, rejecting heading depths the
    /// in-process parser would never produce
    pub fn from_json(json: &str) -> Result<Self, MdastError> {
        let root: Root = serde_json::from_str(json)?;
        root.validate()?;
        Ok(root)
    }

    pub fn to_json(&self) -> Result<String, MdastError> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> Result<(), MdastError> {
        fn walk(nodes: &[Node]) -> Result<(), MdastError> {
            for node in nodes {
                match node {
                    Node::Heading(h) => {
                        if !(1..=6).contains(&h.depth) {
                            return Err(MdastError::HeadingDepth(h.depth));
                        }
                        walk(&h.children)?;
                    }
                    Node::Paragraph(p) => walk(&p.children)?,
                    Node::Blockquote(b) => walk(&b.children)?,
                    Node::List(l) => walk(&l.children)?,
                    Node::ListItem(li) => walk(&li.children)?,
                    Node::Emphasis(e) => walk(&e.children)?,
                    Node::Strong(s) => walk(&s.children)?,
                    Node::Delete(d) => walk(&d.children)?,
                    Node::Link(l) => walk(&l.children)?,
                    Node::Code(_) | Node::Text(_) | Node::InlineCode(_) => {}
                }
            }
            Ok(())
        }
        walk(&self.children)
    }
}
