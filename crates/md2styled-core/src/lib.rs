//! md2styled-core: Core library for converting Markdown trees to styled text
//!
//! This crate provides:
//! - mdast node types for the input tree (built by an external parser, or
//!   deserialized from mdast-compatible JSON)
//! - Layout metrics for list and block-quote indentation and tab columns
//! - The recursive tree transducer producing a styled-text [`Fragment`]
//!
//! ## Example
//!
//! ```rust
//! use md2styled_core::{markdown_to_styled, Node, Root};
//!
//! let tree = Root::new(vec![
//!     Node::heading(1, vec![Node::text("Hello")]),
//!     Node::paragraph(vec![Node::text("World")]),
//! ]);
//!
//! let styled = markdown_to_styled(&tree);
//! assert_eq!(styled.to_plain_text(), "Hello\n\nWorld");
//! ```

pub mod convert;
pub mod mdast;
pub mod metrics;

pub use convert::{markdown_to_styled, markdown_to_styled_with_options, ConvertOptions, Converter};
pub use mdast::{MdastError, Node, Root};
pub use md2styled_styledtext::{Attrs, ColorRole, Fragment, Run};
pub use metrics::{ApproxFontMetrics, FontMetrics};
