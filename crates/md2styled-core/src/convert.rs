//! Markdown tree to styled-text conversion
//!
//! Walks an mdast tree depth-first, left-to-right, and produces a styled-text
//! [`Fragment`]. Nesting depth and successor information are threaded down in
//! a [`Context`] rather than read back off parent pointers, so the whole
//! traversal is a single O(n) pass over an immutable tree.

use md2styled_styledtext::{Attrs, ColorRole, Fragment, Run, DEFAULT_POINT_SIZE};

use crate::mdast::{Blockquote, Code, Heading, List, Node, Paragraph, Root};
use crate::metrics::{self, ApproxFontMetrics, FontMetrics, BULLET};

/// Options for Markdown to styled-text conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Body font point size; headings and code sizes derive from it
    pub base_font_size: f32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_POINT_SIZE,
        }
    }
}

/// Convert a Markdown tree to styled text
pub fn markdown_to_styled(root: &Root) -> Fragment {
    markdown_to_styled_with_options(root, &ConvertOptions::default())
}

/// Convert a Markdown tree to styled text with options
pub fn markdown_to_styled_with_options(root: &Root, options: &ConvertOptions) -> Fragment {
    Converter::new(options.clone()).convert(root)
}

/// Per-node traversal context, threaded down during recursion
///
/// `list_depth` and `quote_depth` count enclosing same-family containers; a
/// node's own kind never counts toward its own depth. `has_successor` is true
/// when the node has sibling nodes after it.
#[derive(Debug, Clone, Copy, Default)]
struct Context {
    list_depth: usize,
    quote_depth: usize,
    has_successor: bool,
}

impl Context {
    fn in_list(self) -> bool {
        self.list_depth > 0
    }
}

/// Markdown to styled-text converter
#[derive(Debug, Clone)]
pub struct Converter<M = ApproxFontMetrics> {
    options: ConvertOptions,
    metrics: M,
}

impl Converter<ApproxFontMetrics> {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_metrics(options, ApproxFontMetrics)
    }
}

impl<M: FontMetrics> Converter<M> {
    /// Converter backed by renderer-supplied font measurement
    pub fn with_metrics(options: ConvertOptions, metrics: M) -> Self {
        Self { options, metrics }
    }

    /// Convert a whole document; the root has no trailing separation
    pub fn convert(&self, root: &Root) -> Fragment {
        self.convert_children(&root.children, Context::default())
    }

    fn base(&self) -> f32 {
        self.options.base_font_size
    }

    fn body_attrs(&self) -> Attrs {
        Attrs::body(self.base())
    }

    /// Attributes for inline code and code blocks: monospace, one point below
    /// body size, muted color
    fn code_attrs(&self) -> Attrs {
        Attrs {
            monospace: true,
            color: ColorRole::Muted,
            ..Attrs::body(self.base() - 1.0)
        }
    }

    fn convert_children(&self, children: &[Node], ctx: Context) -> Fragment {
        let mut result = Fragment::new();
        for (index, child) in children.iter().enumerate() {
            let child_ctx = Context {
                has_successor: index + 1 < children.len(),
                ..ctx
            };
            result.append(self.convert_node(child, child_ctx));
        }
        result
    }

    fn convert_node(&self, node: &Node, ctx: Context) -> Fragment {
        match node {
            Node::Text(text) => Fragment::run(&text.value, self.body_attrs()),
            Node::Emphasis(emphasis) => self.convert_children(&emphasis.children, ctx).italic(),
            Node::Strong(strong) => self.convert_children(&strong.children, ctx).bold(),
            Node::Delete(delete) => self.convert_children(&delete.children, ctx).strikethrough(),
            Node::InlineCode(code) => Fragment::run(&code.value, self.code_attrs()),
            Node::Code(code) => self.convert_code_block(code, ctx),
            Node::Link(link) => self
                .convert_children(&link.children, ctx)
                .link(link.url.clone()),
            Node::Paragraph(paragraph) => self.convert_paragraph(paragraph, ctx),
            Node::Heading(heading) => self.convert_heading(heading, ctx),
            Node::Blockquote(quote) => self.convert_blockquote(quote, ctx),
            Node::ListItem(item) => self.convert_list_item(&item.children, ctx),
            Node::List(list) if list.ordered => self.convert_ordered_list(list, ctx),
            Node::List(list) => self.convert_unordered_list(list, ctx),
        }
    }

    fn convert_paragraph(&self, paragraph: &Paragraph, ctx: Context) -> Fragment {
        let mut result = self.convert_children(&paragraph.children, ctx);
        if ctx.has_successor {
            // One line break between blocks inside a list item, two at top level
            result.append(if ctx.in_list() {
                Fragment::newline(self.base())
            } else {
                Fragment::double_newline(self.base())
            });
        }
        result
    }

    fn convert_heading(&self, heading: &Heading, ctx: Context) -> Fragment {
        let mut result = self
            .convert_children(&heading.children, ctx)
            .heading(heading.depth, self.base());
        if ctx.has_successor {
            result.append(Fragment::double_newline(self.base()));
        }
        result
    }

    fn convert_code_block(&self, code: &Code, ctx: Context) -> Fragment {
        let mut result = Fragment::run(&code.value, self.code_attrs());
        if ctx.has_successor {
            // Single line break regardless of list context
            result.append(Fragment::newline(self.base()));
        }
        result
    }

    fn convert_list_item(&self, children: &[Node], ctx: Context) -> Fragment {
        let mut result = self.convert_children(children, ctx);
        if ctx.has_successor {
            result.append(Fragment::newline(self.base()));
        }
        result
    }

    fn convert_unordered_list(&self, list: &List, ctx: Context) -> Fragment {
        let layout = metrics::bullet_columns(ctx.list_depth, &self.metrics, self.base());
        let inner = Context {
            list_depth: ctx.list_depth + 1,
            ..ctx
        };

        let mut result = Fragment::new();
        for (index, item) in list.children.iter().enumerate() {
            let item_ctx = Context {
                has_successor: index + 1 < list.children.len(),
                ..inner
            };
            let leader = Run::new(
                format!("\t{BULLET}\t"),
                self.body_attrs().with_layout(layout.clone()),
            );
            result.append(self.convert_node(item, item_ctx).with_leading_run(leader));
        }

        if ctx.has_successor {
            result.append(Fragment::double_newline(self.base()));
        }
        result
    }

    fn convert_ordered_list(&self, list: &List, ctx: Context) -> Fragment {
        // Size the numeral column for the widest label so all items align
        let layout = metrics::numeral_columns(
            ctx.list_depth,
            list.children.len(),
            &self.metrics,
            self.base(),
        );
        let inner = Context {
            list_depth: ctx.list_depth + 1,
            ..ctx
        };

        let mut result = Fragment::new();
        for (index, item) in list.children.iter().enumerate() {
            let item_ctx = Context {
                has_successor: index + 1 < list.children.len(),
                ..inner
            };
            // Numerals are set in the fixed-width numeral font
            let leader = Run::new(
                format!("\t{}.\t", index + 1),
                self.body_attrs().monospaced().with_layout(layout.clone()),
            );
            result.append(self.convert_node(item, item_ctx).with_leading_run(leader));
        }

        if ctx.has_successor {
            result.append(if ctx.in_list() {
                Fragment::newline(self.base())
            } else {
                Fragment::double_newline(self.base())
            });
        }
        result
    }

    fn convert_blockquote(&self, quote: &Blockquote, ctx: Context) -> Fragment {
        let layout = metrics::quote_layout(ctx.quote_depth);
        let inner = Context {
            quote_depth: ctx.quote_depth + 1,
            ..ctx
        };

        let mut result = Fragment::new();
        for (index, child) in quote.children.iter().enumerate() {
            let child_ctx = Context {
                has_successor: index + 1 < quote.children.len(),
                ..inner
            };
            let leader = Run::new("\t", self.body_attrs().with_layout(layout.clone()));
            result.append(
                self.convert_node(child, child_ctx)
                    .with_leading_run(leader)
                    .recolor(ColorRole::Muted),
            );
        }

        if ctx.has_successor {
            result.append(Fragment::double_newline(self.base()));
        }
        result
    }
}
