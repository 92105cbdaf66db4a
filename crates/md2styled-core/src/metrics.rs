//! Layout metrics for lists and block quotes
//!
//! Pure arithmetic over nesting depth plus a text-measurement seam
//! ([`FontMetrics`]) for sizing the bullet and numeral columns. Renderers with
//! real font tables implement the trait; [`ApproxFontMetrics`] gives a
//! deterministic per-character approximation when none is available.

use md2styled_styledtext::{ParagraphLayout, TabStop};

/// Base amount every list/quote is spaced from the left side, to visually
/// differentiate it from surrounding body text
pub const BASE_LEFT_MARGIN: f32 = 15.0;
/// Additional indentation per nesting level
pub const INDENT_PER_LEVEL: f32 = 20.0;
/// Spacing between an item's label column and its content
pub const LABEL_GAP: f32 = 8.0;
/// Bullet glyph for unordered list items
pub const BULLET: &str = "\u{2022}";

/// Advance-width measurement for the fonts the layout depends on
pub trait FontMetrics {
    /// Width of `text` rendered in the body font at `point_size`
    fn body_width(&self, text: &str, point_size: f32) -> f32;

    /// Width of `text` rendered in the fixed-width numeral font at
    /// `point_size`; every digit has the same advance in this font
    fn numeral_width(&self, text: &str, point_size: f32) -> f32;
}

/// Character-count approximation of advance widths
///
/// Widths are ceiled, and equal-length labels measure identically, which is
/// all the numeral-column arithmetic relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxFontMetrics;

impl FontMetrics for ApproxFontMetrics {
    fn body_width(&self, text: &str, point_size: f32) -> f32 {
        (text.chars().count() as f32 * point_size * 0.5).ceil()
    }

    fn numeral_width(&self, text: &str, point_size: f32) -> f32 {
        (text.chars().count() as f32 * point_size * 0.6).ceil()
    }
}

/// Left margin offset for a list nested at `depth` enclosing list containers
pub fn list_indent(depth: usize) -> f32 {
    BASE_LEFT_MARGIN + INDENT_PER_LEVEL * depth as f32
}

/// Left margin offset for a block quote nested at `depth` enclosing quotes
pub fn quote_indent(depth: usize) -> f32 {
    BASE_LEFT_MARGIN + INDENT_PER_LEVEL * depth as f32
}

fn label_columns(indent: f32, label_width: f32, depth: usize) -> ParagraphLayout {
    let first_tab = indent + label_width;
    let second_tab = first_tab + LABEL_GAP;
    ParagraphLayout {
        tab_stops: vec![TabStop::right(first_tab), TabStop::left(second_tab)],
        head_indent: second_tab,
        nesting_depth: depth,
    }
}

/// Column layout for an unordered list item: a right-aligned stop after the
/// bullet glyph, then a left-aligned stop where the content starts
pub fn bullet_columns(depth: usize, metrics: &impl FontMetrics, body_size: f32) -> ParagraphLayout {
    let bullet_width = metrics.body_width(BULLET, body_size);
    label_columns(list_indent(depth), bullet_width, depth)
}

/// Column layout for an ordered list item. The numeral column is sized for
/// the widest label in the list (`"{max_index}."`), so every item of the list
/// shares identical tab positions and the numerals align as a column.
pub fn numeral_columns(
    depth: usize,
    max_index: usize,
    metrics: &impl FontMetrics,
    body_size: f32,
) -> ParagraphLayout {
    let numeral_width = metrics.numeral_width(&format!("{max_index}."), body_size);
    label_columns(list_indent(depth), numeral_width, depth)
}

/// Layout for a block quote's leading tab: a single left-aligned stop at the
/// quote indent, which is also the head indent for wrapped lines
pub fn quote_layout(depth: usize) -> ParagraphLayout {
    let indent = quote_indent(depth);
    ParagraphLayout {
        tab_stops: vec![TabStop::left(indent)],
        head_indent: indent,
        nesting_depth: depth,
    }
}
