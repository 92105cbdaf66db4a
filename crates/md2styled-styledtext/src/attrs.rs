//! Attribute types for styled-text runs
//!
//! Attributes stay abstract: color is a role, not an RGB value, and fonts are
//! described by weight/slant/size/monospace rather than a concrete face. The
//! rendering surface maps these onto its own primitives.

use serde::{Deserialize, Serialize};

/// Platform-default body point size.
pub const DEFAULT_POINT_SIZE: f32 = 15.0;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font slant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Upright,
    Italic,
}

/// Foreground color category, resolved to concrete colors by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    #[default]
    Default,
    /// Secondary/gray text (code, block quotes)
    Muted,
    /// Hyperlink text
    Link,
}

/// Tab stop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabAlignment {
    Left,
    Right,
}

/// A single tab stop within a paragraph layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabStop {
    pub alignment: TabAlignment,
    pub position: f32,
}

impl TabStop {
    pub fn left(position: f32) -> Self {
        Self {
            alignment: TabAlignment::Left,
            position,
        }
    }

    pub fn right(position: f32) -> Self {
        Self {
            alignment: TabAlignment::Right,
            position,
        }
    }
}

/// Paragraph layout attached to runs that begin an indented line
/// (list-item leaders and block-quote leading tabs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLayout {
    /// Tab stops, in order of position
    pub tab_stops: Vec<TabStop>,
    /// Indentation applied to wrapped lines
    pub head_indent: f32,
    /// Same-family container nesting depth this layout was computed for
    pub nesting_depth: usize,
}

/// Attribute set carried by a [`crate::Run`]
///
/// Composition rules in [`crate::Fragment`] only ever set or strengthen the
/// keys they target; everything else on the run is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attrs {
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub slant: FontSlant,
    pub point_size: f32,
    #[serde(default)]
    pub monospace: bool,
    #[serde(default)]
    pub color: ColorRole,
    #[serde(default)]
    pub strikethrough: bool,
    /// Navigable link target, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ParagraphLayout>,
}

impl Default for Attrs {
    fn default() -> Self {
        Self::body(DEFAULT_POINT_SIZE)
    }
}

impl Attrs {
    /// Plain body text attributes at the given point size
    pub fn body(point_size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            slant: FontSlant::Upright,
            point_size,
            monospace: false,
            color: ColorRole::Default,
            strikethrough: false,
            link: None,
            layout: None,
        }
    }

    /// Attributes with a paragraph layout attached
    pub fn with_layout(mut self, layout: ParagraphLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Monospace variant of these attributes
    pub fn monospaced(mut self) -> Self {
        self.monospace = true;
        self
    }
}
