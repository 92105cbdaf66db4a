//! Styled-text fragments and attribute composition rules
//!
//! A [`Fragment`] is an ordered sequence of [`Run`]s; concatenation is the only
//! merge operation, and the empty fragment is its identity element. Styling
//! operations consume the fragment and return a new one with every run's
//! attributes updated by set-union semantics: only the targeted keys change.

use serde::{Deserialize, Serialize};

use crate::attrs::{Attrs, ColorRole, FontSlant, FontWeight};

/// A contiguous span of text sharing one attribute set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub attrs: Attrs,
}

impl Run {
    pub fn new(text: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            text: text.into(),
            attrs,
        }
    }
}

/// An ordered, concatenable sequence of styled runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fragment {
    pub runs: Vec<Run>,
}

impl Fragment {
    /// The empty fragment (identity element for [`Fragment::concat`])
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_run(run: Run) -> Self {
        Self { runs: vec![run] }
    }

    /// One-run fragment
    pub fn run(text: impl Into<String>, attrs: Attrs) -> Self {
        Self::from_run(Run::new(text, attrs))
    }

    /// A single line-break run at body attributes
    pub fn newline(point_size: f32) -> Self {
        Self::run("\n", Attrs::body(point_size))
    }

    /// A double line-break run at body attributes
    pub fn double_newline(point_size: f32) -> Self {
        Self::run("\n\n", Attrs::body(point_size))
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Append `other`'s runs after this fragment's runs, in order
    pub fn append(&mut self, other: Fragment) {
        self.runs.extend(other.runs);
    }

    /// Concatenation: runs of `self` followed by runs of `other`
    pub fn concat(mut self, other: Fragment) -> Self {
        self.append(other);
        self
    }

    /// Prepend a single run (list-item leaders, block-quote tabs)
    pub fn with_leading_run(mut self, run: Run) -> Self {
        self.runs.insert(0, run);
        self
    }

    /// Plain text content of the fragment, attributes dropped
    pub fn to_plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    fn map_attrs(mut self, f: impl Fn(&mut Attrs)) -> Self {
        for run in &mut self.runs {
            f(&mut run.attrs);
        }
        self
    }

    /// Set the italic slant on every run, preserving all other attributes
    pub fn italic(self) -> Self {
        self.map_attrs(|a| a.slant = FontSlant::Italic)
    }

    /// Set the bold weight on every run, preserving all other attributes
    pub fn bold(self) -> Self {
        self.map_attrs(|a| a.weight = FontWeight::Bold)
    }

    /// Set the strikethrough flag on every run
    pub fn strikethrough(self) -> Self {
        self.map_attrs(|a| a.strikethrough = true)
    }

    /// Apply link styling: link color always, navigable target only when a
    /// non-empty destination is present
    pub fn link(self, target: Option<String>) -> Self {
        let target = target.filter(|t| !t.is_empty());
        self.map_attrs(|a| {
            a.color = ColorRole::Link;
            a.link = target.clone();
        })
    }

    /// Apply heading styling for a level in 1..=6: bold weight, and a point
    /// size of `base_size + (14 - 2 * level)` replacing any prior size.
    /// Slant, color and the other attributes are preserved.
    pub fn heading(self, level: u8, base_size: f32) -> Self {
        let size = base_size + (14.0 - 2.0 * f32::from(level));
        self.map_attrs(|a| {
            a.weight = FontWeight::Bold;
            a.point_size = size;
        })
    }

    /// Overwrite the color role on every run, preserving all other attributes
    pub fn recolor(self, color: ColorRole) -> Self {
        self.map_attrs(|a| a.color = color)
    }
}
