//! md2styled-styledtext: styled-text model for md2styled
//!
//! This crate provides:
//! - The styled-text output types: [`Run`], [`Fragment`], [`Attrs`]
//! - Attribute composition rules (bold, italic, strikethrough, link, heading,
//!   recoloring) with set-union semantics per run
//!
//! ## Example
//!
//! ```rust
//! use md2styled_styledtext::{Attrs, Fragment};
//!
//! let frag = Fragment::run("hello", Attrs::body(15.0)).bold().italic();
//! let run = &frag.runs[0];
//! assert_eq!(run.text, "hello");
//! assert_eq!(run.attrs.weight, md2styled_styledtext::FontWeight::Bold);
//! assert_eq!(run.attrs.slant, md2styled_styledtext::FontSlant::Italic);
//! ```

pub mod attrs;
pub mod fragment;

pub use attrs::{
    Attrs, ColorRole, FontSlant, FontWeight, ParagraphLayout, TabAlignment, TabStop,
    DEFAULT_POINT_SIZE,
};
pub use fragment::{Fragment, Run};
