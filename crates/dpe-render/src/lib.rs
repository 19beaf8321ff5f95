//! Renderer for the line-oriented report markup dialect.
//!
//! A report is a sequence of lines: numbered top-level sections (`# `),
//! sub-headings, bullet and ordered lists, pipe tables, `:::kind` callouts
//! and `<!-- chart-kind: {json} -->` directives. [`BlockScanner`] walks the
//! lines once, in order, and produces body HTML plus the list of sections
//! used for the table of contents.
//!
//! # Architecture
//!
//! - [`color`]: hex colors and tint blending for theme derivation
//! - inline markup: escaping, emphasis and French priority badges
//! - [`table`]: pipe-table rows to `<table>`
//! - callouts, section banners and chart directives
//! - the block scanner that ties them together
//! - [`inject_chart_directives`]: adds chart directives to model output
//!
//! Rendering never fails. Malformed directives, unknown callout kinds and
//! unusable chart payloads produce no output for the affected line.
//!
//! # Example
//!
//! ```
//! use dpe_render::render_report;
//!
//! let result = render_report("# Isolation\n:::tip\nIsoler les combles en priorité.\n:::");
//! assert_eq!(result.sections[0].title, "Isolation");
//! assert!(result.html.contains("callout-tip"));
//! ```

mod callout;
pub mod color;
mod directive;
mod inject;
mod inline;
mod scanner;
mod section;
pub mod table;

pub use callout::CalloutKind;
pub use color::{ColorError, Rgb, lighten};
pub use directive::{ChartDirective, ChartKind};
pub use inject::inject_chart_directives;
pub use inline::{Badges, escape_html, render_inline};
pub use scanner::{BlockScanner, RenderResult, render_report};
pub use section::{SECTION_COLORS, Section};
