//! Report document assembly and generation pipeline.
//!
//! Wraps the body produced by `dpe-render` into a complete, self-contained
//! HTML document: cover page, table of contents, header, summary panel,
//! photo gallery, footer and appended full-page images, all themed from two
//! configured colors.
//!
//! # Architecture
//!
//! - [`ReportOptions`]: names, theme and images for one report
//! - [`SummaryFields`]: key figures read from the report's table rows
//! - [`ImageAsset`]: images embedded as `data:` URIs
//! - [`Pipeline`]: extract, vulgarize, inject charts, assemble, render
//!
//! # Example
//!
//! ```
//! use dpe_document::{ReportOptions, assemble};
//!
//! let html = assemble("# Synthèse\nLogement classé **E**.", &ReportOptions::new("dpe.pdf"));
//! assert!(html.contains("<strong>E</strong>"));
//! ```

mod asset;
pub mod pipeline;
mod summary;
mod template;
mod theme;

pub use asset::{AssetError, ImageAsset, Photo};
pub use pipeline::{
    Extractor, HtmlRenderer, PassthroughVulgarizer, Pipeline, PipelineError, PlainTextExtractor,
    Renderer, Vulgarizer,
};
pub use summary::SummaryFields;
pub use template::{ReportOptions, assemble, render_document};
pub use theme::ThemeColors;
