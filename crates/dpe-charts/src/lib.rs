//! Inline SVG charts for energy performance reports.
//!
//! Every generator is a pure function from a small payload to a
//! self-contained SVG fragment. Invalid or empty payloads produce an empty
//! string instead of an error, so callers can splice the result directly into
//! a document.
//!
//! # Architecture
//!
//! - [`grade`]: the ordered A–G grade alphabet and its official palette
//! - [`category`]: the six known heat-loss categories
//! - [`losses`]: proportional loss breakdown (pie + legend)
//! - [`scale`]: A–G class-scale ladder, single or energy/emissions pair
//! - [`comparison`]: before/after works comparison
//!
//! # Example
//!
//! ```
//! use dpe_charts::{before_after_chart, loss_breakdown_chart};
//! use serde_json::json;
//!
//! let pie = loss_breakdown_chart(&json!({"murs": 40, "toiture": 20}));
//! assert!(pie.contains("<svg"));
//!
//! assert!(before_after_chart("D", "H").is_empty());
//! ```

pub mod category;
pub mod comparison;
mod consts;
pub mod grade;
pub mod losses;
pub mod scale;
mod svg;

pub use category::LossCategory;
pub use comparison::{before_after_chart, grade_comparison};
pub use grade::Grade;
pub use losses::{LossBreakdown, LossSlice, loss_breakdown_chart};
pub use scale::{energy_label, energy_label_chart, grade_scale};
