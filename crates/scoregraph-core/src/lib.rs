//! Formula and expression-list generation for blended score graphs.
//!
//! A score is a weighted blend of sub-measures, expressed both as an
//! arithmetic and a geometric mean. This crate renders the LaTeX for both
//! means and assembles the ordered expression records (sliders, partial
//! graphs, derivative curves) consumed by the graphing page.

pub mod error;
pub mod expressions;
pub mod latex;
pub mod palette;
pub mod range;
pub mod record;
pub mod variable;

pub use error::{ScoreGraphError, ScoreGraphResult};
pub use expressions::{build_expressions, build_page, build_score, to_json, Mean, ScoreSpec};
pub use palette::{ColorCycle, BLACK, PALETTE};
pub use range::{RangeSpec, ValueRange};
pub use record::{ExpressionKind, ExpressionRecord, LineStyle, SliderBounds};
pub use variable::{capitalize, MeasureSpec, NamedVariable};
