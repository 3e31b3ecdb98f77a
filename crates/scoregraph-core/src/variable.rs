use serde::{Deserialize, Serialize};

use crate::palette::{ColorCycle, BLACK};
use crate::range::{RangeSpec, ValueRange, COEFFICIENT_SCALAR_MAX, MEASURE_SCALAR_MAX};

// ---------------------------------------------------------------------------
// NamedVariable
// ---------------------------------------------------------------------------

/// One plotted quantity: either a measure of a score, or the score itself
/// (empty `suffix`) and its aggregate functions.
///
/// Every LaTeX symbol is derived from `prefix` and `suffix` on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVariable {
    pub prefix: String,
    pub suffix: String,
    pub coefficient: ValueRange,
    pub measure: ValueRange,
    pub color: String,
}

impl NamedVariable {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        coefficient: ValueRange,
        measure: ValueRange,
        color: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            coefficient,
            measure,
            color: color.into(),
        }
    }

    /// A score-level variable (the score or one of its means), drawn in black.
    pub fn aggregate(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(
            prefix,
            suffix,
            ValueRange::default_coefficient(),
            ValueRange::default_measure(),
            BLACK,
        )
    }

    /// Build a measure of score `prefix`, drawing its color from `colors`
    /// unless the measure names one.
    pub fn measure(prefix: impl Into<String>, spec: &MeasureSpec, colors: &mut ColorCycle) -> Self {
        let color = colors.resolve(spec.color.as_deref());
        Self::new(
            prefix,
            spec.name.clone(),
            spec.coefficient_range(),
            spec.measure_range(),
            color,
        )
    }

    /// `prefix` followed by the capitalized `suffix`, e.g. `mobilityCall`.
    pub fn full(&self) -> String {
        format!("{}{}", self.prefix, capitalize(&self.suffix))
    }

    /// Capitalized suffix, used as the point label.
    pub fn label(&self) -> String {
        capitalize(&self.suffix)
    }

    pub fn subscript_prefix(&self, base: &str) -> String {
        subscript(base, &self.prefix)
    }

    pub fn subscript_full(&self, base: &str) -> String {
        subscript(base, &self.full())
    }

    /// Free input variable, `x_{suffix}`.
    pub fn input(&self) -> String {
        subscript("x", &self.suffix)
    }

    pub fn coefficient_symbol(&self) -> String {
        self.subscript_full("c")
    }

    pub fn measure_symbol(&self) -> String {
        self.subscript_full("m")
    }

    pub fn function_symbol(&self) -> String {
        self.subscript_full("f")
    }

    pub fn graph_symbol(&self) -> String {
        self.subscript_full("g")
    }

    pub fn derivative_symbol(&self) -> String {
        self.subscript_full("d")
    }

    /// Name of the score function this variable defines, `s_{full}`.
    pub fn score_symbol(&self) -> String {
        self.subscript_full("s")
    }
}

fn subscript(base: &str, sub: &str) -> String {
    format!("{base}_{{{sub}}}")
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// MeasureSpec
// ---------------------------------------------------------------------------

/// Input description of one measure, as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient: Option<RangeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<RangeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MeasureSpec {
    /// A measure with default coefficient and measure sliders.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coefficient: None,
            measure: None,
            color: None,
        }
    }

    pub fn with_coefficient(mut self, coefficient: impl Into<RangeSpec>) -> Self {
        self.coefficient = Some(coefficient.into());
        self
    }

    pub fn with_measure(mut self, measure: impl Into<RangeSpec>) -> Self {
        self.measure = Some(measure.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Coefficient slider; a bare value spans 0..10.
    pub fn coefficient_range(&self) -> ValueRange {
        self.coefficient
            .map(|c| c.resolve(COEFFICIENT_SCALAR_MAX))
            .unwrap_or_else(ValueRange::default_coefficient)
    }

    /// Measure slider; a bare value spans 0..100.
    pub fn measure_range(&self) -> ValueRange {
        self.measure
            .map(|m| m.resolve(MEASURE_SCALAR_MAX))
            .unwrap_or_else(ValueRange::default_measure)
    }
}

impl From<(&str, f64, f64)> for MeasureSpec {
    fn from((name, coefficient, measure): (&str, f64, f64)) -> Self {
        Self::named(name)
            .with_coefficient(coefficient)
            .with_measure(measure)
    }
}

impl From<&str> for MeasureSpec {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}
