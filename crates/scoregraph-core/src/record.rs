use serde::{Deserialize, Serialize};

use crate::range::ValueRange;

// ---------------------------------------------------------------------------
// Expression record
// ---------------------------------------------------------------------------

/// One entry of the graph's expression list.
///
/// Field order is the serialized key order; optional keys are left out
/// entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ExpressionKind,
    pub latex: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_bounds: Option<SliderBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_label: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
}

impl ExpressionRecord {
    pub fn expression(id: impl Into<String>, latex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ExpressionKind::Expression,
            latex: latex.into(),
            hidden: false,
            slider_bounds: None,
            label: None,
            show_label: false,
            color: None,
            style: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_slider_bounds(mut self, range: &ValueRange) -> Self {
        self.slider_bounds = Some(SliderBounds::from(range));
        self
    }

    /// Attach a visible label (an empty label still shows the coordinates).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self.show_label = true;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionKind {
    Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineStyle {
    Dashed,
}

/// Slider limits, kept as strings since the page accepts expressions there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: String,
    pub max: String,
}

impl From<&ValueRange> for SliderBounds {
    fn from(range: &ValueRange) -> Self {
        Self {
            min: range.min.to_string(),
            max: range.max.to_string(),
        }
    }
}
