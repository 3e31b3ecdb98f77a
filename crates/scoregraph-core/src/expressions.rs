//! Assembly of the expression list for one or more scores.
//!
//! Each score contributes three hidden formulas (a pointer to the live mean,
//! then the arithmetic and geometric definitions) followed by six records per
//! measure: two sliders, the partial graph with its point, and the dashed
//! derivative with its point.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::ScoreGraphResult;
use crate::latex;
use crate::palette::ColorCycle;
use crate::record::{ExpressionRecord, LineStyle};
use crate::variable::{MeasureSpec, NamedVariable};

// ---------------------------------------------------------------------------
// Mean
// ---------------------------------------------------------------------------

/// Which blend the score's pointer formula refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mean {
    #[default]
    Arithmetic,
    Geometric,
}

impl Mean {
    /// Suffix of the score variable defining this mean.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Arithmetic => "ari",
            Self::Geometric => "geo",
        }
    }
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic => write!(f, "arithmetic"),
            Self::Geometric => write!(f, "geometric"),
        }
    }
}

impl std::str::FromStr for Mean {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arithmetic" | "ari" => Ok(Self::Arithmetic),
            "geometric" | "geo" => Ok(Self::Geometric),
            _ => Err(format!("invalid mean: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreSpec
// ---------------------------------------------------------------------------

/// A score and its measures, in plotting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSpec {
    pub name: String,
    #[serde(default)]
    pub measures: Vec<MeasureSpec>,
}

impl ScoreSpec {
    pub fn new(name: impl Into<String>, measures: Vec<MeasureSpec>) -> Self {
        Self {
            name: name.into(),
            measures,
        }
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Expression list for a single score, with a fresh palette and the
/// arithmetic mean live.
pub fn build_expressions(score: &str, measures: &[MeasureSpec]) -> Vec<ExpressionRecord> {
    let spec = ScoreSpec::new(score, measures.to_vec());
    build_score(&spec, Mean::Arithmetic, &mut ColorCycle::new())
}

/// Expression list for several scores on one page. All scores draw from the
/// same palette cursor, so measure colors keep cycling across scores.
pub fn build_page(scores: &[ScoreSpec], mean: Mean) -> Vec<ExpressionRecord> {
    let mut colors = ColorCycle::new();
    scores
        .iter()
        .flat_map(|score| build_score(score, mean, &mut colors))
        .collect()
}

/// Expression list for one score, drawing measure colors from `colors`.
pub fn build_score(spec: &ScoreSpec, mean: Mean, colors: &mut ColorCycle) -> Vec<ExpressionRecord> {
    let name = spec.name.as_str();
    let score = NamedVariable::aggregate(name, "");
    let ari = NamedVariable::aggregate(name, Mean::Arithmetic.suffix());
    let geo = NamedVariable::aggregate(name, Mean::Geometric.suffix());
    let live = match mean {
        Mean::Arithmetic => &ari,
        Mean::Geometric => &geo,
    };

    let vars: Vec<NamedVariable> = spec
        .measures
        .iter()
        .map(|m| NamedVariable::measure(name, m, colors))
        .collect();

    let mut exprs = Vec::with_capacity(3 + 6 * vars.len());
    exprs.push(
        ExpressionRecord::expression(
            format!("{name}FormulaPointer"),
            format!(
                "{}={}",
                latex::function_lhs(&score, &vars),
                latex::function_lhs(live, &vars)
            ),
        )
        .hidden(),
    );
    exprs.push(
        ExpressionRecord::expression(
            format!("{name}FormulaAri"),
            format!(
                "{}={}",
                latex::function_lhs(&ari, &vars),
                latex::arithmetic_mean(&vars)
            ),
        )
        .hidden(),
    );
    exprs.push(
        ExpressionRecord::expression(
            format!("{name}FormulaGeo"),
            format!(
                "{}={}",
                latex::function_lhs(&geo, &vars),
                latex::geometric_mean(&vars)
            ),
        )
        .hidden(),
    );

    for var in &vars {
        debug!(
            "{}: restriction {}",
            var.full(),
            latex::restriction_clause(var)
        );
        exprs.extend(measure_records(var, &score, &vars));
    }

    debug!(score = name, %mean, records = exprs.len(), "assembled score expressions");
    exprs
}

/// The six records plotting one measure against the score.
fn measure_records(
    var: &NamedVariable,
    score: &NamedVariable,
    vars: &[NamedVariable],
) -> [ExpressionRecord; 6] {
    let full = var.full();
    [
        ExpressionRecord::expression(
            format!("{full}MeasSlider"),
            format!("{}={}", var.measure_symbol(), var.measure.value),
        )
        .with_slider_bounds(&var.measure),
        ExpressionRecord::expression(
            format!("{full}CoefSlider"),
            format!("{}={}", var.coefficient_symbol(), var.coefficient.value),
        )
        .with_slider_bounds(&var.coefficient),
        ExpressionRecord::expression(
            format!("{full}Graph"),
            latex::partial_graph(var, score, vars),
        )
        .with_color(&var.color),
        ExpressionRecord::expression(
            format!("{full}GraphPoint"),
            latex::slider_point(var, &var.graph_symbol()),
        )
        .with_label(var.label())
        .with_color(&var.color),
        ExpressionRecord::expression(format!("{full}DerivateGraph"), latex::derivative_graph(var))
            .with_color(&var.color)
            .with_style(LineStyle::Dashed),
        ExpressionRecord::expression(
            format!("{full}DerivateGraphPoint"),
            latex::slider_point(var, &var.derivative_symbol()),
        )
        .with_label("")
        .with_color(&var.color),
    ]
}

/// Serialize records as a JSON array; compact unless `pretty`.
pub fn to_json(records: &[ExpressionRecord], pretty: bool) -> ScoreGraphResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
