//! LaTeX fragments for the score formulas.
//!
//! Formulas are first written with plain ASCII tokens (`(`, `*`, `<=`, ...)
//! and then passed through [`escape`], which rewrites them to their LaTeX
//! spelling.

use crate::variable::NamedVariable;

/// Token rewrites, applied strictly in this order. Parentheses and spaces go
/// first so the spaces introduced by `\cdot `, `\le ` and `\ge ` survive.
pub const REPLACEMENTS: [(&str, &str); 6] = [
    ("(", r"\left("),
    (")", r"\right)"),
    (" ", r"\ "),
    ("*", r"\cdot "),
    ("<=", r"\le "),
    (">=", r"\ge "),
];

/// Derivative operator with respect to `x`.
pub const DERIVATIVE: &str = r"\frac{d}{dx}";

/// Rewrite ASCII tokens to LaTeX, one [`REPLACEMENTS`] entry at a time.
pub fn escape(formula: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(formula.to_string(), |acc, (token, latex)| {
            acc.replace(token, latex)
        })
}

pub fn fraction(numerator: &str, denominator: &str) -> String {
    format!(r"\frac{{{numerator}}}{{{denominator}}}")
}

pub fn power(base: &str, exponent: &str) -> String {
    format!("{base}^{{{exponent}}}")
}

/// `{min <= x <= max}` over the variable's measure range.
pub fn restriction_clause(var: &NamedVariable) -> String {
    escape(&format!(
        r"\left\{{{}<=x<={}\right\}}",
        var.measure.min, var.measure.max
    ))
}

/// `c_1+c_2+...`, shared by both means so their weights always agree.
pub fn coefficient_sum(vars: &[NamedVariable]) -> String {
    let terms: Vec<String> = vars.iter().map(|v| v.coefficient_symbol()).collect();
    escape(&terms.join("+"))
}

/// Weighted arithmetic mean: `sum(x_i * c_i) / sum(c_i)`.
pub fn arithmetic_mean(vars: &[NamedVariable]) -> String {
    let terms: Vec<String> = vars
        .iter()
        .map(|v| format!("{}*{}", v.input(), v.coefficient_symbol()))
        .collect();
    fraction(&escape(&terms.join("+")), &coefficient_sum(vars))
}

/// Weighted geometric mean: `(prod x_i^c_i)^(1 / sum(c_i))`.
pub fn geometric_mean(vars: &[NamedVariable]) -> String {
    let factors: Vec<String> = vars
        .iter()
        .map(|v| power(&v.input(), &v.coefficient_symbol()))
        .collect();
    let base = escape(&format!("({})", factors.join("*")));
    power(&base, &fraction("1", &coefficient_sum(vars)))
}

/// `(x_a, x_b, ...)`, the free inputs of a score function.
pub fn input_params(vars: &[NamedVariable]) -> String {
    let inputs: Vec<String> = vars.iter().map(|v| v.input()).collect();
    escape(&format!("({})", inputs.join(", ")))
}

/// `(m_a, m_b, ...)` with the slider value of each measure, except `as_x`
/// (matched by full name) which is left free as `x`.
pub fn param_list(vars: &[NamedVariable], as_x: Option<&NamedVariable>) -> String {
    let free = as_x.map(|v| v.full());
    let params: Vec<String> = vars
        .iter()
        .map(|v| {
            if free.as_deref() == Some(v.full().as_str()) {
                "x".to_string()
            } else {
                v.measure_symbol()
            }
        })
        .collect();
    escape(&format!("({})", params.join(", ")))
}

/// Left-hand side of a score function definition, `s_{full}(x_a, ...)`.
pub fn function_lhs(func: &NamedVariable, vars: &[NamedVariable]) -> String {
    format!("{}{}", func.score_symbol(), input_params(vars))
}

/// `g(x)=s(m_a, x, m_c){min<=x<=max}`: the score with every measure but
/// `graph` pinned to its slider, drawn over `graph`'s measure range.
pub fn partial_graph(graph: &NamedVariable, func: &NamedVariable, vars: &[NamedVariable]) -> String {
    format!(
        "{}{}{}{}{}",
        graph.graph_symbol(),
        escape("(x)="),
        func.score_symbol(),
        param_list(vars, Some(graph)),
        restriction_clause(graph)
    )
}

/// `d(x)=d/dx(g(x))`
pub fn derivative_graph(var: &NamedVariable) -> String {
    escape(&format!(
        "{}(x)={DERIVATIVE}({}(x))",
        var.derivative_symbol(),
        var.graph_symbol()
    ))
}

/// `(m, f(m))`: the slider position on the curve named by `curve`.
pub fn slider_point(var: &NamedVariable, curve: &str) -> String {
    let m = var.measure_symbol();
    escape(&format!("({m}, {curve}({m}))"))
}
