//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config` on the command line
//! 2. `$SCOREGRAPH_CONFIG` environment variable
//! 3. `config.toml` in the platform config dir
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use scoregraph_core::{Mean, MeasureSpec, ScoreSpec};
use scoregraph_page::DEFAULT_PLACEHOLDER;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub scores: Vec<ScoreSpec>,
}

/// Template and output settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Marker in the template replaced by the expression list.
    pub placeholder: String,
    /// Mean the score formula points at when the page loads.
    pub mean: Mean,
}

// --- Defaults ---

impl Default for Config {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            scores: vec![default_score()],
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("desmosTemplate.html"),
            output: PathBuf::from("desmos.html"),
            placeholder: DEFAULT_PLACEHOLDER.into(),
            mean: Mean::Arithmetic,
        }
    }
}

/// The mobility score the page was first built for.
fn default_score() -> ScoreSpec {
    ScoreSpec::new(
        "mobility",
        vec![
            MeasureSpec::from(("call", 1.0, 15.0)),
            MeasureSpec::from(("gps", 2.0, 7.0)),
            MeasureSpec::from(("camera", 8.0, 4.0)),
            MeasureSpec::from(("sn", 4.0, 9.0)),
            MeasureSpec::from(("runtastic", 2.0, 30.0)),
        ],
    )
}

/// Load config from disk. Returns defaults if no config file exists.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return read_config(p);
    }

    if let Some(p) = config_path() {
        if p.exists() {
            return read_config(&p);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Resolve the implicit config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("SCOREGRAPH_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. Platform config dir
    directories::ProjectDirs::from("dev", "scoregraph", "scoregraph")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Show the active config path (for `scoregraph config`).
pub fn show_config_path(explicit: Option<&Path>) -> String {
    match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoregraph_core::{RangeSpec, ValueRange};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page.template, PathBuf::from("desmosTemplate.html"));
        assert_eq!(config.page.output, PathBuf::from("desmos.html"));
        assert_eq!(config.page.placeholder, "{{EXPRS_JSON_STRING}}");
        assert_eq!(config.page.mean, Mean::Arithmetic);
        assert_eq!(config.scores.len(), 1);
        assert_eq!(config.scores[0].name, "mobility");
        let names: Vec<&str> = config.scores[0]
            .measures
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, ["call", "gps", "camera", "sn", "runtastic"]);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[page]
mean = "geometric"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.page.mean, Mean::Geometric);
        // Other fields should be defaults
        assert_eq!(config.page.output, PathBuf::from("desmos.html"));
        assert_eq!(config.scores[0].name, "mobility");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r##"
[page]
template = "tpl/page.html"
output = "out/page.html"
placeholder = "@@EXPRS@@"
mean = "arithmetic"

[[scores]]
name = "health"
measures = [
    { name = "steps", coefficient = 3, measure = 40 },
    { name = "sleep", coefficient = [2, 0, 5], measure = { value = 7, min = 0, max = 12 }, color = "#123456" },
    { name = "diet" },
]
"##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.page.template, PathBuf::from("tpl/page.html"));
        assert_eq!(config.page.placeholder, "@@EXPRS@@");
        assert_eq!(config.scores.len(), 1);

        let measures = &config.scores[0].measures;
        assert_eq!(measures[0].coefficient, Some(RangeSpec::Scalar(3.0)));
        assert_eq!(measures[1].coefficient, Some(RangeSpec::Triple([2.0, 0.0, 5.0])));
        assert_eq!(
            measures[1].measure,
            Some(RangeSpec::Range(ValueRange::new(7.0, 0.0, 12.0)))
        );
        assert_eq!(measures[1].color.as_deref(), Some("#123456"));
        assert!(measures[2].coefficient.is_none());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("absent.toml").as_path())).is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoregraph.toml");
        std::fs::write(&path, "[[scores]]\nname = \"s\"\nmeasures = [{ name = \"a\" }]\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.scores[0].name, "s");
        assert!(show_config_path(Some(path.as_path())).ends_with("(loaded)"));
    }
}
