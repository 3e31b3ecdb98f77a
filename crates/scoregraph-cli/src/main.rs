mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use scoregraph_core::{build_page, to_json, Mean};
use scoregraph_page::write_page;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "scoregraph",
    version,
    about = "Generate a graphing-calculator page blending score measures"
)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the expression list into the page template (default)
    Generate {
        /// HTML template containing the placeholder
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Page to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Mean the score formula points at
        #[arg(short, long)]
        mean: Option<CliMean>,
    },

    /// Print the expression list as JSON
    Json {
        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Mean the score formula points at
        #[arg(short, long)]
        mean: Option<CliMean>,
    },

    /// Show the active configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMean {
    Arithmetic,
    Geometric,
}

impl From<CliMean> for Mean {
    fn from(val: CliMean) -> Self {
        match val {
            CliMean::Arithmetic => Mean::Arithmetic,
            CliMean::Geometric => Mean::Geometric,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        None => cmd_generate(&cfg, None, None, None),
        Some(Commands::Generate {
            template,
            output,
            mean,
        }) => cmd_generate(&cfg, template, output, mean.map(Into::into)),
        Some(Commands::Json { pretty, mean }) => cmd_json(&cfg, pretty, mean.map(Into::into)),
        Some(Commands::Config) => cmd_config(&cfg, cli.config.as_deref()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_generate(
    cfg: &Config,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    mean: Option<Mean>,
) -> Result<()> {
    let template = template.unwrap_or_else(|| cfg.page.template.clone());
    let output = output.unwrap_or_else(|| cfg.page.output.clone());
    let mean = mean.unwrap_or(cfg.page.mean);

    let records = build_page(&cfg.scores, mean);
    let summary = write_page(&template, &output, &cfg.page.placeholder, &records)
        .with_context(|| format!("generating {}", output.display()))?;

    println!(
        "Wrote {} expressions to {} ({} bytes)",
        summary.records,
        summary.output.display(),
        summary.bytes
    );
    Ok(())
}

fn cmd_json(cfg: &Config, pretty: bool, mean: Option<Mean>) -> Result<()> {
    let records = build_page(&cfg.scores, mean.unwrap_or(cfg.page.mean));
    println!("{}", to_json(&records, pretty)?);
    Ok(())
}

fn cmd_config(cfg: &Config, explicit: Option<&Path>) -> Result<()> {
    println!("Config: {}", config::show_config_path(explicit));
    println!();
    println!("[page]");
    println!("  template = {}", cfg.page.template.display());
    println!("  output = {}", cfg.page.output.display());
    println!("  placeholder = {}", cfg.page.placeholder);
    println!("  mean = {}", cfg.page.mean);
    for score in &cfg.scores {
        println!();
        println!("[[scores]] {}", score.name);
        for m in &score.measures {
            println!(
                "  {}: coefficient {}, measure {}{}",
                m.name,
                m.coefficient_range(),
                m.measure_range(),
                m.color
                    .as_deref()
                    .map(|c| format!(", color {c}"))
                    .unwrap_or_default()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_generate() {
        let cli = Cli::try_parse_from(["scoregraph"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "scoregraph",
            "generate",
            "--template",
            "t.html",
            "-o",
            "o.html",
            "--mean",
            "geometric",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate {
                template,
                output,
                mean,
            }) => {
                assert_eq!(template, Some(PathBuf::from("t.html")));
                assert_eq!(output, Some(PathBuf::from("o.html")));
                assert_eq!(mean.map(Mean::from), Some(Mean::Geometric));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["scoregraph", "json", "--pretty", "--config", "c.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Some(Commands::Json { pretty: true, .. })));
    }

    #[test]
    fn test_generate_writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("desmosTemplate.html");
        let output = dir.path().join("desmos.html");
        std::fs::write(&template, "exprs = {{EXPRS_JSON_STRING}};").unwrap();

        let cfg = Config::default();
        cmd_generate(&cfg, Some(template), Some(output.clone()), None).unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.starts_with(r#"exprs = [{"id":"mobilityFormulaPointer""#));
        assert!(page.contains(r#""id":"mobilityRuntasticDerivateGraphPoint""#));
        assert!(page.contains(r#""sliderBounds":{"min":"0","max":"100"}"#));
    }

    #[test]
    fn test_generate_without_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::default();
        let err = cmd_generate(
            &cfg,
            Some(dir.path().join("missing.html")),
            Some(dir.path().join("out.html")),
            None,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("template not found"));
    }
}
