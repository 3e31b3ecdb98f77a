use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use scoregraph_core::{to_json, ExpressionRecord};

use crate::error::{PageError, PageResult};

/// Marker replaced by the expression list in the page template.
pub const DEFAULT_PLACEHOLDER: &str = "{{EXPRS_JSON_STRING}}";

/// An HTML page template with a single substitution point.
///
/// The text is treated as opaque; nothing beyond the placeholder is
/// inspected.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    text: String,
}

impl PageTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> PageResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PageError::TemplateNotFound(path.to_path_buf()),
            _ => PageError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        debug!("loaded template {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_placeholder(&self, placeholder: &str) -> bool {
        self.text.contains(placeholder)
    }

    /// Replace every occurrence of `placeholder` with `payload`.
    pub fn render(&self, placeholder: &str, payload: &str) -> String {
        if !self.has_placeholder(placeholder) {
            warn!("template has no {placeholder} marker; page written unchanged");
        }
        self.text.replace(placeholder, payload)
    }
}

/// What a page write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub output: PathBuf,
    pub records: usize,
    pub bytes: usize,
}

/// Render `records` into the template at `template_path` and write the page
/// to `output_path`.
pub fn write_page(
    template_path: &Path,
    output_path: &Path,
    placeholder: &str,
    records: &[ExpressionRecord],
) -> PageResult<PageSummary> {
    let template = PageTemplate::load(template_path)?;
    let payload = to_json(records, false)?;
    let page = template.render(placeholder, &payload);

    fs::write(output_path, &page).map_err(|e| PageError::Io {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    info!(
        "wrote {} ({} expressions, {} bytes)",
        output_path.display(),
        records.len(),
        page.len()
    );

    Ok(PageSummary {
        output: output_path.to_path_buf(),
        records: records.len(),
        bytes: page.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoregraph_core::build_expressions;

    const TEMPLATE: &str = "<script>var exprs = {{EXPRS_JSON_STRING}};</script>";

    #[test]
    fn test_render_substitutes_placeholder() {
        let t = PageTemplate::new(TEMPLATE);
        assert_eq!(
            t.render(DEFAULT_PLACEHOLDER, "[]"),
            "<script>var exprs = [];</script>"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let t = PageTemplate::new("{{X}} and {{X}}");
        assert_eq!(t.render("{{X}}", "1"), "1 and 1");
    }

    #[test]
    fn test_render_without_placeholder_is_unchanged() {
        let t = PageTemplate::new("<html></html>");
        assert!(!t.has_placeholder(DEFAULT_PLACEHOLDER));
        assert_eq!(t.render(DEFAULT_PLACEHOLDER, "[]"), "<html></html>");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageTemplate::load(&dir.path().join("nope.html")).unwrap_err();
        assert!(matches!(err, PageError::TemplateNotFound(_)));
        assert!(err.to_string().contains("nope.html"));
    }

    #[test]
    fn test_write_page_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("desmosTemplate.html");
        let output_path = dir.path().join("desmos.html");
        fs::write(&template_path, TEMPLATE).unwrap();

        let records = build_expressions("s", &[("a", 1.0, 1.0).into(), ("b", 2.0, 2.0).into()]);
        let summary =
            write_page(&template_path, &output_path, DEFAULT_PLACEHOLDER, &records).unwrap();
        assert_eq!(summary.records, 15);

        let page = fs::read_to_string(&output_path).unwrap();
        assert!(page.starts_with(r#"<script>var exprs = [{"id":"sFormulaPointer""#));
        assert!(page.ends_with("];</script>"));
        assert!(!page.contains(DEFAULT_PLACEHOLDER));
        assert_eq!(summary.bytes, page.len());

        let json = page
            .strip_prefix("<script>var exprs = ")
            .and_then(|s| s.strip_suffix(";</script>"))
            .unwrap();
        let parsed: Vec<ExpressionRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_write_page_missing_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("out.html");
        let err = write_page(
            &dir.path().join("missing.html"),
            &output_path,
            DEFAULT_PLACEHOLDER,
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, PageError::TemplateNotFound(_)));
        assert!(!output_path.exists());
    }
}
