//! Page output: loads the HTML template and writes the rendered graph page.

pub mod error;
pub mod template;

pub use error::{PageError, PageResult};
pub use template::{write_page, PageSummary, PageTemplate, DEFAULT_PLACEHOLDER};
