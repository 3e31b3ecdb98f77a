use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] scoregraph_core::ScoreGraphError),
}

pub type PageResult<T> = Result<T, PageError>;
