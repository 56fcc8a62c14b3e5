use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Download failed for {url}: {message}")]
    Download { url: String, message: String },
}

impl CatalogError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn download(url: &str, message: impl std::fmt::Display) -> Self {
        Self::Download {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the dataset could not be obtained at all, as opposed to being
    /// present but corrupt.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Download { .. })
    }
}
