use skymap_catalog::CatalogError;
use skymap_core::AstroError;
use skymap_time::TimeError;
use thiserror::Error;

pub type SkyResult<T> = Result<T, SkyMapError>;

#[derive(Debug, Error)]
pub enum SkyMapError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Astro(#[from] AstroError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid canvas size {width}x{height}: both dimensions must be positive")]
    InvalidCanvasSize { width: i64, height: i64 },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl SkyMapError {
    /// Whether the caller supplied a bad request (date, coordinates), as
    /// opposed to a configuration or dataset problem.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Time(TimeError::InvalidTimeFormat(_))
                | Self::Time(TimeError::TimeOutOfRange { .. })
                | Self::InvalidLocation(_)
        )
    }

    /// Whether a collaborator could not provide its dataset.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Catalog(e) if e.is_unavailable())
    }
}

impl From<figment::Error> for SkyMapError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_classification() {
        let out_of_range: SkyMapError = TimeError::TimeOutOfRange { year: 2096 }.into();
        assert!(out_of_range.is_request_error());
        assert!(out_of_range.to_string().contains("2096"));

        let bad_format: SkyMapError = TimeError::InvalidTimeFormat("x".into()).into();
        assert!(bad_format.is_request_error());

        assert!(SkyMapError::InvalidLocation("latitude 91".into()).is_request_error());

        let canvas = SkyMapError::InvalidCanvasSize { width: 0, height: 1024 };
        assert!(!canvas.is_request_error());
        assert_eq!(
            canvas.to_string(),
            "Invalid canvas size 0x1024: both dimensions must be positive"
        );
    }

    #[test]
    fn test_unavailable_classification() {
        let download: SkyMapError = CatalogError::download("https://example.org", "timeout").into();
        assert!(download.is_unavailable());
        assert!(!download.is_request_error());

        let parse: SkyMapError = CatalogError::parse(3, "bad").into();
        assert!(!parse.is_unavailable());
    }
}
