use std::path::{Path, PathBuf};

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("failed to parse deck {path}")]
    DeckParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("duplicate presentation id \"{0}\"")]
    DuplicatePresentation(String),
    #[error("duplicate slide id \"{slide}\" in presentation \"{presentation}\"")]
    DuplicateSlide { presentation: String, slide: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("failed to encode catalog listing: {0}")]
    Listing(#[from] serde_json::Error),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn deck_parse(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::DeckParse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config_parse(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn duplicate_slide(presentation: impl Into<String>, slide: impl Into<String>) -> Self {
        Self::DuplicateSlide {
            presentation: presentation.into(),
            slide: slide.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn duplicate_slide_error_names_deck_and_slide() {
        let err = AppError::duplicate_slide("sample", "intro");
        assert!(matches!(err, AppError::DuplicateSlide { .. }));
        assert_eq!(
            err.to_string(),
            "duplicate slide id \"intro\" in presentation \"sample\""
        );
    }

    #[test]
    fn deck_parse_error_keeps_path_and_source() {
        let source = toml::from_str::<toml::Table>("id = ").expect_err("input is malformed");
        let err = AppError::deck_parse("decks/broken.toml", source);
        assert_eq!(err.to_string(), "failed to parse deck decks/broken.toml");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_parse_error_leaves_details_to_the_source() {
        let source = toml::from_str::<toml::Table>("[motion").expect_err("input is malformed");
        let detail = source.to_string();
        let err = AppError::config_parse("deck/config.toml", source);

        assert_eq!(err.to_string(), "failed to parse config deck/config.toml");
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(cause, Some(detail));
    }
}
