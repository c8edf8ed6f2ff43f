use std::fmt;

use crate::error::{AppError, AppResult};

const DECK_PREFIX: &str = "/p/";

/// Where the viewer is: the catalog listing or one presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalog,
    Deck {
        id: String,
    },
}

impl Route {
    pub fn deck(id: impl Into<String>) -> Self {
        Self::Deck { id: id.into() }
    }

    /// Accepts `/`, `/p`, `/p/<id>` and a bare presentation id. An empty id
    /// maps to the catalog; ids are a single path segment.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() || trimmed == DECK_PREFIX.trim_end_matches('/') {
            return Ok(Self::Catalog);
        }
        let id = match trimmed.strip_prefix(DECK_PREFIX) {
            Some(rest) => rest,
            None => trimmed.trim_start_matches('/'),
        };
        if id.is_empty() {
            return Ok(Self::Catalog);
        }
        if id.contains('/') {
            return Err(AppError::invalid_argument(format!(
                "unrecognized route \"{raw}\""
            )));
        }
        Ok(Self::deck(id))
    }

    pub fn path(&self) -> String {
        match self {
            Self::Catalog => "/".to_string(),
            Self::Deck { id } => format!("{DECK_PREFIX}{id}"),
        }
    }

    pub fn deck_id(&self) -> Option<&str> {
        match self {
            Self::Catalog => None,
            Self::Deck { id } => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
