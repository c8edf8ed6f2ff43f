mod content;
mod loader;
mod types;

use std::collections::HashSet;
use std::path::Path;

use crate::error::{AppError, AppResult};

pub use content::{Block, Card, Metric, SlideContent, Step};
pub use types::{
    ContentTable, PresentationDescriptor, PresentationSummary, SlideDescriptor, SlideRenderer,
};

/// Ordered, read-only table of presentations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    presentations: Vec<PresentationDescriptor>,
}

impl Catalog {
    pub fn new(presentations: Vec<PresentationDescriptor>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for presentation in &presentations {
            if !seen.insert(presentation.id.as_str()) {
                return Err(AppError::DuplicatePresentation(presentation.id.clone()));
            }
        }
        Ok(Self { presentations })
    }

    pub fn builtin() -> AppResult<Self> {
        Self::new(loader::load_builtin_decks()?)
    }

    /// Built-in decks followed by every deck found in `extra_dir`.
    pub fn load(extra_dir: Option<&Path>) -> AppResult<Self> {
        let mut presentations = loader::load_builtin_decks()?;
        if let Some(dir) = extra_dir {
            let extra = loader::load_deck_dir(dir)?;
            tracing::info!(dir = %dir.display(), decks = extra.len(), "loaded deck directory");
            presentations.extend(extra);
        }
        let catalog = Self::new(presentations)?;
        tracing::info!(presentations = catalog.len(), "catalog ready");
        Ok(catalog)
    }

    pub fn find(&self, id: &str) -> Option<&PresentationDescriptor> {
        self.presentations.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.presentations.iter().position(|p| p.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&PresentationDescriptor> {
        self.presentations.get(index)
    }

    pub fn summaries(&self) -> Vec<PresentationSummary> {
        self.presentations.iter().map(|p| p.summary()).collect()
    }

    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }
}
