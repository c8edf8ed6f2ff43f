use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::motion::TransitionName;

use super::content::SlideContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDescriptor {
    pub id: String,
    pub transition: TransitionName,
    pub style: Option<String>,
}

impl SlideDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transition: TransitionName::Fade,
            style: None,
        }
    }

    pub fn with_transition(mut self, transition: TransitionName) -> Self {
        self.transition = transition;
        self
    }
}

/// Maps a slide to its visual content.
///
/// Implementations must never fail: a slide id without an entry renders a
/// placeholder naming the id and position.
pub trait SlideRenderer: Send + Sync {
    fn render<'a>(&'a self, slide: &SlideDescriptor, position: usize) -> Cow<'a, SlideContent>;
}

/// Finite `slide id -> content` table with a placeholder default arm.
#[derive(Debug, Clone, Default)]
pub struct ContentTable {
    entries: HashMap<String, SlideContent>,
}

impl ContentTable {
    pub fn insert(&mut self, slide_id: impl Into<String>, content: SlideContent) {
        self.entries.insert(slide_id.into(), content);
    }
}

impl SlideRenderer for ContentTable {
    fn render<'a>(&'a self, slide: &SlideDescriptor, position: usize) -> Cow<'a, SlideContent> {
        match self.entries.get(&slide.id) {
            Some(content) => Cow::Borrowed(content),
            None => Cow::Owned(SlideContent::placeholder(&slide.id, position)),
        }
    }
}

#[derive(Clone)]
pub struct PresentationDescriptor {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub slides: Vec<SlideDescriptor>,
    pub renderer: Arc<dyn SlideRenderer>,
}

impl PresentationDescriptor {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn summary(&self) -> PresentationSummary {
        PresentationSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            slides: self.slide_count(),
        }
    }
}

impl fmt::Debug for PresentationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("slides", &self.slides)
            .finish_non_exhaustive()
    }
}

/// Catalog listing row, also the `--list --json` output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub slides: usize,
}
