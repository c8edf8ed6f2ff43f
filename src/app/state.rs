use crate::command::ActionId;
use crate::deck::DeckShell;
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Catalog,
    Deck,
    NotFound,
}

impl ViewKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Deck => "deck",
            Self::NotFound => "not-found",
        }
    }
}

/// What the route currently resolves to.
pub enum View {
    Catalog,
    Deck(Box<DeckShell>),
    NotFound { id: String },
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Catalog => ViewKind::Catalog,
            Self::Deck(_) => ViewKind::Deck,
            Self::NotFound { .. } => ViewKind::NotFound,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

pub struct AppState {
    pub route: Route,
    pub view: View,
    /// Highlighted row in the catalog listing.
    pub selected: usize,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Catalog,
            view: View::Catalog,
            selected: 0,
            status: StatusState::default(),
        }
    }
}

impl AppState {
    pub fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn shell(&self) -> Option<&DeckShell> {
        match &self.view {
            View::Deck(shell) => Some(shell.as_ref()),
            _ => None,
        }
    }

    pub fn shell_mut(&mut self) -> Option<&mut DeckShell> {
        match &mut self.view {
            View::Deck(shell) => Some(shell.as_mut()),
            _ => None,
        }
    }

    /// Index of the mounted deck's current slide, if any.
    pub fn slide_index(&self) -> Option<usize> {
        self.shell().map(DeckShell::current_index)
    }
}
