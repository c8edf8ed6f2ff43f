mod nav;
mod shell;
mod slide;

pub use nav::Navigation;
pub use shell::{COVER_INSTRUCTIONS, COVER_PLACEHOLDER_SUBTITLE, DeckShell, ShellOptions};
pub use slide::SlideContainer;
