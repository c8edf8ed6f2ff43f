use std::borrow::Cow;
use std::time::Instant;

use crate::catalog::{Block, PresentationDescriptor, SlideContent, SlideDescriptor};
use crate::motion::{DEFAULT_TIMING, Timing, TransitionName, create_motion_driver};

use super::nav::Navigation;
use super::slide::SlideContainer;

pub const COVER_PLACEHOLDER_SUBTITLE: &str = "—";
pub const COVER_INSTRUCTIONS: &str = "Keyboard: ← → Space. Click anywhere to focus.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellOptions {
    pub motion_enabled: bool,
    pub default_timing: Timing,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            motion_enabled: true,
            default_timing: DEFAULT_TIMING,
        }
    }
}

/// One running presentation: cover slide plus the declared slides.
///
/// Only the slide at the current index is mounted. Keyboard input is meant
/// to be honoured only while [`DeckShell::is_focused`] is true.
pub struct DeckShell {
    presentation: PresentationDescriptor,
    nav: Navigation,
    focused: bool,
    stage: SlideContainer,
    options: ShellOptions,
}

impl DeckShell {
    pub fn mount(presentation: PresentationDescriptor, options: ShellOptions, now: Instant) -> Self {
        let nav = Navigation::new(presentation.slide_count());
        let stage = build_stage(&presentation, nav.current_index(), options, now);
        tracing::debug!(
            presentation = %presentation.id,
            slides = nav.total(),
            "deck shell mounted"
        );
        Self {
            presentation,
            nav,
            focused: true,
            stage,
            options,
        }
    }

    pub fn presentation(&self) -> &PresentationDescriptor {
        &self.presentation
    }

    pub fn navigation(&self) -> Navigation {
        self.nav
    }

    pub fn current_index(&self) -> usize {
        self.nav.current_index()
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        let moved = self.nav.advance();
        if moved {
            self.remount(now);
        }
        moved
    }

    pub fn retreat(&mut self, now: Instant) -> bool {
        let moved = self.nav.retreat();
        if moved {
            self.remount(now);
        }
        moved
    }

    /// Back to the cover with focus, as if the deck had just been entered.
    pub fn reset(&mut self, now: Instant) {
        self.nav.reset();
        self.focused = true;
        self.remount(now);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns whether focus was newly acquired.
    pub fn focus(&mut self) -> bool {
        !std::mem::replace(&mut self.focused, true)
    }

    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Descriptor of the declared slide on stage; `None` on the cover.
    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        self.nav
            .current_index()
            .checked_sub(1)
            .and_then(|declared| self.presentation.slides.get(declared))
    }

    pub fn current_content(&self) -> Cow<'_, SlideContent> {
        match self.nav.current_index().checked_sub(1) {
            None => Cow::Owned(cover_content(&self.presentation)),
            Some(declared) => match self.presentation.slides.get(declared) {
                Some(slide) => self.presentation.renderer.render(slide, declared),
                None => Cow::Owned(SlideContent::default()),
            },
        }
    }

    pub fn indicator(&self) -> String {
        format!(
            "{} / {}",
            self.nav.current_index() + 1,
            self.nav.total() + 1
        )
    }

    pub fn stage(&self) -> &SlideContainer {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut SlideContainer {
        &mut self.stage
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.stage.is_animating(now)
    }

    /// Swaps in the slide at the current index. The outgoing slide starts its
    /// exit motion but is not drawn again.
    fn remount(&mut self, now: Instant) {
        let incoming = build_stage(&self.presentation, self.nav.current_index(), self.options, now);
        let mut outgoing = std::mem::replace(&mut self.stage, incoming);
        outgoing.exit(now);
        tracing::trace!(
            transition = outgoing.transition().id(),
            "outgoing slide exiting"
        );
        tracing::debug!(
            presentation = %self.presentation.id,
            index = self.nav.current_index(),
            transition = self.stage.transition().id(),
            "slide mounted"
        );
    }
}

fn build_stage(
    presentation: &PresentationDescriptor,
    index: usize,
    options: ShellOptions,
    now: Instant,
) -> SlideContainer {
    let (transition, style) = match index.checked_sub(1).and_then(|i| presentation.slides.get(i)) {
        Some(slide) => (slide.transition, slide.style.clone()),
        None => (TransitionName::Fade, None),
    };
    let mut stage = SlideContainer::new(
        transition,
        style,
        options.default_timing,
        create_motion_driver(options.motion_enabled),
    );
    stage.mount(now);
    stage
}

fn cover_content(presentation: &PresentationDescriptor) -> SlideContent {
    let subtitle = presentation
        .subtitle
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(COVER_PLACEHOLDER_SUBTITLE);
    SlideContent {
        kicker: Some(subtitle.to_string()),
        title: Some(presentation.title.clone()),
        lead: None,
        blocks: vec![Block::Text {
            text: COVER_INSTRUCTIONS.to_string(),
        }],
        footer: None,
    }
}
