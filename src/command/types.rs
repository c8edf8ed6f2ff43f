#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextSlide,
    PrevSlide,
    ExitDeck,
    OpenPresentation { id: String },
    SelectNext,
    SelectPrev,
    OpenSelected,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Back,
    FocusDeck,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    NextSlide,
    PrevSlide,
    ExitDeck,
    OpenPresentation,
    SelectNext,
    SelectPrev,
    OpenSelected,
    Scroll,
    Back,
    FocusDeck,
    Quit,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NextSlide => "next-slide",
            Self::PrevSlide => "prev-slide",
            Self::ExitDeck => "exit-deck",
            Self::OpenPresentation => "open-presentation",
            Self::SelectNext => "select-next",
            Self::SelectPrev => "select-prev",
            Self::OpenSelected => "open-selected",
            Self::Scroll => "scroll",
            Self::Back => "back",
            Self::FocusDeck => "focus-deck",
            Self::Quit => "quit",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::NextSlide => ActionId::NextSlide,
            Self::PrevSlide => ActionId::PrevSlide,
            Self::ExitDeck => ActionId::ExitDeck,
            Self::OpenPresentation { .. } => ActionId::OpenPresentation,
            Self::SelectNext => ActionId::SelectNext,
            Self::SelectPrev => ActionId::SelectPrev,
            Self::OpenSelected => ActionId::OpenSelected,
            Self::ScrollUp | Self::ScrollDown | Self::PageUp | Self::PageDown => ActionId::Scroll,
            Self::Back => ActionId::Back,
            Self::FocusDeck => ActionId::FocusDeck,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Command};

    #[test]
    fn scroll_commands_share_one_action_id() {
        for command in [
            Command::ScrollUp,
            Command::ScrollDown,
            Command::PageUp,
            Command::PageDown,
        ] {
            assert_eq!(command.action_id(), ActionId::Scroll);
        }
        assert_eq!(ActionId::Scroll.as_str(), "scroll");
    }

    #[test]
    fn open_presentation_ignores_the_id_for_its_action() {
        let command = Command::OpenPresentation {
            id: "sample".to_string(),
        };
        assert_eq!(command.action_id().as_str(), "open-presentation");
    }
}
