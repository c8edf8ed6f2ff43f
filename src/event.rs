use crossterm::event::Event;

use crate::command::{ActionId, Command, CommandOutcome};
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// The mounted deck moved to another slide without leaving its route.
    SlideChanged {
        from: usize,
        to: usize,
    },
    RouteChanged {
        from: Route,
        to: Route,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    App(AppEvent),
    FrameTick,
}
