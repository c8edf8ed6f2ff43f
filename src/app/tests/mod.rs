
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::App;
use crate::catalog::{
    Block, Catalog, ContentTable, PresentationDescriptor, SlideContent, SlideDescriptor,
};
use crate::command::CommandOutcome;
use crate::config::Config;
use crate::motion::TransitionName;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn long_content(rows: usize) -> SlideContent {
    SlideContent {
        title: Some("Long slide".to_string()),
        blocks: vec![Block::Bullets {
            heading: None,
            items: (0..rows).map(|i| format!("point {i}")).collect(),
        }],
        ..SlideContent::default()
    }
}

fn presentation(id: &str, slides: usize) -> PresentationDescriptor {
    let mut table = ContentTable::default();
    table.insert("s0", long_content(60));
    PresentationDescriptor {
        id: id.to_string(),
        title: format!("{id} deck"),
        subtitle: None,
        slides: (0..slides)
            .map(|i| SlideDescriptor::new(format!("s{i}")).with_transition(TransitionName::Slide))
            .collect(),
        renderer: Arc::new(table),
    }
}

fn test_catalog() -> Catalog {
    Catalog::new(vec![presentation("alpha", 3), presentation("beta", 1)])
        .expect("test catalog should build")
}

fn still_config() -> Config {
    let mut config = Config::default();
    config.motion.enabled = false;
    config
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Runs one terminal event through input mapping and dispatch, the way the
/// event loop does. Returns whether quit was requested.
fn feed(app: &mut App, event: Event) -> bool {
    let outcome = app.handle_input_event(event, AREA);
    if outcome.quit_requested {
        return true;
    }
    outcome.commands.into_iter().any(|command| {
        app.dispatch_command(command, Instant::now()).outcome == CommandOutcome::QuitRequested
    })
}
