use std::time::Instant;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};

use crate::command::{ActionId, CommandOutcome};
use crate::error::AppResult;
use crate::event::DomainEvent;

use super::actors::UiActor;
use super::core::App;
use super::event_bus::{InputPump, loop_channel};
use super::terminal_session::TerminalSession;

struct LoopRuntime {
    ui_actor: UiActor,
    session: TerminalSession,
    frame_tick: time::Interval,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    input_pump: InputPump,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

impl App {
    /// Runs the interactive session until quit, restoring the terminal on
    /// every exit path.
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        let result = self.drive_loop(&mut runtime).await;

        runtime.input_pump.shutdown();
        let restored = runtime.session.restore();
        result?;
        restored?;
        Ok(())
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx) = loop_channel();
        let input_pump = InputPump::spawn(loop_event_tx.clone());
        let mut frame_tick = time::interval(self.config.motion.frame_interval());
        frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            route = %self.state.route,
            presentations = self.catalog.len(),
            "event loop started"
        );
        Ok(LoopRuntime {
            ui_actor: UiActor::new(),
            session,
            frame_tick,
            loop_event_tx,
            loop_event_rx,
            input_pump,
        })
    }

    async fn drive_loop(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            let now = Instant::now();
            if runtime.ui_actor.should_draw(self.is_animating(now)) {
                runtime.ui_actor.clear_redraw();
                let changed = if runtime.ui_actor.take_repaint() {
                    self.repaint_frame(&mut runtime.session, now)?
                } else {
                    self.render_frame(&mut runtime.session, now)?
                };
                if changed {
                    runtime.ui_actor.mark_redraw();
                }
            }

            let animating = self.is_animating(Instant::now());
            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                &mut runtime.frame_tick,
                animating,
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, runtime)?,
                LoopControl::Break
            ) {
                return Ok(());
            }
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let area = Self::terminal_area(&runtime.session)?;
                let outcome = self.handle_input_event(event, area);
                if outcome.quit_requested {
                    tracing::info!("quit requested");
                    return Ok(LoopControl::Break);
                }
                if outcome.repaint {
                    runtime.ui_actor.mark_repaint();
                } else if outcome.redraw {
                    runtime.ui_actor.mark_redraw();
                }
                for command in outcome.commands {
                    let _ = runtime.loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                self.state.status.last_action_id = Some(ActionId::Input);
                self.state.status.message = format!("input error: {message}");
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::Command(command)) => {
                let dispatch = self.dispatch_command(command, Instant::now());
                for event in dispatch.emitted_events {
                    let _ = runtime.loop_event_tx.send(DomainEvent::App(event));
                }
                match dispatch.outcome {
                    CommandOutcome::QuitRequested => return Ok(LoopControl::Break),
                    CommandOutcome::Applied | CommandOutcome::Noop => {
                        runtime.ui_actor.mark_redraw()
                    }
                }
            }
            WaitEvent::Event(DomainEvent::App(event)) => {
                self.handle_app_event(&event);
            }
            WaitEvent::Event(DomainEvent::FrameTick) => {
                runtime.ui_actor.mark_redraw();
            }
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }
}

/// Waits for the next loop event. Frame ticks only fire while a slide is
/// animating, so an idle deck sleeps until input arrives.
async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    frame_tick: &mut time::Interval,
    animating: bool,
) -> WaitEvent {
    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = frame_tick.tick(), if animating => {
            WaitEvent::Event(DomainEvent::FrameTick)
        },
    }
}
