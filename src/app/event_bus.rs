use std::io;

use crossterm::event::{Event, EventStream};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::event::DomainEvent;

pub(crate) fn loop_channel() -> (UnboundedSender<DomainEvent>, UnboundedReceiver<DomainEvent>) {
    unbounded_channel()
}

/// Background task forwarding terminal input into the loop channel.
pub(crate) struct InputPump {
    task: Option<JoinHandle<()>>,
}

impl InputPump {
    pub(crate) fn spawn(tx: UnboundedSender<DomainEvent>) -> Self {
        let task = tokio::spawn(pump(EventStream::new(), tx));
        Self { task: Some(task) }
    }

    pub(crate) fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runs until the stream ends or the receiving loop is gone.
async fn pump<S>(mut input: S, tx: UnboundedSender<DomainEvent>)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = input.next().await {
        let loop_event = match event {
            Ok(event) => DomainEvent::Input(event),
            Err(err) => {
                tracing::warn!(error = %err, "terminal input error");
                DomainEvent::InputError(err.to_string())
            }
        };
        if tx.send(loop_event).is_err() {
            tracing::debug!("loop channel closed, stopping input pump");
            return;
        }
    }
}
