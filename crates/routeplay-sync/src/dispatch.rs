//! Command dispatch from the coordinator to rendering layers.
//!
//! Rendering layers implement [`CommandSink`] and subscribe to a
//! [`CommandBus`] that is passed to them by reference. Commands flow one
//! way, from the coordinator out; nothing is ever registered in ambient
//! or global scope, and views never mutate each other directly.

use crate::events::ViewCommand;

/// A rendering layer able to consume view commands.
pub trait CommandSink {
    fn on_command(&mut self, command: &ViewCommand);
}

/// Fan-out registry of rendering sinks.
#[derive(Default)]
pub struct CommandBus {
    sinks: Vec<Box<dyn CommandSink>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn CommandSink>) {
        self.sinks.push(sink);
    }

    /// Deliver every command to every sink, in subscription order.
    pub fn broadcast(&mut self, commands: &[ViewCommand]) {
        for command in commands {
            for sink in &mut self.sinks {
                sink.on_command(command);
            }
        }
    }
}
