//! Command dispatch.
//!
//! The registry maps command words to handlers. Lookup is case-sensitive
//! and exact: servers send word commands in canonical upper case and
//! numerics as digit strings, and anything unknown falls through silently.

use std::collections::HashMap;

use crate::config::Config;
use crate::message::Message;

/// Trait implemented by all command handlers.
///
/// Handlers inspect one parsed message and produce at most one outbound
/// line, without the `\r\n` terminator. They never touch the socket.
pub trait Handler: Send + Sync {
    /// Reacts to `msg`, returning the line to send back, if any.
    fn react(&self, config: &Config, msg: &Message<'_>) -> Option<String>;
}

/// Registry of command handlers.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `command`.
    ///
    /// Keys are unique: registering a command twice replaces the earlier
    /// handler.
    pub fn register(&mut self, command: impl Into<String>, handler: impl Handler + 'static) {
        self.handlers.insert(command.into(), Box::new(handler));
    }

    /// Routes `msg` to the handler registered for its command.
    ///
    /// Returns `None` when the message carries no command at all, when no
    /// handler is registered for it, or when the handler stays quiet. All
    /// three are ordinary idle outcomes, not errors.
    pub fn dispatch(&self, config: &Config, msg: &Message<'_>) -> Option<String> {
        let command = msg.command()?;
        self.handlers.get(command)?.react(config, msg)
    }
}
