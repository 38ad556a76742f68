//! Commands for side effects.
//!
//! Commands represent work that produces a message. They are lazy: an
//! update function returns commands without performing side effects, and
//! the runtime executes them afterwards. This keeps updates pure and keeps
//! all mutation serialized on the message loop.

use std::time::Duration;

use crate::message::{BatchMsg, Message, QuitMsg};

/// A command that produces a message when executed.
///
/// # Example
///
/// ```rust
/// use runloop::{Cmd, Message};
///
/// struct Done;
///
/// let cmd = Cmd::new(|| Message::new(Done));
/// assert!(cmd.execute().unwrap().is::<Done>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch multiple commands to run with no ordering guarantees.
///
/// Use this to return more than one command from an update function.
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid_cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid_cmds.len() {
        0 => None,
        1 => valid_cmds.into_iter().next(),
        _ => Some(Cmd::new_optional(move || {
            Some(Message::new(BatchMsg(valid_cmds)))
        })),
    }
}

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command that produces a message after a delay.
///
/// To create periodic ticks, return another tick command from your update
/// function when handling the tick message.
pub fn tick<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce() -> Message + Send + 'static,
{
    Cmd::new(move || {
        std::thread::sleep(duration);
        f()
    })
}

/// Command that re-delivers a message on the next message-loop pass.
///
/// The closure runs after the current update and render complete, so this
/// is the way to defer a signal by exactly one scheduling tick.
pub fn defer<F>(f: F) -> Cmd
where
    F: FnOnce() -> Message + Send + 'static,
{
    Cmd::new(f)
}
