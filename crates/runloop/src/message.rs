//! Message types for the Elm architecture.
//!
//! Messages are the only way to update a model. All user input, scheduled
//! ticks, and custom events are represented as messages.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Message::new`]
/// to create a message and [`Message::downcast`] to retrieve the original
/// type.
///
/// # Example
///
/// ```rust
/// use runloop::Message;
///
/// struct MyMsg(i32);
///
/// let msg = Message::new(MyMsg(42));
/// if let Some(my_msg) = msg.downcast::<MyMsg>() {
///     assert_eq!(my_msg.0, 42);
/// }
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

// Built-in message types

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Message delivered once, after the first render and before any input.
///
/// Models that need to observe their own first render (e.g. to capture
/// initial state) return a command producing this from `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstRenderMsg;

/// The type of key pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Printable characters; see [`KeyMsg::runes`].
    Runes,
    /// The Enter key.
    Enter,
    /// The space bar.
    Space,
    /// The Tab key.
    Tab,
    /// The left arrow key.
    Left,
    /// The right arrow key.
    Right,
    /// The Escape key.
    Esc,
    /// Ctrl+C.
    CtrlC,
}

/// A keyboard input message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a key message for a single printable character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// The single character of a runes key, if there is exactly one.
    pub fn char(&self) -> Option<char> {
        if self.key_type == KeyType::Runes && self.runes.len() == 1 {
            self.runes.first().copied()
        } else {
            None
        }
    }
}

/// Internal message carrying a batch of commands to run.
pub(crate) struct BatchMsg(pub Vec<super::Cmd>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_downcast() {
        struct TestMsg(i32);

        let msg = Message::new(TestMsg(42));
        assert!(msg.is::<TestMsg>());
        let inner = msg.downcast::<TestMsg>().unwrap();
        assert_eq!(inner.0, 42);
    }

    #[test]
    fn test_message_downcast_wrong_type() {
        struct TestMsg1;
        struct TestMsg2;

        let msg = Message::new(TestMsg1);
        assert!(!msg.is::<TestMsg2>());
        assert!(msg.downcast::<TestMsg2>().is_none());
    }

    #[test]
    fn test_quit_msg() {
        let msg = Message::new(QuitMsg);
        assert!(msg.is::<QuitMsg>());
    }

    #[test]
    fn test_key_msg_char() {
        assert_eq!(KeyMsg::from_char('+').char(), Some('+'));
        assert_eq!(KeyMsg::from_type(KeyType::Enter).char(), None);
    }
}
