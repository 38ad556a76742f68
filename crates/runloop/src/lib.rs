#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # Runloop
//!
//! A small Elm-architecture runtime for terminal widgets.
//!
//! Applications are a [`Model`]: pure state with `init`/`update`/`view`.
//! All input and scheduled work arrives as a [`Message`]; all side effects
//! leave as a [`Cmd`]. A [`Program`] runs a model against a real terminal;
//! a [`Simulator`] drives the identical lifecycle headlessly for tests.
//!
//! ## Example
//!
//! ```rust
//! use runloop::{Cmd, Message, Model, Simulator};
//!
//! struct Blinker { on: bool }
//!
//! struct Toggle;
//!
//! impl Model for Blinker {
//!     fn init(&self) -> Option<Cmd> { None }
//!
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if msg.is::<Toggle>() {
//!             self.on = !self.on;
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         if self.on { "*".into() } else { ".".into() }
//!     }
//! }
//!
//! let mut sim = Simulator::new(Blinker { on: false });
//! sim.send(Message::new(Toggle));
//! sim.run_until_idle();
//! assert_eq!(sim.last_view(), Some("*"));
//! ```

pub mod command;
pub mod message;
pub mod program;
pub mod simulator;

pub use command::{Cmd, batch, defer, quit, tick};
pub use message::{FirstRenderMsg, KeyMsg, KeyType, Message, QuitMsg};
pub use program::{Program, ProgramError};
pub use simulator::{SimulationStats, Simulator};

/// The Elm-architecture model contract.
///
/// `init` runs once and may hand the runtime a startup command; the
/// command's message is delivered after the first render and before any
/// user input. `update` is the only place state changes. `view` renders
/// the current state and must be side-effect free.
pub trait Model {
    /// Returns a command to run at startup, if any.
    fn init(&self) -> Option<Cmd>;

    /// Updates the model in response to a message.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Renders the model to a string.
    fn view(&self) -> String;
}
