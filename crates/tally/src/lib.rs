#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! # Tally
//!
//! A bounded counter widget for the terminal.
//!
//! The widget holds an integer count inside an inclusive `[min, max]`
//! range, renders it with decrement/reset/increment controls, styles the
//! count differently when it is pinned at a bound, and fires a confetti
//! celebration when the count reaches its trigger value. The title is
//! localized through a provider the widget registers with at
//! construction.
//!
//! ## Quick start
//!
//! ```rust
//! use runloop::Simulator;
//! use tally::{Counter, CounterMsg};
//!
//! let mut sim = Simulator::new(Counter::new());
//! sim.send(CounterMsg::Increase.into_message());
//! sim.run_until_idle();
//! assert_eq!(sim.model().count(), 1);
//! ```
//!
//! To run against a real terminal, mount it in a `runloop::Program`
//! (see the `tally` binary's `main.rs`).

pub mod app;
pub mod cli;
pub mod config;
pub mod counter;
pub mod descriptor;
pub mod i18n;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::Config;
pub use counter::{
    CELEBRATION_TRIGGER, Control, Counter, CounterMsg, DEFAULT_MAX, DEFAULT_MIN, StyleState,
};
pub use descriptor::{Descriptor, PropertySpec};
pub use i18n::{LocaleError, Localizer, Strings};
