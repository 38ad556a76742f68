#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

//! # Confetti
//!
//! A celebratory particle burst for terminal widgets.
//!
//! The effect is an Elm-style component: hosts signal it with a pop
//! message and forward its frame messages, and it animates a burst of
//! glyphs under gravity, rearming itself when the last particle leaves
//! the viewport.
//!
//! ```rust
//! use confetti::Confetti;
//! use runloop::Message;
//!
//! let mut effect = Confetti::new(40, 12).with_seed(42);
//!
//! // The host defers this command's message until after its render pass.
//! let start = effect.pop_cmd();
//!
//! let msg = start.execute().unwrap();
//! effect.update(&msg);
//! assert!(effect.is_active());
//! # let _ = Message::new(());
//! ```

pub mod effect;
pub mod particle;

pub use effect::{Confetti, FrameMsg, PopMsg};
pub use particle::{CELL_GRAVITY, Particle, Vec2, fps};
