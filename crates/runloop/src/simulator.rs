//! Headless lifecycle driver for testing models without a terminal.
//!
//! The simulator is the test-facing render surface: it calls `init`,
//! `update`, and `view` with the same ordering guarantees as the real
//! [`crate::Program`], and captures every rendered view.

use std::collections::VecDeque;

use crate::Model;
use crate::command::Cmd;
use crate::message::{BatchMsg, Message, QuitMsg};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for driving a [`Model`] headlessly.
///
/// # Example
///
/// ```rust
/// use runloop::{Cmd, Message, Model, Simulator};
///
/// struct Adder { total: i32 }
///
/// impl Model for Adder {
///     fn init(&self) -> Option<Cmd> { None }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.total += n;
///         }
///         None
///     }
///     fn view(&self) -> String { format!("Total: {}", self.total) }
/// }
///
/// let mut sim = Simulator::new(Adder { total: 0 });
/// sim.send(Message::new(5));
/// sim.send(Message::new(3));
/// sim.run_until_idle();
/// assert_eq!(sim.model().total, 8);
/// ```
pub struct Simulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> Simulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model and process everything its init command
    /// produces, so the first render completes before any queued input.
    ///
    /// Calling this more than once is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        // First render happens before the init command's message lands.
        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        if let Some(cmd) = cmd {
            self.run_command_now(cmd);
        }
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;
        if msg.is::<QuitMsg>() {
            self.stats.quit_requested = true;
            return None;
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Process messages, executing returned commands and feeding their
    /// messages back in, until the queue drains or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_idle(&mut self) -> usize {
        if !self.initialized {
            self.init();
        }

        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            if let Some(cmd) = self.step() {
                self.enqueue_command_result(cmd);
            }
            processed += 1;
        }
        processed
    }

    /// Execute a command immediately, queueing messages it produces at the
    /// front of the queue, then draining batches.
    fn run_command_now(&mut self, cmd: Cmd) {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            match cmd.execute() {
                Some(msg) if msg.is::<BatchMsg>() => {
                    if let Some(BatchMsg(cmds)) = msg.downcast::<BatchMsg>() {
                        pending.extend(cmds);
                    }
                }
                Some(msg) => self.input_queue.push_front(msg),
                None => {}
            }
        }
    }

    /// Execute a command, appending resulting messages to the queue and
    /// expanding batches into their constituent commands.
    fn enqueue_command_result(&mut self, cmd: Cmd) {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            match cmd.execute() {
                Some(msg) if msg.is::<BatchMsg>() => {
                    if let Some(BatchMsg(cmds)) = msg.downcast::<BatchMsg>() {
                        pending.extend(cmds);
                    }
                }
                Some(msg) => self.input_queue.push_back(msg),
                None => {}
            }
        }
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Check if the model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}
