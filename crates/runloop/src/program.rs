//! Terminal program runner.
//!
//! [`Program`] owns the terminal for the lifetime of a model: raw mode,
//! optional alternate screen, a key-reading thread, and a message loop
//! that serializes every update and render. Commands run on worker
//! threads and only ever feed messages back into the loop, so model state
//! is touched from exactly one thread.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use thiserror::Error;
use tracing::debug;

use crate::Model;
use crate::command::Cmd;
use crate::message::{BatchMsg, KeyMsg, KeyType, Message, QuitMsg};

/// Errors from running a program.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Terminal I/O failed.
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Translate a crossterm key event into a [`KeyMsg`], if it maps.
fn key_msg(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyMsg> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyMsg::from_type(KeyType::CtrlC)),
            _ => None,
        };
    }
    match code {
        KeyCode::Char(' ') => Some(KeyMsg::from_type(KeyType::Space)),
        KeyCode::Char(c) => Some(KeyMsg::from_char(c)),
        KeyCode::Enter => Some(KeyMsg::from_type(KeyType::Enter)),
        KeyCode::Tab => Some(KeyMsg::from_type(KeyType::Tab)),
        KeyCode::Left => Some(KeyMsg::from_type(KeyType::Left)),
        KeyCode::Right => Some(KeyMsg::from_type(KeyType::Right)),
        KeyCode::Esc => Some(KeyMsg::from_type(KeyType::Esc)),
        _ => None,
    }
}

/// Runs a [`Model`] against a real terminal.
///
/// # Example
///
/// ```rust,no_run
/// use runloop::{Model, Program};
/// # struct App;
/// # impl Model for App {
/// #     fn init(&self) -> Option<runloop::Cmd> { None }
/// #     fn update(&mut self, _msg: runloop::Message) -> Option<runloop::Cmd> { None }
/// #     fn view(&self) -> String { String::new() }
/// # }
///
/// let app = App;
/// let final_state = Program::new(app).with_alt_screen().run()?;
/// # let _ = final_state;
/// # Ok::<(), runloop::ProgramError>(())
/// ```
pub struct Program<M: Model> {
    model: M,
    alt_screen: bool,
}

impl<M: Model> Program<M> {
    /// Create a program for the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            alt_screen: false,
        }
    }

    /// Run in the alternate screen buffer, restoring the terminal on exit.
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.alt_screen = true;
        self
    }

    /// Run the message loop until the model quits.
    ///
    /// Returns the final model state.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError`] when terminal setup or drawing fails.
    pub fn run(mut self) -> Result<M, ProgramError> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        if self.alt_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let result = self.event_loop(&mut stdout);

        // Restore the terminal even when the loop errored.
        let _ = execute!(stdout, cursor::Show);
        if self.alt_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();

        result?;
        Ok(self.model)
    }

    fn event_loop(&mut self, stdout: &mut io::Stdout) -> Result<(), ProgramError> {
        // First render, then the init command's messages, both before the
        // key reader starts. Nothing the user does can sneak in ahead of
        // the model's startup sequence.
        self.draw(stdout)?;
        if let Some(cmd) = self.model.init() {
            let mut pending = vec![cmd];
            while let Some(cmd) = pending.pop() {
                match cmd.execute() {
                    Some(msg) if msg.is::<BatchMsg>() => {
                        if let Some(BatchMsg(cmds)) = msg.downcast::<BatchMsg>() {
                            pending.extend(cmds);
                        }
                    }
                    Some(msg) => {
                        if msg.is::<QuitMsg>() {
                            return Ok(());
                        }
                        if let Some(follow_up) = self.model.update(msg) {
                            pending.push(follow_up);
                        }
                        self.draw(stdout)?;
                    }
                    None => {}
                }
            }
        }

        let (tx, rx) = mpsc::channel::<Message>();

        // Key reader thread. Polling lets it notice a dropped receiver
        // and wind down after quit.
        let input_tx = tx.clone();
        thread::spawn(move || {
            loop {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if key.kind == KeyEventKind::Release {
                                continue;
                            }
                            if let Some(msg) = key_msg(key.code, key.modifiers) {
                                if input_tx.send(Message::new(msg)).is_err() {
                                    return;
                                }
                            }
                        }
                    }
                    Ok(false) => {
                        // Liveness check against a closed loop.
                        if input_tx.send(Message::new(PollTick)).is_err() {
                            return;
                        }
                    }
                    Err(_) => return,
                }
            }
        });

        loop {
            let Ok(msg) = rx.recv() else {
                return Ok(());
            };
            if msg.is::<PollTick>() {
                continue;
            }
            if msg.is::<QuitMsg>() {
                debug!("quit requested");
                return Ok(());
            }
            // Ctrl+C always exits, matching conventional TUI behavior.
            if msg
                .downcast_ref::<KeyMsg>()
                .is_some_and(|k| k.key_type == KeyType::CtrlC)
            {
                return Ok(());
            }

            if let Some(cmd) = self.model.update(msg) {
                spawn_command(cmd, tx.clone());
            }
            self.draw(stdout)?;
        }
    }

    fn draw(&self, stdout: &mut io::Stdout) -> Result<(), ProgramError> {
        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let view = self.model.view();
        for line in view.split('\n') {
            queue!(stdout, crossterm::style::Print(line))?;
            queue!(stdout, crossterm::style::Print("\r\n"))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// Internal keep-alive message from the key reader thread.
struct PollTick;

/// Run a command on a worker thread, feeding any produced message (and
/// expanded batches) back into the loop.
fn spawn_command(cmd: Cmd, tx: mpsc::Sender<Message>) {
    thread::spawn(move || {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            match cmd.execute() {
                Some(msg) if msg.is::<BatchMsg>() => {
                    if let Some(BatchMsg(cmds)) = msg.downcast::<BatchMsg>() {
                        pending.extend(cmds);
                    }
                }
                Some(msg) => {
                    if tx.send(msg).is_err() {
                        return;
                    }
                }
                None => {}
            }
        }
    });
}
