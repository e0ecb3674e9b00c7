//! Input collaborator.
//!
//! An [`InputSource`] is polled once per call and reports one of seven discrete
//! events. There is no queue: whatever the source reports for a poll is the
//! whole story for that poll.

use crate::app::InputEvent;
use crate::domain::error::{Result, VaultError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll interval of the terminal source.
pub const DEBOUNCE: Duration = Duration::from_millis(150);

/// Source of discrete input events.
pub trait InputSource {
    /// Blocks for at most one poll interval and reports what was pressed.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`] if the device cannot be read.
    fn poll(&mut self) -> Result<InputEvent>;

    /// Returns `true` once the operator asked to leave; no further events follow.
    fn closed(&self) -> bool;
}

/// Keyboard-driven source reading the controlling terminal.
///
/// # Keybindings
///
/// - Arrows or `h`/`j`/`k`/`l`: directions
/// - `Enter` or `Space`: select
/// - `Tab` or `c`: mode switch
/// - `Esc`, `q` or `Ctrl+c`: close
#[derive(Debug)]
pub struct TerminalInput {
    debounce: Duration,
    closed: bool,
}

impl TerminalInput {
    /// Creates a source with the default debounce interval.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debounce: DEBOUNCE,
            closed: false,
        }
    }

    fn translate(&mut self, key: KeyEvent) -> InputEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.closed = true;
            }
            return InputEvent::Idle;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => InputEvent::Up,
            KeyCode::Down | KeyCode::Char('j') => InputEvent::Down,
            KeyCode::Left | KeyCode::Char('h') => InputEvent::Left,
            KeyCode::Right | KeyCode::Char('l') => InputEvent::Right,
            KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Select,
            KeyCode::Tab | KeyCode::Char('c') => InputEvent::ModeSwitch,
            KeyCode::Esc | KeyCode::Char('q') => {
                self.closed = true;
                InputEvent::Idle
            }
            _ => InputEvent::Idle,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputEvent> {
        let ready = event::poll(self.debounce).map_err(|e| VaultError::Terminal(e.to_string()))?;
        if !ready {
            return Ok(InputEvent::Idle);
        }

        match event::read().map_err(|e| VaultError::Terminal(e.to_string()))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.translate(key)),
            _ => Ok(InputEvent::Idle),
        }
    }

    fn closed(&self) -> bool {
        self.closed
    }
}

/// Replays a fixed sequence of events, then reports itself closed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    /// Creates a source that will report `events` in order.
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Idle))
    }

    fn closed(&self) -> bool {
        self.events.is_empty()
    }
}
