use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(delta_row, delta_col)` step for one tick.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
}

impl GameInput {
    /// Maps a raw key event to a game command.
    ///
    /// Returns `None` for keys the game does not use and for non-press events.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Some(Self::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Up => Some(Self::Direction(Direction::Up)),
            KeyCode::Down => Some(Self::Direction(Direction::Down)),
            KeyCode::Left => Some(Self::Direction(Direction::Left)),
            KeyCode::Right => Some(Self::Direction(Direction::Right)),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => Some(Self::Quit),
                'p' => Some(Self::Pause),
                'w' => Some(Self::Direction(Direction::Up)),
                's' => Some(Self::Direction(Direction::Down)),
                'a' => Some(Self::Direction(Direction::Left)),
                'd' => Some(Self::Direction(Direction::Right)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Non-blocking source of raw key events.
///
/// `None` means no input arrived since the last poll; it is never an error.
pub trait InputSource {
    fn next_key(&mut self) -> Option<KeyEvent>;

    /// Reads at most one key and maps it; unknown keys yield `None`.
    fn poll_input(&mut self) -> Option<GameInput> {
        self.next_key().and_then(GameInput::from_key_event)
    }
}

impl InputSource for VecDeque<KeyEvent> {
    fn next_key(&mut self) -> Option<KeyEvent> {
        self.pop_front()
    }
}

/// Key events captured by a background reader thread.
///
/// The thread only pushes into the channel; game state stays on the tick loop.
pub struct KeyQueue {
    receiver: Receiver<KeyEvent>,
    disconnected: bool,
}

impl KeyQueue {
    /// Starts the reader thread and returns the consuming end.
    pub fn spawn() -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::channel();

        thread::Builder::new()
            .name("key-reader".to_owned())
            .spawn(move || {
                loop {
                    match event::read() {
                        Ok(Event::Key(key)) => {
                            if sender.send(key).is_err() {
                                debug!("key queue receiver dropped, stopping reader");
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(error) => {
                            warn!(%error, "terminal event read failed, stopping reader");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            receiver,
            disconnected: false,
        })
    }
}

impl InputSource for KeyQueue {
    fn next_key(&mut self) -> Option<KeyEvent> {
        match self.receiver.try_recv() {
            Ok(key) => Some(key),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.disconnected {
                    warn!("key reader thread exited; no further input will arrive");
                    self.disconnected = true;
                }
                None
            }
        }
    }
}
