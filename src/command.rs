use crate::game::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A player action decoded from a terminal input event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Turn(Direction),
}

impl Command {
    pub(crate) fn from_event(event: Event) -> Option<Command> {
        Command::from_key_event(event.as_key_press_event()?)
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (m, KeyCode::Char('q')) if normal_modifiers.contains(m) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => direction_for_key(code).map(Command::Turn),
            _ => None,
        }
    }
}

/// Map a key to the direction it steers the snake in, if any
pub(crate) fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Direction::Right),
        _ => None,
    }
}
