use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A player request, decoded from terminal input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Speed,
    /// The terminal window lost focus
    FocusLost,
}

impl Command {
    pub(crate) fn from_event(event: &Event) -> Option<Command> {
        if *event == Event::FocusLost {
            Some(Command::FocusLost)
        } else {
            Command::from_key_event(event.as_key_press_event()?)
        }
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('p' | ' ') | KeyCode::Esc) => Some(Command::Pause),
            (KeyModifiers::NONE, KeyCode::Char('f')) => Some(Command::Speed),
            _ => None,
        }
    }
}
