//! Keyboard bindings

use crossterm::event::KeyCode;

/// User intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectNext,
    SelectPrevious,
    /// Zero-based position in the asset selector
    SelectIndex(usize),
    Refresh,
    CycleTheme,
    Quit,
}

/// Footer legend, in display order
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("←/→", "asset"),
    ("1-5", "jump"),
    ("r", "refresh"),
    ("t", "theme"),
    ("q", "quit"),
];

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Command::SelectNext),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Command::SelectPrevious),
        KeyCode::Char(c @ '1'..='9') => Some(Command::SelectIndex(c as usize - '1' as usize)),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => Some(Command::Refresh),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::CycleTheme),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
