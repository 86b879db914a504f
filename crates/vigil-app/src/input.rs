//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic testing without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (toggle entry detail).
    Enter,
    /// Escape key (quit).
    Esc,
    /// Up arrow key (move log cursor towards the newest entry).
    Up,
    /// Down arrow key (move log cursor towards older entries).
    Down,
}
