//! Editor command surface

use expr_types::ExprId;

/// A command a host can issue against the editor
///
/// Keys in normal mode resolve to one of these; hosts may also issue them
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    SetSelection(ExprId),
    /// Next id in linear order
    MoveNext,
    /// Previous id in linear order
    MovePrevious,
    /// Previous sibling, climbing ancestors if needed
    MoveSiblingUp,
    /// Next sibling, climbing ancestors if needed
    MoveSiblingDown,
    EnterInsertMode,
    ExitInsertMode,
    SetInsertionText(String),
    CommitInsertion,
    DeleteSelected,
    /// Ask the host to run the program
    Run,
    /// Ask the host to show help
    Help,
}

impl EditorCommand {
    /// Resolves a normal-mode key binding
    pub fn from_normal_key(key: crate::Key) -> Option<Self> {
        use crate::Key;
        match key {
            Key::L | Key::Right => Some(EditorCommand::MoveNext),
            Key::H | Key::Left => Some(EditorCommand::MovePrevious),
            Key::K | Key::Up => Some(EditorCommand::MoveSiblingUp),
            Key::J | Key::Down => Some(EditorCommand::MoveSiblingDown),
            Key::A => Some(EditorCommand::EnterInsertMode),
            Key::D => Some(EditorCommand::DeleteSelected),
            Key::R => Some(EditorCommand::Run),
            Key::Question => Some(EditorCommand::Help),
            _ => None,
        }
    }
}
