//! Platform-independent key representation

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Platform-independent key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Key {
    // Printable ASCII
    Char(char),

    // Navigation
    Left,
    Right,
    Up,
    Down,

    // Special keys
    Enter,
    Backspace,
    Escape,
    Space,

    // Letters (for commands in normal mode)
    H,
    J,
    K,
    L,
    A,
    D,
    R,

    // Help
    Question,
}

impl Key {
    /// Convert ASCII byte to Key (for line-driven terminal input)
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            0x1B => Some(Key::Escape),
            0x08 | 0x7F => Some(Key::Backspace),
            b'\r' | b'\n' => Some(Key::Enter),
            b' ' => Some(Key::Space),
            b'?' => Some(Key::Question),
            b'h' => Some(Key::H),
            b'j' => Some(Key::J),
            b'k' => Some(Key::K),
            b'l' => Some(Key::L),
            b'a' => Some(Key::A),
            b'd' => Some(Key::D),
            b'r' => Some(Key::R),
            ch if (0x20..0x7F).contains(&ch) => Some(Key::Char(ch as char)),
            _ => None,
        }
    }

    /// Character typed by this key in insert mode
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(ch) => Some(*ch),
            Key::Space => Some(' '),
            Key::H => Some('h'),
            Key::J => Some('j'),
            Key::K => Some('k'),
            Key::L => Some('l'),
            Key::A => Some('a'),
            Key::D => Some('d'),
            Key::R => Some('r'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        assert_eq!(Key::from_ascii(b'h'), Some(Key::H));
        assert_eq!(Key::from_ascii(b'r'), Some(Key::R));
        assert_eq!(Key::from_ascii(b' '), Some(Key::Space));
        assert_eq!(Key::from_ascii(b'?'), Some(Key::Question));
        assert_eq!(Key::from_ascii(0x1B), Some(Key::Escape));
        assert_eq!(Key::from_ascii(b'Z'), Some(Key::Char('Z')));
        assert_eq!(Key::from_ascii(0x01), None);
    }

    #[test]
    fn test_command_letters_type_as_chars() {
        for byte in b"hjkladr" {
            let key = Key::from_ascii(*byte).unwrap();
            assert_eq!(key.as_char(), Some(*byte as char));
        }
        assert_eq!(Key::Escape.as_char(), None);
        assert_eq!(Key::Question.as_char(), None);
    }
}
