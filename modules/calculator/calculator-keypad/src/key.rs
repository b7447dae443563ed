//! Keypad buttons and their textual tokens.

use std::fmt;
use std::str::FromStr;

use calculator_sdk::Operator;

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0`..=`9`
    Digit(u8),
    /// Decimal point
    Point,
    Operator(Operator),
    Equals,
    /// "AC": reset everything
    AllClear,
}

impl Key {
    /// Key for a single-character token, if there is one.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self::Digit),
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            _ => {
                let mut buf = [0u8; 4];
                Operator::from_symbol(c.encode_utf8(&mut buf)).map(Self::Operator)
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Point => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::AllClear => f.write_str("AC"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown key '{token}' at position {position}")]
    Unknown { token: String, position: usize },
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("AC") {
            return Ok(Self::AllClear);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| KeyParseError::Unknown {
            token: token.to_owned(),
            position: 0,
        })
    }
}

/// Split a line such as `"5+3="` or `"ac 1 . 5"` into keys.
///
/// Whitespace is ignored; `AC` is one token, in any case.
///
/// # Errors
/// Returns [`KeyParseError::Unknown`] for the first character that is not a key.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c.eq_ignore_ascii_case(&'a')
            && chars
                .next_if(|(_, n)| n.eq_ignore_ascii_case(&'c'))
                .is_some()
        {
            keys.push(Key::AllClear);
            continue;
        }
        let key = Key::from_char(c).ok_or_else(|| KeyParseError::Unknown {
            token: c.to_string(),
            position,
        })?;
        keys.push(key);
    }

    Ok(keys)
}
