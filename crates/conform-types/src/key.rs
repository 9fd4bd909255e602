use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of a [`KeyedArray`](crate::KeyedArray) entry.
///
/// Integer keys order before string keys, which keeps canonical ordering of
/// collections total.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Build a key from document text, turning canonical decimal integers
    /// (`"0"`, `"-12"`, but not `"007"` or `"+1"`) into integer keys.
    ///
    /// Documents encode list positions as object members often enough that
    /// `{"0": "a"}` and `["a"]` should address the same key.
    pub fn normalized(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.parse::<i64>() {
            Ok(n) if n.to_string() == text => Self::Int(n),
            _ => Self::Str(text),
        }
    }

    /// Returns the integer value when this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
