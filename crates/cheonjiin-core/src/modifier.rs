// Cheonjiin Modifier System
// The modifier keys a sink can hold around a synthesized tap.

use std::fmt;
use std::str::FromStr;

use crate::Key;

/// A modifier a [`KeySink`](crate::output::KeySink) can hold and release.
///
/// Composition only ever asserts `Shift` (for the shifted vowel variants),
/// but sinks are written against the full set so one sink implementation
/// serves other synthesized sequences too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl Modifier {
    /// The left-hand key that asserts this modifier.
    pub fn key(self) -> Key {
        match self {
            Modifier::Shift => Key::from(42),
            Modifier::Ctrl => Key::from(29),
            Modifier::Alt => Key::from(56),
            Modifier::Meta => Key::from(125),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Shift => write!(f, "SHIFT"),
            Modifier::Ctrl => write!(f, "CTRL"),
            Modifier::Alt => write!(f, "ALT"),
            Modifier::Meta => write!(f, "META"),
        }
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHIFT" => Ok(Modifier::Shift),
            "CTRL" | "CONTROL" => Ok(Modifier::Ctrl),
            "ALT" | "OPT" | "OPTION" => Ok(Modifier::Alt),
            "META" | "SUPER" | "WIN" | "CMD" => Ok(Modifier::Meta),
            _ => Err(format!("Unknown modifier: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_keys() {
        assert_eq!(Modifier::Shift.key(), Key::from(42));
        assert_eq!(Modifier::Shift.key().name(), "LEFT_SHIFT");
    }

    #[test]
    fn test_modifier_parse() {
        assert_eq!("shift".parse(), Ok(Modifier::Shift));
        assert_eq!("Cmd".parse(), Ok(Modifier::Meta));
        assert!("hyper".parse::<Modifier>().is_err());
    }
}
