// Cheonjiin Key Type
// A single key code, numbered after Linux input-event-codes.h, plus the
// virtual stroke codes the composition engine listens for.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

/// A single keyboard key code.
///
/// Newtype wrapper around u16 for type safety. Hardware codes match Linux
/// `input-event-codes.h`; codes at [`VIRTUAL_BASE`] and above are virtual
/// keys that never reach the host and exist only as engine triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(pub u16);

/// First code reserved for virtual (engine-only) keys.
pub const VIRTUAL_BASE: u16 = 0x2f0;

/// Virtual trigger for the "ㅣ" stroke.
pub const STROKE_I: Key = Key(VIRTUAL_BASE);
/// Virtual trigger for the "ㆍ" (arae-a) stroke.
pub const STROKE_DOT: Key = Key(VIRTUAL_BASE + 1);
/// Virtual trigger for the "ㅡ" stroke.
pub const STROKE_EU: Key = Key(VIRTUAL_BASE + 2);

impl Key {
    /// Get the raw numeric code value
    pub fn code(self) -> u16 {
        self.0
    }

    /// Get the display name of this key
    pub fn name(self) -> &'static str {
        key_name(self.0)
    }

    /// True for engine-only virtual codes that have no hardware scan code.
    pub fn is_virtual(self) -> bool {
        self.0 >= VIRTUAL_BASE
    }
}

impl From<u16> for Key {
    fn from(code: u16) -> Self {
        Key(code)
    }
}

impl From<Key> for u16 {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key_from_name(s).ok_or_else(|| format!("Unknown key: {}", s))
    }
}

// Layout files spell keys by name, so Key serializes as its name string.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a key name such as \"Q\" or \"BACKSPACE\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// Name table: canonical name first, aliases after it.
const KEY_NAMES: &[(&str, u16)] = &[
    ("ESC", 1),
    ("ESCAPE", 1),
    ("KEY_1", 2),
    ("1", 2),
    ("KEY_2", 3),
    ("2", 3),
    ("KEY_3", 4),
    ("3", 4),
    ("KEY_4", 5),
    ("4", 5),
    ("KEY_5", 6),
    ("5", 6),
    ("KEY_6", 7),
    ("6", 7),
    ("KEY_7", 8),
    ("7", 8),
    ("KEY_8", 9),
    ("8", 9),
    ("KEY_9", 10),
    ("9", 10),
    ("KEY_0", 11),
    ("0", 11),
    ("MINUS", 12),
    ("EQUAL", 13),
    ("BACKSPACE", 14),
    ("TAB", 15),
    ("Q", 16),
    ("W", 17),
    ("E", 18),
    ("R", 19),
    ("T", 20),
    ("Y", 21),
    ("U", 22),
    ("I", 23),
    ("O", 24),
    ("P", 25),
    ("LEFT_BRACE", 26),
    ("RIGHT_BRACE", 27),
    ("ENTER", 28),
    ("LEFT_CTRL", 29),
    ("A", 30),
    ("S", 31),
    ("D", 32),
    ("F", 33),
    ("G", 34),
    ("H", 35),
    ("J", 36),
    ("K", 37),
    ("L", 38),
    ("SEMICOLON", 39),
    ("APOSTROPHE", 40),
    ("GRAVE", 41),
    ("LEFT_SHIFT", 42),
    ("BACKSLASH", 43),
    ("Z", 44),
    ("X", 45),
    ("C", 46),
    ("V", 47),
    ("B", 48),
    ("N", 49),
    ("M", 50),
    ("COMMA", 51),
    ("DOT", 52),
    ("SLASH", 53),
    ("RIGHT_SHIFT", 54),
    ("LEFT_ALT", 56),
    ("SPACE", 57),
    ("CAPSLOCK", 58),
    ("RIGHT_CTRL", 97),
    ("RIGHT_ALT", 100),
    ("HOME", 102),
    ("UP", 103),
    ("PAGE_UP", 104),
    ("LEFT", 105),
    ("RIGHT", 106),
    ("END", 107),
    ("DOWN", 108),
    ("PAGE_DOWN", 109),
    ("INSERT", 110),
    ("DELETE", 111),
    ("LEFT_META", 125),
    ("RIGHT_META", 126),
    ("STROKE_I", VIRTUAL_BASE),
    ("STROKE_DOT", VIRTUAL_BASE + 1),
    ("STROKE_EU", VIRTUAL_BASE + 2),
];

/// Display name for a key code
pub fn key_name(code: u16) -> &'static str {
    KEY_NAMES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or("UNKNOWN")
}

/// Try to parse a key name to a key code
pub fn key_from_name(name: &str) -> Option<Key> {
    let name_upper = name.to_uppercase();
    KEY_NAMES
        .iter()
        .find(|(n, _)| *n == name_upper)
        .map(|(_, code)| Key::from(*code))
}

/// If this key types a single lowercase Latin letter, return it.
///
/// Used by the text-buffer sink to render the intermediate stream; keys
/// outside a–z render as their name instead.
pub fn key_to_letter(key: Key) -> Option<char> {
    let name = key_name(key.code());
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_uppercase() => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}
