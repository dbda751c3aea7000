// Cheonjiin Key Classifier
// Maps raw key codes to the event classes the transition rules match on.

use std::collections::HashSet;
use std::fmt;

use crate::layout::Layout;
use crate::Key;

/// The class of an inbound key, as seen by the transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// The "ㅣ" stroke trigger.
    StrokeI,
    /// The "ㆍ" (arae-a) stroke trigger.
    StrokeDot,
    /// The "ㅡ" stroke trigger.
    StrokeEu,
    /// A consonant key: resets composition, then arms dot counting.
    Consonant,
    /// The destructive backspace key: aborts composition.
    Backspace,
    /// Anything else: resets composition and passes through.
    Other,
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyClass::StrokeI => write!(f, "stroke-i"),
            KeyClass::StrokeDot => write!(f, "stroke-dot"),
            KeyClass::StrokeEu => write!(f, "stroke-eu"),
            KeyClass::Consonant => write!(f, "consonant"),
            KeyClass::Backspace => write!(f, "backspace"),
            KeyClass::Other => write!(f, "other"),
        }
    }
}

/// Pure key-to-class mapping for one layout.
///
/// The stroke triggers and the consonant set are layout configuration; the
/// classification itself has no state and no side effects.
#[derive(Debug, Clone)]
pub struct KeyClassifier {
    stroke_i: Key,
    stroke_dot: Key,
    stroke_eu: Key,
    backspace: Key,
    consonants: HashSet<Key>,
}

impl KeyClassifier {
    pub fn new(layout: &Layout) -> Self {
        Self {
            stroke_i: layout.strokes.i,
            stroke_dot: layout.strokes.dot,
            stroke_eu: layout.strokes.eu,
            backspace: layout.backspace,
            consonants: layout.consonants.clone(),
        }
    }

    pub fn classify(&self, key: Key) -> KeyClass {
        if key == self.stroke_i {
            KeyClass::StrokeI
        } else if key == self.stroke_dot {
            KeyClass::StrokeDot
        } else if key == self.stroke_eu {
            KeyClass::StrokeEu
        } else if key == self.backspace {
            KeyClass::Backspace
        } else if self.consonants.contains(&key) {
            KeyClass::Consonant
        } else {
            KeyClass::Other
        }
    }
}
