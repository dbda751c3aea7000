// Cheonjiin Layout Configuration
// The per-keyboard configuration surface: trigger keys, consonant set,
// output keys. Loaded from a TOML file or built in code.

use std::collections::HashSet;
use std::path::Path;

use crate::key::{STROKE_DOT, STROKE_EU, STROKE_I};
use crate::Key;

/// Errors raised while loading or validating a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Overlapping trigger keys: {0}")]
    OverlappingTriggers(String),
}

/// The three stroke trigger keycodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Strokes {
    pub i: Key,
    pub dot: Key,
    pub eu: Key,
}

impl Default for Strokes {
    fn default() -> Self {
        Self {
            i: STROKE_I,
            dot: STROKE_DOT,
            eu: STROKE_EU,
        }
    }
}

/// The concrete keys the engine taps on the outgoing stream.
///
/// Field names are the intermediate Latin letters the downstream input
/// method expects; the defaults map each to the key of the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct OutputKeys {
    pub o: Key,
    pub i: Key,
    pub j: Key,
    pub u: Key,
    pub p: Key,
    pub k: Key,
    pub n: Key,
    pub b: Key,
    pub h: Key,
    pub y: Key,
    pub m: Key,
    pub l: Key,
}

impl Default for OutputKeys {
    fn default() -> Self {
        Self {
            o: Key::from(24),
            i: Key::from(23),
            j: Key::from(36),
            u: Key::from(22),
            p: Key::from(25),
            k: Key::from(37),
            n: Key::from(49),
            b: Key::from(48),
            h: Key::from(35),
            y: Key::from(21),
            m: Key::from(50),
            l: Key::from(38),
        }
    }
}

/// Construction-time configuration for one
/// [`CompositionEngine`](crate::CompositionEngine): everything
/// layout-specific, nothing behavioral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub strokes: Strokes,
    pub backspace: Key,
    pub consonants: HashSet<Key>,
    pub output: OutputKeys,
}

impl Default for Layout {
    fn default() -> Self {
        // Right-half one-hand board: the fourteen consonant letter keys
        // of its Hangul layer.
        let consonants = ["Q", "W", "E", "R", "T", "A", "S", "D", "F", "G", "Z", "X", "C", "V"]
            .iter()
            .map(|name| name.parse().unwrap())
            .collect();
        Self {
            strokes: Strokes::default(),
            backspace: Key::from(14),
            consonants,
            output: OutputKeys::default(),
        }
    }
}

/// Raw TOML mirror; every section is optional and falls back to the
/// default layout.
#[derive(Debug, Default, serde::Deserialize)]
struct LayoutToml {
    #[serde(default)]
    strokes: Option<Strokes>,
    #[serde(default)]
    backspace: Option<Key>,
    #[serde(default)]
    consonants: Option<Vec<Key>>,
    #[serde(default)]
    output: Option<OutputKeys>,
}

impl Layout {
    /// Load a layout from a TOML file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a layout from a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, LayoutError> {
        let raw: LayoutToml =
            toml::from_str(content).map_err(|e| LayoutError::TomlParse(e.to_string()))?;

        let defaults = Layout::default();
        let layout = Layout {
            strokes: raw.strokes.unwrap_or(defaults.strokes),
            backspace: raw.backspace.unwrap_or(defaults.backspace),
            consonants: raw
                .consonants
                .map(|keys| keys.into_iter().collect())
                .unwrap_or(defaults.consonants),
            output: raw.output.unwrap_or(defaults.output),
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Register an extra consonant-trigger key by name.
    ///
    /// Keyboard variants remap extra keys (tap-dance aliases) onto
    /// consonants; those arrive here as additional set members rather
    /// than new behavior.
    pub fn add_consonant_alias(&mut self, name: &str) -> Result<(), LayoutError> {
        let key: Key = name
            .parse()
            .map_err(|_| LayoutError::UnknownKey(name.to_string()))?;
        self.consonants.insert(key);
        self.validate()
    }

    /// Check the trigger keys cannot shadow one another.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let Strokes { i, dot, eu } = self.strokes;
        if i == dot || i == eu || dot == eu {
            return Err(LayoutError::OverlappingTriggers(format!(
                "stroke keys must be distinct (i={}, dot={}, eu={})",
                i, dot, eu
            )));
        }
        for stroke in [i, dot, eu] {
            if stroke == self.backspace {
                return Err(LayoutError::OverlappingTriggers(format!(
                    "stroke key {} is also the backspace key",
                    stroke
                )));
            }
            if self.consonants.contains(&stroke) {
                return Err(LayoutError::OverlappingTriggers(format!(
                    "stroke key {} is also in the consonant set",
                    stroke
                )));
            }
        }
        Ok(())
    }
}
