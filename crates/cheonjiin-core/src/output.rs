// Cheonjiin Output Emission
// Abstract output actions and their translation into key-sink calls.

use std::fmt;

use crate::{Key, Modifier};

/// One abstract step on the outgoing key stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    /// Retract the previously emitted provisional character.
    DeleteOne,
    /// Tap a key, optionally wrapped in a held shift.
    Tap { key: Key, shifted: bool },
}

impl OutputAction {
    /// Plain unshifted tap.
    pub fn tap(key: Key) -> Self {
        OutputAction::Tap {
            key,
            shifted: false,
        }
    }

    /// Tap wrapped in a held shift.
    pub fn tap_shifted(key: Key) -> Self {
        OutputAction::Tap { key, shifted: true }
    }
}

impl fmt::Display for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputAction::DeleteOne => write!(f, "delete-one"),
            OutputAction::Tap { key, shifted: false } => write!(f, "tap({})", key),
            OutputAction::Tap { key, shifted: true } => write!(f, "tap(shift+{})", key),
        }
    }
}

/// The firmware's synthetic key-injection surface.
///
/// Implementations are expected to apply each call immediately and in
/// order; the emitter relies on that to sequence delete-then-retype
/// correctly.
pub trait KeySink {
    fn tap(&mut self, key: Key);
    fn hold_modifier(&mut self, modifier: Modifier);
    fn release_modifier(&mut self, modifier: Modifier);
}

/// Translates an action list into [`KeySink`] calls.
///
/// Strictly in list order, no batching: a `DeleteOne` completes before the
/// following tap, and a shifted tap asserts shift, taps, then releases
/// shift before the next action runs.
#[derive(Debug, Clone, Copy)]
pub struct ActionEmitter {
    backspace: Key,
}

impl ActionEmitter {
    pub fn new(backspace: Key) -> Self {
        Self { backspace }
    }

    pub fn emit<S: KeySink>(&self, actions: &[OutputAction], sink: &mut S) {
        for action in actions {
            match *action {
                OutputAction::DeleteOne => sink.tap(self.backspace),
                OutputAction::Tap { key, shifted: false } => sink.tap(key),
                OutputAction::Tap { key, shifted: true } => {
                    sink.hold_modifier(Modifier::Shift);
                    sink.tap(key);
                    sink.release_modifier(Modifier::Shift);
                }
            }
        }
    }
}

/// A [`KeySink`] that renders taps into a string.
///
/// Letter keys append their letter (uppercased while shift is held), the
/// backspace key pops, anything else appends `<NAME>`. This is the
/// downstream view the CLI preview and the integration tests observe; a
/// real deployment points the emitter at the firmware's injection API
/// instead.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    backspace: Key,
    text: String,
    shift_held: bool,
}

impl TextBuffer {
    pub fn new(backspace: Key) -> Self {
        Self {
            backspace,
            text: String::new(),
            shift_held: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl KeySink for TextBuffer {
    fn tap(&mut self, key: Key) {
        if key == self.backspace {
            self.text.pop();
        } else if let Some(letter) = crate::key::key_to_letter(key) {
            if self.shift_held {
                self.text.push(letter.to_ascii_uppercase());
            } else {
                self.text.push(letter);
            }
        } else {
            self.text.push('<');
            self.text.push_str(key.name());
            self.text.push('>');
        }
    }

    fn hold_modifier(&mut self, modifier: Modifier) {
        if modifier == Modifier::Shift {
            self.shift_held = true;
        }
    }

    fn release_modifier(&mut self, modifier: Modifier) {
        if modifier == Modifier::Shift {
            self.shift_held = false;
        }
    }
}
