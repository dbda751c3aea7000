// Cheonjiin Core Library
// Three-stroke (천지인-style) phonetic composition engine: intercepts the
// virtual stroke keys and rewrites the outgoing keystroke stream with
// delete-then-retype revisions.

pub mod action;
pub mod classify;
pub mod engine;
pub mod key;
pub mod layout;
pub mod modifier;
pub mod output;
pub mod state;

pub use action::Action;
pub use classify::{KeyClass, KeyClassifier};
pub use engine::{Actions, CompositionEngine, Transduced};
pub use key::{key_from_name, key_name, Key, STROKE_DOT, STROKE_EU, STROKE_I};
pub use layout::{Layout, LayoutError, OutputKeys, Strokes};
pub use modifier::Modifier;
pub use output::{ActionEmitter, KeySink, OutputAction, TextBuffer};
pub use state::{CompositionState, EuStage, IStage, Pending};
