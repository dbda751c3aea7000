// Cheonjiin Composition Engine
// The per-keystroke transducer: classify, apply the transition rules,
// hand the resulting action list to the emitter.

use log::trace;
use smallvec::{smallvec, SmallVec};

use crate::classify::{KeyClass, KeyClassifier};
use crate::layout::Layout;
use crate::output::{ActionEmitter, KeySink, OutputAction};
use crate::state::{CompositionState, EuStage, IStage, Pending};
use crate::{Action, Key};

/// Action list for one key event. Never longer than three entries
/// (delete + two taps, for the ㅝ revision).
pub type Actions = SmallVec<[OutputAction; 4]>;

/// What the engine decided for one key-down event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transduced {
    /// Synthesized output, to be emitted in order before anything else.
    pub actions: Actions,
    /// Whether the original key should still be delivered downstream.
    pub pass_through: bool,
}

impl Transduced {
    fn pass() -> Self {
        Self {
            actions: SmallVec::new(),
            pass_through: true,
        }
    }

    fn suppress(actions: Actions) -> Self {
        Self {
            actions,
            pass_through: false,
        }
    }
}

/// A stateful three-stroke composition transducer for one typing stream.
///
/// Invoked synchronously once per key-down event; key-up and autorepeat
/// events pass through untouched. Owns its [`CompositionState`]
/// exclusively, so independent streams (e.g. two keyboard halves) each get
/// their own engine and never share state.
#[derive(Debug, Clone)]
pub struct CompositionEngine {
    layout: Layout,
    classifier: KeyClassifier,
    emitter: ActionEmitter,
    state: CompositionState,
}

impl CompositionEngine {
    pub fn new(layout: Layout) -> Self {
        let classifier = KeyClassifier::new(&layout);
        let emitter = ActionEmitter::new(layout.backspace);
        Self {
            layout,
            classifier,
            emitter,
            state: CompositionState::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &CompositionState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Process one key event. Only `Press` reaches the transition rules;
    /// `Release` and `Repeat` always pass through with no state change.
    pub fn process(&mut self, key: Key, action: Action) -> Transduced {
        if !action.just_pressed() {
            return Transduced::pass();
        }
        self.on_key_down(key)
    }

    /// Process one key-down event and return the transduction decision.
    pub fn on_key_down(&mut self, key: Key) -> Transduced {
        let class = self.classifier.classify(key);
        trace!("key-down {} classified {} in {:?}", key, class, self.state);

        let result = match class {
            KeyClass::StrokeI => self.on_stroke_i(),
            KeyClass::StrokeDot => self.on_stroke_dot(),
            KeyClass::StrokeEu => self.on_stroke_eu(),
            KeyClass::Consonant => {
                // The consonant itself still types; it re-arms dot counting.
                self.state.reset();
                self.state.consonant_active = true;
                Some(Transduced::pass())
            }
            KeyClass::Backspace | KeyClass::Other => {
                self.state.reset();
                Some(Transduced::pass())
            }
        };

        // A stroke key arriving in a state no rule matches behaves like
        // any other unrecognized key: deliver it, drop the composition.
        let result = result.unwrap_or_else(|| {
            self.state.reset();
            Transduced::pass()
        });

        trace!(
            "-> actions {:?}, pass_through {}",
            result.actions,
            result.pass_through
        );
        result
    }

    /// Process a key event and emit its actions through `sink`.
    ///
    /// Returns whether the original key should still be delivered, which
    /// is the decision the host firmware's per-key hook needs.
    pub fn drive<S: KeySink>(&mut self, key: Key, action: Action, sink: &mut S) -> bool {
        let result = self.process(key, action);
        self.emitter.emit(&result.actions, sink);
        result.pass_through
    }

    /// ㅣ stroke rules, in table order. `None` means no rule matched.
    fn on_stroke_i(&mut self) -> Option<Transduced> {
        let out = self.layout.output;
        let s = &mut self.state;

        if s.i_stage == IStage::Second {
            // k -> o (ㅏ -> ㅐ)
            s.reset();
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.o),
            ]))
        } else if s.pending == Pending::FinalI {
            // i -> O (ㅑ -> ㅒ)
            s.reset();
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap_shifted(out.o),
            ]))
        } else if s.consonant_active && s.dot_count == 1 {
            // j (ㅓ)
            s.reset();
            s.pending = Pending::J;
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.j)]))
        } else if s.consonant_active && s.dot_count == 2 {
            // u (ㅕ)
            s.reset();
            s.pending = Pending::U;
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.u)]))
        } else if s.pending == Pending::J {
            // j -> p (ㅓ -> ㅔ)
            s.reset();
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.p),
            ]))
        } else if s.pending == Pending::U {
            // u -> P (ㅕ -> ㅖ)
            s.reset();
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap_shifted(out.p),
            ]))
        } else if s.pending != Pending::B && s.pending != Pending::Nj && s.dot_count == 0 {
            // Provisional l (ㅣ). Deliberately no reset: an armed consonant
            // stays armed so a following dot still counts.
            s.i_stage = IStage::First;
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.l)]))
        } else if s.pending == Pending::B {
            // b -> nj (ㅠ -> ㅝ)
            s.reset();
            s.pending = Pending::Nj;
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.n),
                OutputAction::tap(out.j),
            ]))
        } else if s.pending == Pending::Nj {
            // nj -> p (ㅝ -> ㅞ)
            s.reset();
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.p),
            ]))
        } else {
            None
        }
    }

    /// ㆍ (arae-a) stroke rules.
    fn on_stroke_dot(&mut self) -> Option<Transduced> {
        let out = self.layout.output;
        let s = &mut self.state;

        if s.i_stage == IStage::First {
            // l -> k (ㅣ -> ㅏ)
            s.i_stage = IStage::Second;
            s.dot_count = 0;
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.k),
            ]))
        } else if s.i_stage == IStage::Second {
            // k -> i (ㅏ -> ㅑ)
            s.reset();
            s.pending = Pending::FinalI;
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.i),
            ]))
        } else if s.eu_stage == EuStage::First {
            // m -> n (ㅡ -> ㅜ)
            s.eu_stage = EuStage::Second;
            s.dot_count = 0;
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.n),
            ]))
        } else if s.eu_stage == EuStage::Second {
            // n -> b (ㅜ -> ㅠ)
            s.reset();
            s.pending = Pending::B;
            Some(Transduced::suppress(smallvec![
                OutputAction::DeleteOne,
                OutputAction::tap(out.b),
            ]))
        } else if s.consonant_active {
            // Silent count; the dot that would reach 3 clears instead.
            if s.dot_count >= 2 {
                s.dot_count = 0;
                s.consonant_active = false;
            } else {
                s.dot_count += 1;
            }
            Some(Transduced::suppress(SmallVec::new()))
        } else {
            None
        }
    }

    /// ㅡ stroke rules.
    fn on_stroke_eu(&mut self) -> Option<Transduced> {
        let out = self.layout.output;
        let s = &mut self.state;

        if s.dot_count == 0 {
            // Provisional m (ㅡ); no reset, same as the l rule.
            s.eu_stage = EuStage::First;
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.m)]))
        } else if s.consonant_active && s.dot_count == 1 {
            // h (ㅗ)
            s.reset();
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.h)]))
        } else if s.consonant_active && s.dot_count == 2 {
            // y (ㅛ)
            s.reset();
            Some(Transduced::suppress(smallvec![OutputAction::tap(out.y)]))
        } else {
            None
        }
    }
}
