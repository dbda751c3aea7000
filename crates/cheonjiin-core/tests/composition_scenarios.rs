// Cheonjiin End-to-End Composition Scenarios
//
// These tests run whole stroke sequences through the public API and check
// the downstream text a host would see, using the TextBuffer sink in place
// of the firmware's key-injection API.
//
// Run with: cargo test --test composition_scenarios

use cheonjiin_core::{
    Action, CompositionEngine, Layout, TextBuffer, STROKE_DOT, STROKE_EU, STROKE_I,
};
use cheonjiin_core::{Key, KeySink};

// =========================================================================
// Test Helpers
// =========================================================================

fn engine() -> CompositionEngine {
    CompositionEngine::new(Layout::default())
}

fn buffer() -> TextBuffer {
    TextBuffer::new(Layout::default().backspace)
}

/// Press a key and play the engine's decision against the buffer the way
/// the host firmware would: synthesized actions first, then the original
/// key if the engine did not suppress it.
fn press(engine: &mut CompositionEngine, buffer: &mut TextBuffer, key: Key) -> bool {
    let delivered = engine.drive(key, Action::Press, buffer);
    if delivered {
        buffer.tap(key);
    }
    let _ = engine.drive(key, Action::Release, buffer);
    delivered
}

fn press_all(engine: &mut CompositionEngine, buffer: &mut TextBuffer, keys: &[Key]) {
    for &key in keys {
        press(engine, buffer, key);
    }
}

// =========================================================================
// Stroke-only vowel composition
// =========================================================================

#[test]
fn scenario_i_dot_cycle_revises_in_place() {
    let mut engine = engine();
    let mut buffer = buffer();

    assert!(!press(&mut engine, &mut buffer, STROKE_I));
    assert_eq!(buffer.text(), "l"); // ㅣ

    assert!(!press(&mut engine, &mut buffer, STROKE_DOT));
    assert_eq!(buffer.text(), "k"); // ㅏ

    assert!(!press(&mut engine, &mut buffer, STROKE_DOT));
    assert_eq!(buffer.text(), "i"); // ㅑ

    assert!(!press(&mut engine, &mut buffer, STROKE_I));
    assert_eq!(buffer.text(), "O"); // ㅒ
    assert!(engine.state().is_idle());
}

#[test]
fn scenario_i_dot_then_i_is_ae() {
    let mut engine = engine();
    let mut buffer = buffer();

    press_all(&mut engine, &mut buffer, &[STROKE_I, STROKE_DOT, STROKE_I]);
    assert_eq!(buffer.text(), "o"); // ㅐ
    assert!(engine.state().is_idle());
}

#[test]
fn scenario_eu_branch_through_wo_and_we() {
    let mut engine = engine();
    let mut buffer = buffer();

    press(&mut engine, &mut buffer, STROKE_EU);
    assert_eq!(buffer.text(), "m"); // ㅡ
    press(&mut engine, &mut buffer, STROKE_DOT);
    assert_eq!(buffer.text(), "n"); // ㅜ
    press(&mut engine, &mut buffer, STROKE_DOT);
    assert_eq!(buffer.text(), "b"); // ㅠ
    press(&mut engine, &mut buffer, STROKE_I);
    assert_eq!(buffer.text(), "nj"); // ㅝ
    press(&mut engine, &mut buffer, STROKE_I);
    assert_eq!(buffer.text(), "np"); // ㅞ: only the j is retracted
    assert!(engine.state().is_idle());
}

// =========================================================================
// Consonant-armed dot composition
// =========================================================================

#[test]
fn scenario_consonant_dot_i_is_eo_then_e() {
    let mut engine = engine();
    let mut buffer = buffer();
    let q = Key::from(16);

    assert!(press(&mut engine, &mut buffer, q)); // consonant passes through
    assert_eq!(buffer.text(), "q");

    assert!(!press(&mut engine, &mut buffer, STROKE_DOT)); // silent count
    assert_eq!(buffer.text(), "q");

    assert!(!press(&mut engine, &mut buffer, STROKE_I));
    assert_eq!(buffer.text(), "qj"); // ㅓ

    assert!(!press(&mut engine, &mut buffer, STROKE_I));
    assert_eq!(buffer.text(), "qp"); // ㅔ
    assert!(engine.state().is_idle());
}

#[test]
fn scenario_consonant_two_dots_yields_yeo_then_ye() {
    let mut engine = engine();
    let mut buffer = buffer();

    press(&mut engine, &mut buffer, Key::from(31)); // S
    press_all(&mut engine, &mut buffer, &[STROKE_DOT, STROKE_DOT, STROKE_I]);
    assert_eq!(buffer.text(), "su"); // ㅕ

    press(&mut engine, &mut buffer, STROKE_I);
    assert_eq!(buffer.text(), "sP"); // ㅖ
}

#[test]
fn scenario_consonant_dots_eu_yields_o_and_yo() {
    let mut engine = engine();
    let mut buffer = buffer();

    press(&mut engine, &mut buffer, Key::from(32)); // D
    press_all(&mut engine, &mut buffer, &[STROKE_DOT, STROKE_EU]);
    assert_eq!(buffer.text(), "dh"); // ㅗ

    press(&mut engine, &mut buffer, Key::from(32));
    press_all(&mut engine, &mut buffer, &[STROKE_DOT, STROKE_DOT, STROKE_EU]);
    assert_eq!(buffer.text(), "dhdy"); // ㅛ
}

#[test]
fn scenario_three_dots_cancel_silently() {
    let mut engine = engine();
    let mut buffer = buffer();

    press(&mut engine, &mut buffer, Key::from(16));
    press_all(
        &mut engine,
        &mut buffer,
        &[STROKE_DOT, STROKE_DOT, STROKE_DOT],
    );
    assert_eq!(buffer.text(), "q"); // nothing emitted, nothing retracted
    assert!(engine.state().is_idle());
}

// =========================================================================
// Cancellation and interleaving
// =========================================================================

#[test]
fn scenario_backspace_aborts_and_still_deletes() {
    let mut engine = engine();
    let mut buffer = buffer();
    let backspace = Layout::default().backspace;

    press_all(&mut engine, &mut buffer, &[STROKE_I, STROKE_DOT]);
    assert_eq!(buffer.text(), "k");

    assert!(press(&mut engine, &mut buffer, backspace)); // passes through
    assert_eq!(buffer.text(), ""); // host applied the real backspace
    assert!(engine.state().is_idle());

    // Composition starts clean afterwards.
    press(&mut engine, &mut buffer, STROKE_I);
    assert_eq!(buffer.text(), "l");
}

#[test]
fn scenario_unrelated_key_resets_composition() {
    let mut engine = engine();
    let mut buffer = buffer();
    let space = Key::from(57);

    press_all(&mut engine, &mut buffer, &[STROKE_I, space]);
    assert_eq!(buffer.text(), "l<SPACE>");
    assert!(engine.state().is_idle());

    // The dot after the reset no longer revises the l.
    press(&mut engine, &mut buffer, STROKE_DOT);
    assert_eq!(buffer.text(), "l<SPACE>");
    assert!(engine.state().is_idle());
}

#[test]
fn scenario_new_consonant_restarts_composition() {
    let mut engine = engine();
    let mut buffer = buffer();

    // First syllable: ㄱ(R) + ㅏ.
    press(&mut engine, &mut buffer, Key::from(19));
    press_all(&mut engine, &mut buffer, &[STROKE_I, STROKE_DOT]);
    assert_eq!(buffer.text(), "rk");

    // Next consonant re-arms; its dot counts instead of revising the k.
    press(&mut engine, &mut buffer, Key::from(31));
    press_all(&mut engine, &mut buffer, &[STROKE_DOT, STROKE_I]);
    assert_eq!(buffer.text(), "rksj");
}

// =========================================================================
// Configuration surface
// =========================================================================

#[test]
fn scenario_custom_layout_output_keys() {
    let layout = Layout::from_toml(
        r#"
        [output]
        l = "SEMICOLON"
        "#,
    )
    .unwrap();
    let mut engine = CompositionEngine::new(layout);
    let mut buffer = buffer();

    press(&mut engine, &mut buffer, STROKE_I);
    assert_eq!(buffer.text(), "<SEMICOLON>");
}

#[test]
fn scenario_two_halves_are_independent() {
    let mut left = engine();
    let mut right = engine();
    let mut left_buffer = buffer();
    let mut right_buffer = buffer();

    press(&mut left, &mut left_buffer, STROKE_I);
    press(&mut right, &mut right_buffer, STROKE_EU);

    // Each half revises only its own provisional character.
    press(&mut left, &mut left_buffer, STROKE_DOT);
    assert_eq!(left_buffer.text(), "k");
    assert_eq!(right_buffer.text(), "m");
}
