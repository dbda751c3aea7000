// Cheonjiin Composition State
// The per-stream state the transition rules read and rewrite.

/// Progress of the "ㅣ"-initial branch.
///
/// `First` means a provisional `l` has been emitted; `Second` means it was
/// replaced by `k`. A third dot replaces `k` with `i` and moves the branch
/// into the one-shot [`Pending::FinalI`] marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IStage {
    #[default]
    Idle,
    First,
    Second,
}

/// Progress of the "ㅡ"-initial branch (`m` then `n`, analogous to
/// [`IStage`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EuStage {
    #[default]
    Idle,
    First,
    Second,
}

/// One-shot terminal marker, consumable by exactly one more `ㅣ` stroke
/// before the state resets.
///
/// The variants are mutually exclusive by construction: every rule that
/// sets one performs a full reset first, so a single marker covers all
/// five terminal cases with no reachable state lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    None,
    /// `i` stands for a completed ㅑ; one more stroke shifts it to ㅒ.
    FinalI,
    /// `j` emitted for ㅓ; one more stroke replaces it with `p` (ㅔ).
    J,
    /// `u` emitted for ㅕ; one more stroke replaces it with `P` (ㅖ).
    U,
    /// `b` emitted for ㅠ; one more stroke replaces it with `nj` (ㅝ).
    B,
    /// `nj` emitted for ㅝ; one more stroke replaces it with `p` (ㅞ).
    Nj,
}

/// The full mutable state of one composition stream.
///
/// Exclusively owned by its [`CompositionEngine`](crate::CompositionEngine);
/// one instance per independent typing stream (e.g. per keyboard half).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompositionState {
    pub i_stage: IStage,
    pub eu_stage: EuStage,
    pub pending: Pending,
    /// A consonant key has been seen and not yet consumed or reset.
    pub consonant_active: bool,
    /// Consecutive dot taps counted while `consonant_active`; wraps to 0
    /// (clearing `consonant_active`) on the tap that would reach 3.
    pub dot_count: u8,
}

impl CompositionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every field to its initial value. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no composition is in progress at all.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        assert!(CompositionState::new().is_idle());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = CompositionState {
            i_stage: IStage::Second,
            pending: Pending::J,
            consonant_active: true,
            dot_count: 2,
            ..Default::default()
        };
        state.reset();
        let once = state;
        state.reset();
        assert_eq!(state, once);
        assert!(state.is_idle());
    }

    #[test]
    fn test_is_idle_checks_every_field() {
        let mut state = CompositionState::new();
        state.dot_count = 1;
        assert!(!state.is_idle());

        let mut state = CompositionState::new();
        state.eu_stage = EuStage::First;
        assert!(!state.is_idle());

        let mut state = CompositionState::new();
        state.pending = Pending::Nj;
        assert!(!state.is_idle());
    }
}
