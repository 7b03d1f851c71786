use super::domain::Jdi8Score;

/// Slot holding the most recently computed score.
///
/// Writers race with last-writer-wins semantics. An untouched slot reads as
/// zero.
pub trait ScoreStore: Send + Sync {
    fn record(&self, score: Jdi8Score);
    fn latest(&self) -> Jdi8Score;
}
