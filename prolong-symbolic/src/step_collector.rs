//! Receivers for the rewrite steps reported by the simplifier.

/// Something that receives the steps taken by an algorithm, in the order they are taken.
///
/// Three collectors are provided:
///
/// - `()` discards every step, for callers that only want the result.
/// - `Vec<S>` records every step.
/// - `usize` counts the steps without recording them, which is enough to log how much work a
///   simplification took.
pub trait StepCollector<S> {
    /// Receives the next step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}
