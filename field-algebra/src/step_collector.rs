//! A lightweight way to observe which rewrite rules fire.

/// A type that collects the steps taken by the rewrite engine.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// care which rules fired, which is the common case for the plain [`add`](crate::add) /
/// [`mul`](crate::mul) entry points.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
