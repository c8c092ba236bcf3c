//! The reductions the rewrite engine can report having applied.

/// A single reduction applied while rewriting an expression into normal form.
///
/// Only rules that actually shrink or merge something report a step; the structural fallbacks
/// that pair two irreducible operands into a sum or product report nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a + 0 = a` (or `0 + a = a`).
    AddZero,

    /// `a * 0 = 0` (or `0 * a = 0`), including a zero scalar.
    MulZero,

    /// `a * 1 = a` (or `1 * a = a`), including a unit scalar.
    MulOne,

    /// A scale was pulled out of a scaled node, `c * (s * e) = (c*s) * e`.
    PullScale,

    /// Two terms over the same base were merged, `s1*e + s2*e = (s1+s2)*e`.
    CombineTerms,

    /// Two scaled factors had their scales folded together.
    CombineFactors,

    /// A bare scalar was lifted into the element tree as a `c * One` term.
    LiftScalar,
}
