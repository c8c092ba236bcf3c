//! A symbolic term-rewriting engine for compositions of opaque function-like elements.
//!
//! This crate is the algebraic substrate for libraries that combine things like covariance or
//! mean functions with `+`, `*`, unary negation and subtraction. Elements are opaque: the
//! engine knows nothing about what they compute, only that they belong to a [`Field`] and can
//! be compared for deep equality. What the engine *does* guarantee is that every expression
//! it hands back is in canonical normal form:
//!
//! - no `1 * e`, `0 * e`, `e + 0` or `e * 1` nodes survive any operation;
//! - scales always sit at the top of their factor (`2 * (3 * e)` becomes `6 * e`);
//! - terms and factors over structurally equal bases are merged (`2k + 3k` becomes `5k`,
//!   `k + k` becomes `2k`, `k - k` becomes `0`).
//!
//! Reduction happens *during construction* — there is no separate simplify pass. Each
//! operation is an exhaustive match over the shapes of its two operands (see [`rules`]), so
//! the rule set is total by construction.
//!
//! # Example
//!
//! ```
//! use field_algebra::{Expr, Field};
//!
//! // a field of named covariance functions
//! struct Cov;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Name(&'static str);
//!
//! impl std::fmt::Display for Name {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(self.0)
//!     }
//! }
//!
//! impl Field for Cov {
//!     type Leaf = Name;
//! }
//!
//! let k = Expr::<Cov>::leaf(Name("k"));
//! assert_eq!((k.clone() + k.clone()).to_string(), "2 * k");
//! assert_eq!((k.clone() * 0.0).to_string(), "0");
//! assert_eq!((k.clone() - k).to_string(), "0");
//! ```
//!
//! # Scalars
//!
//! A plain `f64` may stand wherever an element is expected, both through the operator
//! bindings (`k * 2.0`, `3.0 + k`) and through the named [`add`] / [`mul`] entry points,
//! which take either kind of [`Operand`]. Scalars never survive as leaves of a result tree:
//! a scalar added to an element is lifted to a `c * One` term of the element's field.
//!
//! # Concurrency
//!
//! The engine is purely functional: no operation mutates its operands and there is no shared
//! state. Children of a node are behind [`std::sync::Arc`], so expression trees are `Send`
//! and `Sync` whenever the field's leaves are.

pub mod element;
pub mod error;
pub mod field;
pub mod fmt;
pub mod rules;
pub mod step_collector;

pub use element::{Expr, Factor, Operand};
pub use error::Error;
pub use field::Field;
pub use fmt::render;
pub use rules::step::Step;
pub use step_collector::StepCollector;

/// Adds two operands, each a scalar or an element, reducing the result to normal form.
///
/// Fails with [`Error::OperationNotSupported`] if both operands are plain scalars, since two
/// numbers belong to no field. Everything else reduces; see [`rules::add`] for the rule set.
pub fn add<F: Field>(
    a: impl Into<Operand<F>>,
    b: impl Into<Operand<F>>,
) -> Result<Expr<F>, Error> {
    add_with(a, b, &mut ())
}

/// Like [`add`], but reports every reduction applied to the given collector.
pub fn add_with<F: Field>(
    a: impl Into<Operand<F>>,
    b: impl Into<Operand<F>>,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Expr<F>, Error> {
    match (a.into(), b.into()) {
        (Operand::Element(a), Operand::Element(b)) => {
            Ok(rules::add::add_elements(&a, &b, steps))
        },
        (Operand::Element(a), Operand::Scalar(c)) => Ok(rules::add::add_scalar(&a, c, steps)),
        (Operand::Scalar(c), Operand::Element(b)) => Ok(rules::add::scalar_add(c, &b, steps)),
        (Operand::Scalar(_), Operand::Scalar(_)) => {
            Err(Error::OperationNotSupported { op: "add" })
        },
    }
}

/// Multiplies two operands, each a scalar or an element, reducing the result to normal form.
///
/// Fails with [`Error::OperationNotSupported`] if both operands are plain scalars. Everything
/// else reduces; see [`rules::multiply`] for the rule set.
pub fn mul<F: Field>(
    a: impl Into<Operand<F>>,
    b: impl Into<Operand<F>>,
) -> Result<Expr<F>, Error> {
    mul_with(a, b, &mut ())
}

/// Like [`mul`], but reports every reduction applied to the given collector.
pub fn mul_with<F: Field>(
    a: impl Into<Operand<F>>,
    b: impl Into<Operand<F>>,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Expr<F>, Error> {
    match (a.into(), b.into()) {
        (Operand::Element(a), Operand::Element(b)) => {
            Ok(rules::multiply::mul_elements(&a, &b, steps))
        },
        (Operand::Element(a), Operand::Scalar(c))
        | (Operand::Scalar(c), Operand::Element(a)) => {
            Ok(rules::multiply::mul_scalar(&a, c, steps))
        },
        (Operand::Scalar(_), Operand::Scalar(_)) => {
            Err(Error::OperationNotSupported { op: "mul" })
        },
    }
}

/// Negates an element; shorthand for multiplication by `-1`.
pub fn negate<F: Field>(a: &Expr<F>) -> Expr<F> {
    rules::multiply::mul_scalar(a, -1.0, &mut ())
}

/// Structural equality of two elements.
///
/// Equivalent to `a == b`; see the [`element`] module documentation for exactly what
/// structural equality does and does not recognize.
pub fn equal<F: Field>(a: &Expr<F>, b: &Expr<F>) -> bool {
    a == b
}
