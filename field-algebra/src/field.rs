//! The [`Field`] trait, the contract between the algebra engine and a concrete family of
//! elements.
//!
//! A *field* here is a family of function-like objects closed under addition and scalar
//! multiplication: covariance functions, mean functions, and so on. The engine never looks
//! inside a field's elements; it only composes them into [`Expr`](crate::element::Expr) trees
//! and reduces those trees to normal form. Everything field-specific is captured by this trait:
//!
//! - the [`Leaf`](Field::Leaf) type, the field's opaque base elements, and
//! - the display hooks that say how a scale, a sum, and a product of this field render.
//!
//! Because the engine's node type is parameterized by the field, every structural role (the
//! zero, the one, a scaled node, ...) of one field is a *distinct Rust type* from the same role
//! of another field. Mixing elements of two fields, or comparing their zeros, is a compile
//! error rather than a runtime one.

use std::fmt::{Debug, Display};

/// A field of function-like elements.
///
/// Implementors are marker types; all the state lives in the associated [`Leaf`](Field::Leaf)
/// type. The display hooks have defaults matching the usual mathematical notation and only need
/// to be overridden by fields with their own rendering conventions.
pub trait Field: Sized + 'static {
    /// The field's opaque, non-decomposable base elements.
    ///
    /// Equality of leaves is deep element-level equality; the engine relies on it to detect
    /// mergeable terms and factors.
    type Leaf: Clone + Debug + PartialEq + Display;

    /// Renders `scale * e`. `e` is already fully rendered (and parenthesized if needed).
    fn display_scaled(scale: f64, e: String) -> String {
        format!("{} * {}", scale, e)
    }

    /// Renders `e1 + e2`. Both children are already fully rendered.
    fn display_sum(e1: String, e2: String) -> String {
        format!("{} + {}", e1, e2)
    }

    /// Renders `e1 * e2`. Both children are already fully rendered.
    fn display_product(e1: String, e2: String) -> String {
        format!("{} * {}", e1, e2)
    }

    /// Renders the field's additive identity.
    fn display_zero() -> String {
        String::from("0")
    }

    /// Renders the field's multiplicative identity.
    fn display_one() -> String {
        String::from("1")
    }
}
