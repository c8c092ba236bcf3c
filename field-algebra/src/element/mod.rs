//! The expression tree the engine rewrites.
//!
//! [`Expr`] is the universal node type: a binary tree whose leaves are either a field's
//! primitive identities ([`Expr::Zero`], [`Expr::One`]) or its opaque base elements
//! ([`Expr::Leaf`]), and whose interior nodes are the structural shapes [`Expr::Scaled`],
//! [`Expr::Sum`] and [`Expr::Product`]. Nodes are immutable once built; children sit behind
//! [`Arc`], so a child may be shared by any number of parents and cloning a tree is cheap.
//!
//! Trees produced by the rewrite entry points ([`add`](crate::add), [`mul`](crate::mul) and the
//! operator bindings below) are always in *normal form*: no `1 * e`, `0 * e`, `e + 0` or
//! `e * 1` nodes survive, and scaled / summed nodes over the same base are merged. The variant
//! constructors on this type perform no rewriting themselves; building nodes directly is how
//! the rules assemble their (already reduced) results.
//!
//! # Structural equality
//!
//! Deciding whether two trees denote the same mathematical object is undecidable in general, so
//! `PartialEq` implements a deliberately conservative *structural* equality:
//!
//! - `Zero == Zero` and `One == One`;
//! - leaves compare by the field's own leaf equality;
//! - two sums (or two products) are equal if their children pair up directly or swapped —
//!   commutative pairing at exactly one level, with no re-association deeper down, so
//!   `(p + q) + r` and `p + (q + r)` are **not** reported equal;
//! - every other combination is unequal. In particular two [`Expr::Scaled`] nodes never
//!   compare equal, not even to themselves: the rewrite rules only ever compare the *bases* of
//!   scaled nodes, and anything beyond that is left to field implementations.
//!
//! Structural equality never reports a false positive: if it says two trees are equal, they
//! are mathematically equal. The converse does not hold.

mod iter;

use crate::error::Error;
use crate::field::Field;
use crate::rules;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

pub use iter::{Factors, Terms};

/// A node in an expression tree over the field `F`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "F::Leaf: serde::Serialize",
    deserialize = "F::Leaf: serde::Deserialize<'de>",
)))]
pub enum Expr<F: Field> {
    /// The field's additive identity.
    Zero,

    /// The field's multiplicative identity.
    One,

    /// An opaque base element of the field.
    Leaf(F::Leaf),

    /// A child element multiplied by a scalar.
    Scaled(Arc<Expr<F>>, f64),

    /// The sum of two children.
    Sum(Arc<Expr<F>>, Arc<Expr<F>>),

    /// The product of two children.
    Product(Arc<Expr<F>>, Arc<Expr<F>>),
}

impl<F: Field> Expr<F> {
    /// The additive identity of `F`.
    pub fn zero() -> Self {
        Self::Zero
    }

    /// The multiplicative identity of `F`.
    pub fn one() -> Self {
        Self::One
    }

    /// Wraps an opaque base element of `F`.
    pub fn leaf(leaf: F::Leaf) -> Self {
        Self::Leaf(leaf)
    }

    /// Builds a `scale * e` node. No rewriting is performed; prefer [`mul`](crate::mul) (or
    /// `e * scale`), which keeps the result in normal form.
    pub fn scaled(e: Expr<F>, scale: f64) -> Self {
        Self::Scaled(Arc::new(e), scale)
    }

    /// Builds an `e1 + e2` node. No rewriting is performed; prefer [`add`](crate::add).
    pub fn sum(e1: Expr<F>, e2: Expr<F>) -> Self {
        Self::Sum(Arc::new(e1), Arc::new(e2))
    }

    /// Builds an `e1 * e2` node. No rewriting is performed; prefer [`mul`](crate::mul).
    pub fn product(e1: Expr<F>, e2: Expr<F>) -> Self {
        Self::Product(Arc::new(e1), Arc::new(e2))
    }

    /// Returns true if this node is the additive identity.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Returns true if this node is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One)
    }

    /// If this node is an opaque base element, returns a reference to it.
    pub fn as_leaf(&self) -> Option<&F::Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// If this node is a scaled node, returns its base and scale.
    pub fn as_scaled(&self) -> Option<(&Expr<F>, f64)> {
        match self {
            Self::Scaled(e, scale) => Some((e.as_ref(), *scale)),
            _ => None,
        }
    }

    /// The number of summands in this node's flattened term list.
    ///
    /// A sum contributes the terms of both children; every other node is a single term. This
    /// is a structural query over the tree, not a stored counter.
    pub fn num_terms(&self) -> usize {
        match self {
            Self::Sum(e1, e2) => e1.num_terms() + e2.num_terms(),
            _ => 1,
        }
    }

    /// Returns the `i`-th summand of this node's flattened term list, 0-indexed.
    pub fn term(&self, i: usize) -> Result<&Expr<F>, Error> {
        match self {
            Self::Sum(e1, e2) => {
                let left = e1.num_terms();
                if i < left {
                    e1.term(i)
                } else if i < left + e2.num_terms() {
                    e2.term(i - left)
                } else {
                    Err(Error::IndexOutOfRange { index: i, len: self.num_terms() })
                }
            },
            _ if i == 0 => Ok(self),
            _ => Err(Error::IndexOutOfRange { index: i, len: 1 }),
        }
    }

    /// The number of multiplicands in this node's flattened factor list.
    ///
    /// A product contributes the factors of both children; a scaled node contributes its
    /// scalar followed by the factors of its base; every other node is a single factor.
    pub fn num_factors(&self) -> usize {
        match self {
            Self::Scaled(e, _) => e.num_factors() + 1,
            Self::Product(e1, e2) => e1.num_factors() + e2.num_factors(),
            _ => 1,
        }
    }

    /// Returns the `i`-th multiplicand of this node's flattened factor list, 0-indexed.
    ///
    /// Factor 0 of a scaled node is its scalar scale, so the result is a [`Factor`]: either a
    /// scalar or a borrowed element.
    pub fn factor(&self, i: usize) -> Result<Factor<'_, F>, Error> {
        match self {
            Self::Scaled(e, scale) => {
                if i == 0 {
                    Ok(Factor::Scalar(*scale))
                } else if i < e.num_factors() + 1 {
                    e.factor(i - 1)
                } else {
                    Err(Error::IndexOutOfRange { index: i, len: self.num_factors() })
                }
            },
            Self::Product(e1, e2) => {
                let left = e1.num_factors();
                if i < left {
                    e1.factor(i)
                } else if i < left + e2.num_factors() {
                    e2.factor(i - left)
                } else {
                    Err(Error::IndexOutOfRange { index: i, len: self.num_factors() })
                }
            },
            _ if i == 0 => Ok(Factor::Element(self)),
            _ => Err(Error::IndexOutOfRange { index: i, len: 1 }),
        }
    }

    /// Returns an iterator over the flattened term list, left-to-right.
    pub fn terms(&self) -> Terms<'_, F> {
        Terms::new(self)
    }

    /// Returns an iterator over the flattened factor list, left-to-right.
    pub fn factors(&self) -> Factors<'_, F> {
        Factors::new(self)
    }
}

/// One multiplicand of a flattened factor list: the scale of a scaled node, or an element.
pub enum Factor<'a, F: Field> {
    /// A scalar factor.
    Scalar(f64),

    /// An element factor.
    Element(&'a Expr<F>),
}

impl<F: Field> Clone for Factor<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Field> Copy for Factor<'_, F> {}

impl<F: Field> fmt::Debug for Factor<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(c) => f.debug_tuple("Scalar").field(c).finish(),
            Self::Element(e) => f.debug_tuple("Element").field(e).finish(),
        }
    }
}

impl<F: Field> PartialEq for Factor<'_, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => a == b,
            _ => false,
        }
    }
}

/// An input to the named [`add`](crate::add) / [`mul`](crate::mul) entry points: a plain
/// scalar, or an element of `F`.
///
/// Scalars are resolved into the element tree by the rewrite rules themselves (a lone scalar
/// `c` added to an element becomes the term `c * One`), so every leaf of a result tree is a
/// genuine field element, never a bare number.
pub enum Operand<F: Field> {
    /// A plain scalar.
    Scalar(f64),

    /// A field element.
    Element(Expr<F>),
}

impl<F: Field> From<f64> for Operand<F> {
    fn from(c: f64) -> Self {
        Self::Scalar(c)
    }
}

impl<F: Field> From<Expr<F>> for Operand<F> {
    fn from(e: Expr<F>) -> Self {
        Self::Element(e)
    }
}

impl<F: Field> From<&Expr<F>> for Operand<F> {
    fn from(e: &Expr<F>) -> Self {
        Self::Element(e.clone())
    }
}

impl<F: Field> Clone for Expr<F> {
    fn clone(&self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::One,
            Self::Leaf(leaf) => Self::Leaf(leaf.clone()),
            Self::Scaled(e, scale) => Self::Scaled(Arc::clone(e), *scale),
            Self::Sum(e1, e2) => Self::Sum(Arc::clone(e1), Arc::clone(e2)),
            Self::Product(e1, e2) => Self::Product(Arc::clone(e1), Arc::clone(e2)),
        }
    }
}

impl<F: Field> fmt::Debug for Expr<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("Zero"),
            Self::One => f.write_str("One"),
            Self::Leaf(leaf) => f.debug_tuple("Leaf").field(leaf).finish(),
            Self::Scaled(e, scale) => f.debug_tuple("Scaled").field(e).field(scale).finish(),
            Self::Sum(e1, e2) => f.debug_tuple("Sum").field(e1).field(e2).finish(),
            Self::Product(e1, e2) => f.debug_tuple("Product").field(e1).field(e2).finish(),
        }
    }
}

/// Structural equality. See the [module-level documentation](self) for exactly what this does
/// and does not guarantee; in particular it is **not** reflexive for [`Expr::Scaled`] nodes,
/// which is why [`Eq`] is deliberately not implemented.
impl<F: Field> PartialEq for Expr<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Zero, Self::Zero) | (Self::One, Self::One) => true,
            (Self::Leaf(a), Self::Leaf(b)) => a == b,
            (Self::Sum(a1, a2), Self::Sum(b1, b2))
            | (Self::Product(a1, a2), Self::Product(b1, b2)) => {
                (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1)
            },
            _ => false,
        }
    }
}

impl<F: Field> fmt::Display for Expr<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::fmt::render(self))
    }
}

/// Adds two elements and reduces the result to normal form.
impl<F: Field> Add for Expr<F> {
    type Output = Expr<F>;

    fn add(self, rhs: Self) -> Self::Output {
        rules::add::add_elements(&self, &rhs, &mut ())
    }
}

/// Adds a scalar to an element, lifting the scalar to a `c * One` term.
impl<F: Field> Add<f64> for Expr<F> {
    type Output = Expr<F>;

    fn add(self, rhs: f64) -> Self::Output {
        rules::add::add_scalar(&self, rhs, &mut ())
    }
}

/// Adds an element to a scalar, lifting the scalar to a `c * One` term.
impl<F: Field> Add<Expr<F>> for f64 {
    type Output = Expr<F>;

    fn add(self, rhs: Expr<F>) -> Self::Output {
        rules::add::scalar_add(self, &rhs, &mut ())
    }
}

/// Multiplies two elements and reduces the result to normal form.
impl<F: Field> Mul for Expr<F> {
    type Output = Expr<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        rules::multiply::mul_elements(&self, &rhs, &mut ())
    }
}

/// Scales an element by a scalar.
impl<F: Field> Mul<f64> for Expr<F> {
    type Output = Expr<F>;

    fn mul(self, rhs: f64) -> Self::Output {
        rules::multiply::mul_scalar(&self, rhs, &mut ())
    }
}

/// Scales an element by a scalar.
impl<F: Field> Mul<Expr<F>> for f64 {
    type Output = Expr<F>;

    fn mul(self, rhs: Expr<F>) -> Self::Output {
        rules::multiply::mul_scalar(&rhs, self, &mut ())
    }
}

/// Negation is multiplication by `-1`.
impl<F: Field> Neg for Expr<F> {
    type Output = Expr<F>;

    fn neg(self) -> Self::Output {
        rules::multiply::mul_scalar(&self, -1.0, &mut ())
    }
}

/// Subtraction is addition of the negated right-hand side.
impl<F: Field> Sub for Expr<F> {
    type Output = Expr<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<F: Field> Sub<f64> for Expr<F> {
    type Output = Expr<F>;

    fn sub(self, rhs: f64) -> Self::Output {
        self + (-rhs)
    }
}

impl<F: Field> Sub<Expr<F>> for f64 {
    type Output = Expr<F>;

    fn sub(self, rhs: Expr<F>) -> Self::Output {
        self + (-rhs)
    }
}
