//! The field of covariance functions.

use field_algebra::{Expr, Field};
use std::fmt;

/// The field of covariance functions (kernels).
///
/// Closed under addition and scalar multiplication; the engine's Zero and One play the roles
/// of the identically-zero kernel and the constant-one kernel.
#[derive(Debug)]
pub struct Kernel;

/// A symbolic kernel expression.
pub type KernelExpr = Expr<Kernel>;

/// The base covariance functions this crate knows about.
///
/// Base kernels carry no external parameters here; two bases are equal exactly when they are
/// the same variant.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseKernel {
    /// The exponentiated-quadratic (squared-exponential) kernel.
    Eq,

    /// The linear kernel.
    Linear,

    /// The Kronecker-delta (white noise) kernel.
    Delta,
}

impl fmt::Display for BaseKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => f.write_str("EQ()"),
            Self::Linear => f.write_str("Linear()"),
            Self::Delta => f.write_str("Delta()"),
        }
    }
}

impl Field for Kernel {
    type Leaf = BaseKernel;
}

/// The exponentiated-quadratic kernel as an expression.
pub fn eq() -> KernelExpr {
    Expr::leaf(BaseKernel::Eq)
}

/// The linear kernel as an expression.
pub fn linear() -> KernelExpr {
    Expr::leaf(BaseKernel::Linear)
}

/// The Kronecker-delta kernel as an expression.
pub fn delta() -> KernelExpr {
    Expr::leaf(BaseKernel::Delta)
}
