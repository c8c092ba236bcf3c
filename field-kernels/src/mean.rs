//! The field of mean functions.

use field_algebra::{Expr, Field};
use std::fmt;

/// The field of mean functions.
///
/// A separate field from [`Kernel`](crate::kernel::Kernel): mean expressions and kernel
/// expressions are distinct types and cannot be mixed.
#[derive(Debug)]
pub struct Mean;

/// A symbolic mean expression.
pub type MeanExpr = Expr<Mean>;

/// A named base mean function.
///
/// The name is purely symbolic; equality is name equality.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseMean(pub &'static str);

impl fmt::Display for BaseMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.0)
    }
}

impl Field for Mean {
    type Leaf = BaseMean;
}

/// A named base mean function as an expression.
pub fn function(name: &'static str) -> MeanExpr {
    Expr::leaf(BaseMean(name))
}
