//! Concrete fields for the [`field_algebra`] engine: covariance functions and mean functions.
//!
//! Both fields treat their base functions as purely symbolic objects — this crate assigns no
//! numerical semantics to them. What it provides is the collaborator side of the engine's
//! contract: a [`Field`](field_algebra::Field) implementation per family, opaque leaves with
//! deep equality and display conventions, and constructor helpers.
//!
//! Kernels and means are *different fields*, so their expressions are different types; adding
//! a kernel to a mean is a compile error, not a runtime one.
//!
//! ```
//! use field_kernels::kernel::{eq, linear};
//!
//! let k = eq() * 2.0 + linear();
//! assert_eq!(k.to_string(), "2 * EQ() + Linear()");
//! ```

pub mod kernel;
pub mod mean;

pub use kernel::{Kernel, KernelExpr};
pub use mean::{Mean, MeanExpr};
