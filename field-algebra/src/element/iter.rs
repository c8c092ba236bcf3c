use super::{Expr, Factor};
use crate::field::Field;

/// An iterator over the flattened term list of an expression, left-to-right.
///
/// This iterator is created by [`Expr::terms`]. It walks the sum spine of the tree with an
/// explicit stack and yields every summand in the same order as [`Expr::term`].
pub struct Terms<'a, F: Field> {
    stack: Vec<&'a Expr<F>>,
}

impl<'a, F: Field> Terms<'a, F> {
    pub(super) fn new(expr: &'a Expr<F>) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a, F: Field> Iterator for Terms<'a, F> {
    type Item = &'a Expr<F>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = self.stack.pop()?;
            match expr {
                Expr::Sum(e1, e2) => {
                    // left child on top so terms come out left-to-right
                    self.stack.push(e2.as_ref());
                    self.stack.push(e1.as_ref());
                },
                expr => return Some(expr),
            }
        }
    }
}

/// An iterator over the flattened factor list of an expression, left-to-right.
///
/// This iterator is created by [`Expr::factors`]. The scale of a scaled node is yielded as
/// [`Factor::Scalar`] immediately before the factors of its base, matching [`Expr::factor`].
pub struct Factors<'a, F: Field> {
    stack: Vec<&'a Expr<F>>,
}

impl<'a, F: Field> Factors<'a, F> {
    pub(super) fn new(expr: &'a Expr<F>) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a, F: Field> Iterator for Factors<'a, F> {
    type Item = Factor<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = self.stack.pop()?;
            match expr {
                Expr::Product(e1, e2) => {
                    self.stack.push(e2.as_ref());
                    self.stack.push(e1.as_ref());
                },
                Expr::Scaled(e, scale) => {
                    self.stack.push(e.as_ref());
                    return Some(Factor::Scalar(*scale));
                },
                expr => return Some(Factor::Element(expr)),
            }
        }
    }
}
