//! Rewrite rules for addition.
//!
//! Identity terms vanish first; after that the rules try to merge the operands into a single
//! scaled node whenever their bases agree under structural equality, falling back to pairing
//! them into a sum. Bare scalars never survive as leaves: a scalar added to an element is
//! lifted into the tree as a `c * One` term, so term queries on the result always see genuine
//! field elements.

use crate::element::Expr;
use crate::field::Field;
use crate::step_collector::StepCollector;
use std::sync::Arc;
use super::multiply::mul_scalar;
use super::step::Step;

/// Adds two elements, reducing the result to normal form.
pub fn add_elements<F: Field>(
    a: &Expr<F>,
    b: &Expr<F>,
    steps: &mut dyn StepCollector<Step>,
) -> Expr<F> {
    match (a, b) {
        // identity terms vanish before anything else
        (_, Expr::Zero) => {
            steps.push(Step::AddZero);
            a.clone()
        },
        (Expr::Zero, _) => {
            steps.push(Step::AddZero);
            b.clone()
        },

        // s1*e + s2*e = (s1+s2)*e
        (Expr::Scaled(e1, s1), Expr::Scaled(e2, s2)) => {
            if e1 == e2 {
                steps.push(Step::CombineTerms);
                mul_scalar(e1, s1 + s2, steps)
            } else {
                Expr::Sum(Arc::new(a.clone()), Arc::new(b.clone()))
            }
        },

        // s*e + e = (s+1)*e
        (Expr::Scaled(e, s), _) => {
            if e.as_ref() == b {
                steps.push(Step::CombineTerms);
                mul_scalar(b, s + 1.0, steps)
            } else {
                Expr::Sum(Arc::new(a.clone()), Arc::new(b.clone()))
            }
        },
        (_, Expr::Scaled(e, s)) => {
            if a == e.as_ref() {
                steps.push(Step::CombineTerms);
                mul_scalar(a, s + 1.0, steps)
            } else {
                Expr::Sum(Arc::new(a.clone()), Arc::new(b.clone()))
            }
        },

        // e + e = 2*e; otherwise pair the operands
        _ => {
            if a == b {
                steps.push(Step::CombineTerms);
                mul_scalar(a, 2.0, steps)
            } else {
                Expr::Sum(Arc::new(a.clone()), Arc::new(b.clone()))
            }
        },
    }
}

/// Adds a plain scalar on the right of an element, reducing the result to normal form.
pub fn add_scalar<F: Field>(
    a: &Expr<F>,
    c: f64,
    steps: &mut dyn StepCollector<Step>,
) -> Expr<F> {
    match a {
        // 0 + c collapses to the lifted scalar alone
        Expr::Zero => {
            if c == 0.0 {
                steps.push(Step::AddZero);
                a.clone()
            } else {
                steps.push(Step::LiftScalar);
                mul_scalar(&Expr::One, c, steps)
            }
        },
        _ if c == 0.0 => {
            steps.push(Step::AddZero);
            a.clone()
        },
        _ => {
            steps.push(Step::LiftScalar);
            let lifted = mul_scalar(&Expr::One, c, steps);
            Expr::Sum(Arc::new(a.clone()), Arc::new(lifted))
        },
    }
}

/// Adds a plain scalar on the left of an element. Same rules as [`add_scalar`], but the lifted
/// scalar keeps its place as the first term.
pub fn scalar_add<F: Field>(
    c: f64,
    b: &Expr<F>,
    steps: &mut dyn StepCollector<Step>,
) -> Expr<F> {
    match b {
        Expr::Zero => {
            if c == 0.0 {
                steps.push(Step::AddZero);
                b.clone()
            } else {
                steps.push(Step::LiftScalar);
                mul_scalar(&Expr::One, c, steps)
            }
        },
        _ if c == 0.0 => {
            steps.push(Step::AddZero);
            b.clone()
        },
        _ => {
            steps.push(Step::LiftScalar);
            let lifted = mul_scalar(&Expr::One, c, steps);
            Expr::Sum(Arc::new(lifted), Arc::new(b.clone()))
        },
    }
}
