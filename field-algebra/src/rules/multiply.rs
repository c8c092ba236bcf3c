//! Rewrite rules for multiplication.
//!
//! `mul` is total over every combination of the five structural shapes plus opaque leaves.
//! Scales always migrate outward: multiplying anything by a scaled node re-dispatches through
//! [`mul_scalar`], so a normal-form product never hides a scale below its root. When two
//! scaled factors over *different* bases meet, both scales fold onto the first operand's base
//! before the bases are paired (`(s1*e1) * (s2*e2) = ((s1*s2)*e1) * e2`); which side absorbs
//! the combined scale is part of the engine's contract and must not be flipped.

use crate::element::Expr;
use crate::field::Field;
use crate::step_collector::StepCollector;
use std::sync::Arc;
use super::step::Step;

/// Multiplies two elements, reducing the result to normal form.
pub fn mul_elements<F: Field>(
    a: &Expr<F>,
    b: &Expr<F>,
    steps: &mut dyn StepCollector<Step>,
) -> Expr<F> {
    match (a, b) {
        // absorbing and identity elements short-circuit before anything else
        (Expr::Zero, _) => {
            steps.push(Step::MulZero);
            a.clone()
        },
        (_, Expr::Zero) => {
            steps.push(Step::MulZero);
            b.clone()
        },
        (Expr::One, _) => {
            steps.push(Step::MulOne);
            b.clone()
        },
        (_, Expr::One) => {
            steps.push(Step::MulOne);
            a.clone()
        },

        // both operands scaled: fold the scales onto the first base
        (Expr::Scaled(e1, s1), Expr::Scaled(e2, s2)) => {
            steps.push(Step::CombineFactors);
            let folded = mul_scalar(e1, s1 * s2, steps);
            if e1 == e2 {
                // s1*e * s2*e = (s1*s2)*e
                folded
            } else if folded.is_zero() {
                folded
            } else {
                Expr::Product(Arc::new(folded), Arc::clone(e2))
            }
        },

        // one operand scaled: multiply the bases, then re-apply the scale
        (Expr::Scaled(e, s), _) => {
            steps.push(Step::PullScale);
            let base = mul_elements(e, b, steps);
            mul_scalar(&base, *s, steps)
        },
        (_, Expr::Scaled(e, s)) => {
            steps.push(Step::PullScale);
            let base = mul_elements(a, e, steps);
            mul_scalar(&base, *s, steps)
        },

        // nothing to reduce: pair the operands
        _ => Expr::Product(Arc::new(a.clone()), Arc::new(b.clone())),
    }
}

/// Multiplies an element by a plain scalar, reducing the result to normal form.
///
/// The comparisons against `0` and `1` are exact identity tests, not tolerances.
pub fn mul_scalar<F: Field>(
    a: &Expr<F>,
    scale: f64,
    steps: &mut dyn StepCollector<Step>,
) -> Expr<F> {
    match a {
        Expr::Zero => {
            steps.push(Step::MulZero);
            a.clone()
        },
        _ if scale == 0.0 => {
            steps.push(Step::MulZero);
            Expr::Zero
        },
        _ if scale == 1.0 => {
            steps.push(Step::MulOne);
            a.clone()
        },
        // c * (s * e) = (c*s) * e, re-dispatching so a collapsed scale cancels out
        Expr::Scaled(e, s) => {
            steps.push(Step::PullScale);
            mul_scalar(e, s * scale, steps)
        },
        _ => Expr::Scaled(Arc::new(a.clone()), scale),
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{var, Funcs};
    use crate::{Expr, Step};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_absorbs() {
        let p = var("p");
        assert!(mul_elements(&Expr::Zero, &p, &mut ()).is_zero());
        assert!(mul_elements(&p, &Expr::Zero, &mut ()).is_zero());
        assert!(mul_scalar(&p, 0.0, &mut ()).is_zero());
        assert!(mul_scalar(&Expr::<Funcs>::Zero, 5.0, &mut ()).is_zero());
    }

    #[test]
    fn one_is_identity() {
        let p = var("p");
        assert_eq!(mul_elements(&Expr::One, &p, &mut ()), p);
        assert_eq!(mul_elements(&p, &Expr::One, &mut ()), p);
        assert_eq!(mul_scalar(&p, 1.0, &mut ()), p);
        assert!(mul_elements(&Expr::<Funcs>::One, &Expr::One, &mut ()).is_one());
    }

    #[test]
    fn generic_operands_pair_into_a_product() {
        let (p, q) = (var("p"), var("q"));
        assert_eq!(
            mul_elements(&p, &q, &mut ()),
            Expr::product(p.clone(), q.clone()),
        );
    }

    #[test]
    fn scalar_multiplication_wraps_in_a_scaled_node() {
        let expr = mul_scalar(&var("p"), 3.0, &mut ());
        let (base, scale) = expr.as_scaled().unwrap();
        assert_eq!(base, &var("p"));
        assert_eq!(scale, 3.0);
    }

    #[test]
    fn nested_scales_collapse() {
        // 4 * (3 * p) = 12 * p
        let scaled = mul_scalar(&var("p"), 3.0, &mut ());
        let expr = mul_scalar(&scaled, 4.0, &mut ());
        let (base, scale) = expr.as_scaled().unwrap();
        assert_eq!(base, &var("p"));
        assert_eq!(scale, 12.0);
    }

    #[test]
    fn reciprocal_scales_cancel_entirely() {
        // 0.5 * (2 * p) = p, with no `1 *` residue
        let scaled = mul_scalar(&var("p"), 2.0, &mut ());
        assert_eq!(mul_scalar(&scaled, 0.5, &mut ()), var("p"));
    }

    #[test]
    fn equal_base_scaled_factors_fold_onto_one_node() {
        // (2p) * (3p) = 6 * p
        let a = mul_scalar(&var("p"), 2.0, &mut ());
        let b = mul_scalar(&var("p"), 3.0, &mut ());
        let expr = mul_elements(&a, &b, &mut ());
        let (base, scale) = expr.as_scaled().unwrap();
        assert_eq!(base, &var("p"));
        assert_eq!(scale, 6.0);
    }

    #[test]
    fn mismatched_base_scaled_factors_fold_onto_the_first_base() {
        // (2p) * (3q) = (6 * p) * q
        let a = mul_scalar(&var("p"), 2.0, &mut ());
        let b = mul_scalar(&var("q"), 3.0, &mut ());
        let expr = mul_elements(&a, &b, &mut ());
        match expr {
            Expr::Product(lhs, rhs) => {
                let (base, scale) = lhs.as_scaled().unwrap();
                assert_eq!(base, &var("p"));
                assert_eq!(scale, 6.0);
                assert_eq!(rhs.as_ref(), &var("q"));
            },
            other => panic!("expected a product, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_base_fold_with_unit_scale_leaves_a_bare_product() {
        // (2p) * (0.5q) = p * q
        let a = mul_scalar(&var("p"), 2.0, &mut ());
        let b = mul_scalar(&var("q"), 0.5, &mut ());
        assert_eq!(
            mul_elements(&a, &b, &mut ()),
            Expr::product(var("p"), var("q")),
        );
    }

    #[test]
    fn scaled_times_element_scales_the_product() {
        // (2p) * q = 2 * (p * q)
        let a = mul_scalar(&var("p"), 2.0, &mut ());
        let expr = mul_elements(&a, &var("q"), &mut ());
        let (base, scale) = expr.as_scaled().unwrap();
        assert_eq!(base, &Expr::product(var("p"), var("q")));
        assert_eq!(scale, 2.0);
    }

    #[test]
    fn steps_are_reported() {
        let mut steps = Vec::new();
        mul_scalar(&var("p"), 0.0, &mut steps);
        assert_eq!(steps, vec![Step::MulZero]);

        let mut steps = Vec::new();
        let scaled = mul_scalar(&var("p"), 2.0, &mut steps);
        mul_scalar(&scaled, 3.0, &mut steps);
        assert_eq!(steps, vec![Step::PullScale]);
    }
}
