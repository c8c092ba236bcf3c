//! End-to-end checks of the algebraic laws over the kernel and mean fields.

use field_algebra::{add, equal, mul, Error, Expr, Factor};
use field_kernels::kernel::{delta, eq, linear};
use field_kernels::mean::function;
use pretty_assertions::assert_eq;

#[test]
fn identity_laws() {
    let k = eq();
    assert_eq!(mul(&k, 1.0).unwrap(), k);
    assert!(mul(&k, 0.0).unwrap().is_zero());
    assert_eq!(add(&k, 0.0).unwrap(), k);
}

#[test]
fn commutativity_up_to_structure() {
    let (a, b) = (eq(), linear());
    assert!(equal(&add(&a, &b).unwrap(), &add(&b, &a).unwrap()));
    assert!(equal(&mul(&a, &b).unwrap(), &mul(&b, &a).unwrap()));
}

#[test]
fn normal_form_is_a_fixed_point() {
    // feeding a reduced expression back through the rules changes nothing
    let expr = add(&mul(&eq(), &linear()).unwrap(), &delta()).unwrap();
    assert!(equal(&mul(&expr, 1.0).unwrap(), &expr));
    assert!(equal(&add(&expr, 0.0).unwrap(), &expr));
}

#[test]
fn equal_base_scaled_kernels_merge() {
    // 2k + 3k = 5k
    let k = eq();
    let merged = add(mul(&k, 2.0).unwrap(), mul(&k, 3.0).unwrap()).unwrap();
    assert_eq!(merged.to_string(), "5 * EQ()");

    let (base, scale) = merged.as_scaled().unwrap();
    assert_eq!(base, &k);
    assert_eq!(scale, 5.0);
}

#[test]
fn mismatched_base_scaled_kernels_fold_scales_left() {
    // (2 k1) * (3 k2) = (6 k1) * k2
    let expr = mul(mul(&eq(), 2.0).unwrap(), mul(&linear(), 3.0).unwrap()).unwrap();
    assert_eq!(expr.to_string(), "6 * EQ() * Linear()");

    assert_eq!(expr.num_factors(), 3);
    assert_eq!(expr.factor(0).unwrap(), Factor::Scalar(6.0));
    assert_eq!(expr.factor(1).unwrap(), Factor::Element(&eq()));
    assert_eq!(expr.factor(2).unwrap(), Factor::Element(&linear()));
}

#[test]
fn zero_scaling_renders_as_zero() {
    let expr = mul(0.0, &eq()).unwrap();
    assert!(expr.is_zero());
    assert_eq!(expr.to_string(), "0");
}

#[test]
fn minimal_parenthesization() {
    let (a, b, c) = (eq(), linear(), delta());

    // a sum multiplied by an element must be grouped
    let expr = mul(add(&a, &b).unwrap(), &c).unwrap();
    assert_eq!(expr.to_string(), "(EQ() + Linear()) * Delta()");

    // a product added to an element must not be
    let expr = add(mul(&a, &b).unwrap(), &c).unwrap();
    assert_eq!(expr.to_string(), "EQ() * Linear() + Delta()");
}

#[test]
fn scalar_terms_lift_through_one() {
    let expr = add(&eq(), 2.0).unwrap();
    assert_eq!(expr.to_string(), "EQ() + 2 * 1");

    let expr = add(2.0, &eq()).unwrap();
    assert_eq!(expr.to_string(), "2 * 1 + EQ()");
}

#[test]
fn sums_pair_commutatively_at_one_level_only() {
    let (a, b, c) = (eq(), linear(), delta());
    assert!(equal(&add(&a, &b).unwrap(), &add(&b, &a).unwrap()));

    // re-associated nestings are intentionally not recognized as equal
    let left = add(add(&a, &b).unwrap(), &c).unwrap();
    let right = add(&a, add(&b, &c).unwrap()).unwrap();
    assert!(!equal(&left, &right));

    // both still flatten to the same term list
    assert_eq!(left.num_terms(), 3);
    assert_eq!(right.num_terms(), 3);
    assert_eq!(left.terms().collect::<Vec<_>>(), right.terms().collect::<Vec<_>>());
}

#[test]
fn subtraction_and_negation() {
    let k = eq();
    assert!((k.clone() - k.clone()).is_zero());
    assert_eq!((-k).to_string(), "-1 * EQ()");
}

#[test]
fn term_index_past_the_end_errors() {
    let expr = add(&eq(), &linear()).unwrap();
    assert_eq!(
        expr.term(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 }),
    );
}

#[test]
fn scalar_scalar_operations_are_rejected() {
    use field_kernels::kernel::Kernel;

    assert_eq!(
        mul::<Kernel>(2.0, 3.0),
        Err(Error::OperationNotSupported { op: "mul" }),
    );
}

#[test]
fn mean_field_has_its_own_primitives() {
    let m = function("tanh");
    assert_eq!((m.clone() + m).to_string(), "2 * tanh()");
    assert_eq!(Expr::<field_kernels::mean::Mean>::zero().to_string(), "0");
}

#[test]
fn kernel_sums_of_sums_render_flat() {
    // (EQ + Linear) + Delta renders without parentheses
    let expr = add(add(&eq(), &linear()).unwrap(), &delta()).unwrap();
    assert_eq!(expr.to_string(), "EQ() + Linear() + Delta()");
}
