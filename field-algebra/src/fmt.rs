//! Rendering expressions with a minimal number of parentheses.
//!
//! [`render`] walks the tree recursively; every child is rendered with knowledge of its parent
//! and wrapped in parentheses only when [`needs_parens`] says the surrounding shape would
//! otherwise bind it wrongly. The actual text for each shape comes from the field's display
//! hooks, so fields with their own notation for scales, sums and products render through the
//! same parenthesization pass.

use crate::element::Expr;
use crate::field::Field;

/// Renders an element with a minimal number of parentheses.
///
/// This is also what the [`Display`](std::fmt::Display) implementation of
/// [`Expr`](crate::element::Expr) produces.
pub fn render<F: Field>(el: &Expr<F>) -> String {
    match el {
        Expr::Zero => F::display_zero(),
        Expr::One => F::display_one(),
        Expr::Leaf(leaf) => leaf.to_string(),
        Expr::Scaled(e, scale) => F::display_scaled(*scale, render_child(e, el)),
        Expr::Sum(e1, e2) => F::display_sum(render_child(e1, el), render_child(e2, el)),
        Expr::Product(e1, e2) => {
            F::display_product(render_child(e1, el), render_child(e2, el))
        },
    }
}

/// Renders `el` as a child of `parent`, parenthesized if required.
fn render_child<F: Field>(el: &Expr<F>, parent: &Expr<F>) -> String {
    if needs_parens(el, parent) {
        format!("({})", render(el))
    } else {
        render(el)
    }
}

/// Decides whether `el` needs parentheses when rendered inside `parent`.
///
/// The case rules are ordered most-specific first; the first matching pair wins. Primitive and
/// leaf children never need parentheses, and neither does anything rendered inside a sum, so
/// the interesting cases are all children of scaled and product nodes.
pub fn needs_parens<F: Field>(el: &Expr<F>, parent: &Expr<F>) -> bool {
    match (el, parent) {
        // inside a scaled node, nested scales and products read fine unparenthesized,
        // but a sum does not: `2 * (p + q)`
        (Expr::Scaled(..) | Expr::Product(..), Expr::Scaled(..)) => false,
        (Expr::Sum(..), Expr::Scaled(..)) => true,

        // inside a product, a scaled child keeps its own shape (`2 * p * q`), while a sum
        // must be grouped: `(p + q) * r`
        (Expr::Scaled(..), Expr::Product(..)) => false,
        (Expr::Sum(..), Expr::Product(..)) => true,

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::{add::add_elements, multiply::{mul_elements, mul_scalar}};
    use crate::testing::var;
    use crate::Expr;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitives_render_bare() {
        assert_eq!(Expr::<crate::testing::Funcs>::zero().to_string(), "0");
        assert_eq!(Expr::<crate::testing::Funcs>::one().to_string(), "1");
        assert_eq!(var("p").to_string(), "p");
    }

    #[test]
    fn sum_inside_product_is_parenthesized() {
        // (p + q) * r
        let sum = add_elements(&var("p"), &var("q"), &mut ());
        let expr = mul_elements(&sum, &var("r"), &mut ());
        assert_eq!(expr.to_string(), "(p + q) * r");
    }

    #[test]
    fn product_inside_sum_is_not_parenthesized() {
        // p * q + r
        let product = mul_elements(&var("p"), &var("q"), &mut ());
        let expr = add_elements(&product, &var("r"), &mut ());
        assert_eq!(expr.to_string(), "p * q + r");
    }

    #[test]
    fn sum_inside_scale_is_parenthesized() {
        // 2 * (p + q)
        let sum = add_elements(&var("p"), &var("q"), &mut ());
        let expr = mul_scalar(&sum, 2.0, &mut ());
        assert_eq!(expr.to_string(), "2 * (p + q)");
    }

    #[test]
    fn scaled_factor_inside_product_is_not_parenthesized() {
        // (2p) * (3q) folds to 6 * p * q
        let a = mul_scalar(&var("p"), 2.0, &mut ());
        let b = mul_scalar(&var("q"), 3.0, &mut ());
        let expr = mul_elements(&a, &b, &mut ());
        assert_eq!(expr.to_string(), "6 * p * q");
    }

    #[test]
    fn integral_scales_render_without_a_fraction_part() {
        let expr = mul_scalar(&var("p"), 5.0, &mut ());
        assert_eq!(expr.to_string(), "5 * p");

        let expr = mul_scalar(&var("p"), 0.5, &mut ());
        assert_eq!(expr.to_string(), "0.5 * p");
    }

    #[test]
    fn zero_product_renders_as_zero() {
        let expr = mul_scalar(&var("p"), 0.0, &mut ());
        assert_eq!(expr.to_string(), "0");
    }

    #[test]
    fn lifted_scalars_render_through_one() {
        let expr = crate::rules::add::add_scalar(&var("p"), 2.0, &mut ());
        assert_eq!(expr.to_string(), "p + 2 * 1");
    }
}
