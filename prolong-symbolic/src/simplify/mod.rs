//! Simplification of expressions into an expanded, canonical sum of products.
//!
//! The simplifier works bottom-up. Each child of an expression is simplified first, then the rules
//! in [`rules`] are applied to the expression itself until none of them apply. Whenever a rule
//! rewrites the expression, the children of the result are simplified again, since a rule can
//! create new, unsimplified children (for example, distributing a product over a sum).
//!
//! Once no rule applies, the terms / factors of the expression are sorted into canonical order
//! (see [`Expr::canonical_cmp`]). The result is fully expanded: no product contains a sum and no
//! sum is raised to a positive integer power. Numerical coefficients are reduced fractions, and
//! like terms and factors are combined. Two polynomials that are equal after expansion therefore
//! simplify to identical trees.

pub mod fraction;
pub mod rules;
pub mod step;

use crate::expr::{Expr, Primary};
use crate::step_collector::StepCollector;
use step::Step;

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplify the given expression, returning the simplified expression along with the steps taken
/// to simplify it.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::<Step>::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

/// Simplify the given expression, reporting each rule applied to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut expr = simplify_children(expr, step_collector);
    while let Some(rewritten) = rules::all(&expr, step_collector) {
        expr = simplify_children(&rewritten, step_collector);
    }
    sort_children(expr)
}

/// Simplifies every direct child of the expression, including the arguments of function calls.
fn simplify_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Primary(Primary::Call(call)) => {
            let mut call = call.clone();
            for arg in call.args.iter_mut() {
                *arg = simplify_with(arg, step_collector);
            }
            Expr::Primary(Primary::Call(call))
        },
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(terms.iter()
            .map(|term| simplify_with(term, step_collector))
            .collect()),
        Expr::Mul(factors) => Expr::Mul(factors.iter()
            .map(|factor| simplify_with(factor, step_collector))
            .collect()),
        Expr::Exp(base, exp) => Expr::Exp(
            Box::new(simplify_with(base, step_collector)),
            Box::new(simplify_with(exp, step_collector)),
        ),
    }
}

/// Sorts the direct children of a sum or product. The children themselves are already sorted.
fn sort_children(expr: Expr) -> Expr {
    match expr {
        Expr::Add(mut terms) => {
            terms.sort_by(Expr::canonical_cmp);
            Expr::Add(terms)
        },
        Expr::Mul(mut factors) => {
            factors.sort_by(Expr::canonical_cmp);
            Expr::Mul(factors)
        },
        expr => expr,
    }
}
