//! Simplification rules related to the distributive property.

use crate::expr::Expr;
use crate::simplify::{rules::{do_multiply, do_power}, step::Step};
use crate::step_collector::StepCollector;

/// `a*(b+c) = a*b + a*c`
pub fn distributive_property(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        // find the first `Expr::Add`, and distribute every other factor over it
        let idx = factors.iter().position(|factor| matches!(factor, Expr::Add(_)))?;
        let mut factors_to_distribute = factors.to_vec();
        let add_factor_terms = match factors_to_distribute.remove(idx) {
            Expr::Add(terms) => terms,
            _ => return None,
        };

        let new_terms = add_factor_terms.into_iter()
            .map(|term| {
                Expr::Mul(factors_to_distribute.clone()) * term
            })
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// `(a*b)^c = a^c * b^c`, where `c` is an integer
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if let Expr::Mul(factors) = lhs {
            if !rhs.is_integer() {
                return None;
            }

            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(rhs.clone()))
                .collect::<Vec<_>>();

            return Some(Expr::Mul(new_factors));
        }

        None
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// Applies all distribution rules.
///
/// The distributive property may or may not reduce the complexity of the expression, since it can
/// introduce additional operations. However, it is needed to reach the expanded normal form.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    distributive_property(expr, step_collector)
        .or_else(|| distribute_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn distribute_over_sum() {
        let (a, b, c) = (Expr::symbol("a"), Expr::symbol("b"), Expr::symbol("c"));
        let expr = Expr::Mul(vec![a.clone(), b.clone() + c.clone()]);
        assert_eq!(
            distributive_property(&expr, &mut ()),
            Some(Expr::Add(vec![a.clone() * b, a * c])),
        );
    }

    #[test]
    fn distribute_integer_power() {
        let (a, b) = (Expr::symbol("a"), Expr::symbol("b"));
        let expr = (a.clone() * b.clone()).pow(Expr::integer(-1));
        assert_eq!(
            distribute_power(&expr, &mut ()),
            Some(Expr::Mul(vec![
                a.pow(Expr::integer(-1)),
                b.pow(Expr::integer(-1)),
            ])),
        );
    }
}
