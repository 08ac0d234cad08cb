//! Simplification rules for expressions involving addition, including combining like terms.

use crate::expr::{cmp_slices, Expr};
use crate::simplify::{
    fraction::{rational_factors, split_coefficient},
    rules::do_add,
    step::Step,
};
use crate::step_collector::StepCollector;
use rug::Rational;
use std::cmp::Ordering;

/// `a+(b+c) = a+b+c`
///
/// Also downgrades sums with fewer than two terms.
pub fn flatten_add(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        if terms.len() < 2 {
            return Some(Expr::Add(terms.to_vec()).downgrade());
        }

        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        Some(terms.iter()
            .cloned()
            .fold(Expr::Add(Vec::new()), |acc, term| acc + term))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenAdd);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `a+a+a = 3a`
/// `2a+3a = 5a`
/// `1/2*a+1/3*a = 5/6*a`
/// etc.
///
/// The terms must have sorted factors for like terms to be found, which is always the case for
/// the children of an expression being simplified.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let mut split = terms.iter()
            .map(split_coefficient)
            .collect::<Vec<_>>();

        // like terms become adjacent
        split.sort_by(|(_, lhs), (_, rhs)| cmp_slices(lhs, rhs));

        let mut combined: Vec<(Rational, Vec<Expr>)> = Vec::with_capacity(split.len());
        for (coeff, factors) in split {
            if let Some((last_coeff, last_factors)) = combined.last_mut() {
                if cmp_slices(last_factors, &factors) == Ordering::Equal {
                    *last_coeff += coeff;
                    continue;
                }
            }
            combined.push((coeff, factors));
        }

        if combined.len() == terms.len() {
            return None;
        }

        let new_terms = combined.into_iter()
            .filter(|(coeff, _)| *coeff != 0)
            .map(|(coeff, factors)| {
                let mut new_factors = rational_factors(&coeff);
                new_factors.extend(factors);
                Expr::Mul(new_factors).downgrade()
            })
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_add(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    #[test]
    fn flatten_nested() {
        let expr = Expr::Add(vec![
            x(),
            Expr::Add(vec![Expr::symbol("y"), Expr::integer(2)]),
        ]);
        assert_eq!(
            flatten_add(&expr, &mut ()),
            Some(Expr::Add(vec![x(), Expr::symbol("y"), Expr::integer(2)])),
        );
    }

    #[test]
    fn remove_zeros() {
        let expr = Expr::Add(vec![Expr::integer(0), x(), Expr::integer(0)]);
        assert_eq!(add_zero(&expr, &mut ()), Some(x()));
    }

    #[test]
    fn combine_fractions() {
        // 1/2*x + 1/3*x = 5/6*x
        let expr = Expr::Add(vec![
            Expr::Mul(vec![Expr::integer(2).pow(Expr::integer(-1)), x()]),
            Expr::Mul(vec![Expr::integer(3).pow(Expr::integer(-1)), x()]),
        ]);
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(Expr::Mul(vec![
            Expr::integer(5),
            Expr::integer(6).pow(Expr::integer(-1)),
            x(),
        ])));
    }

    #[test]
    fn combine_to_zero() {
        let expr = Expr::Add(vec![
            x(),
            Expr::Mul(vec![Expr::integer(-1), x()]),
        ]);
        let mut steps = Vec::<Step>::new();
        assert_eq!(combine_like_terms(&expr, &mut steps), Some(Expr::integer(0)));
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }

    #[test]
    fn nothing_to_combine() {
        let expr = Expr::Add(vec![x(), Expr::symbol("y")]);
        assert_eq!(combine_like_terms(&expr, &mut ()), None);
    }
}
