//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::expr::Expr;
use crate::simplify::{
    fraction::{is_numeric, rational_factors, split_rational},
    rules::do_multiply,
    step::Step,
};
use crate::step_collector::StepCollector;

/// `a*(b*c) = a*b*c`
///
/// Also downgrades products with fewer than two factors.
pub fn flatten_mul(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.len() < 2 {
            return Some(Expr::Mul(factors.to_vec()).downgrade());
        }

        if !factors.iter().any(|factor| matches!(factor, Expr::Mul(_))) {
            return None;
        }

        Some(factors.iter()
            .cloned()
            .fold(Expr::Mul(Vec::new()), |acc, factor| acc * factor))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenMul);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(Expr::is_zero) {
            Some(Expr::integer(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Multiplies all numerical factors together into a single reduced fraction.
///
/// `3/12 = 1/4`
/// `12/3 = 4`
/// `2*x*3 = 6*x`
pub fn reduce_numerical_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let numeric = factors.iter()
            .filter(|factor| is_numeric(factor))
            .cloned()
            .collect::<Vec<_>>();
        if numeric.is_empty() {
            return None;
        }

        let (coeff, rest) = split_rational(factors);
        let mut new_factors = rational_factors(&coeff);
        if new_factors == numeric {
            return None;
        }

        new_factors.extend(rest);
        Some(Expr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::ReduceFraction);
    Some(opt)
}

/// Combines like factors. Numerical factors are left to [`reduce_numerical_fraction`].
///
/// `a^b*a^c = a^(b+c)`
/// `a*a = a^2`
/// etc.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut new_factors = factors.to_vec();
        let mut current_factor_idx = 0;

        /// Utility function to extract the base and exponent of an expression. If the expression
        /// is not [`Expr::Exp`], the exponent is `1`.
        ///
        /// - `a^b` -> `(a, b)`
        /// - `a` -> `(a, 1)`
        fn get_exp(expr: &Expr) -> (Expr, Expr) {
            match expr {
                Expr::Exp(lhs, rhs) => (*lhs.clone(), *rhs.clone()),
                expr => (expr.clone(), Expr::integer(1)),
            }
        }

        // this is O(n^2) worst case, due to scanning the whole vec for each factor, but products
        // rarely have more than a handful of factors
        while current_factor_idx < new_factors.len() {
            if is_numeric(&new_factors[current_factor_idx]) {
                current_factor_idx += 1;
                continue;
            }

            let (current_factor, mut current_factor_exp) = get_exp(&new_factors[current_factor_idx]);
            let mut combined = false;

            // look at every factor after `current_factor`
            let mut next_factor_idx = current_factor_idx + 1;
            while next_factor_idx < new_factors.len() {
                let (next_factor, next_factor_exp) = get_exp(&new_factors[next_factor_idx]);

                // bases must be strictly equal
                // if they are, apply a^b*a^c = a^(b+c)
                if current_factor == next_factor {
                    current_factor_exp += next_factor_exp;
                    new_factors.remove(next_factor_idx);
                    combined = true;
                } else {
                    next_factor_idx += 1;
                }
            }

            // after all combining, update the current factor
            if combined {
                new_factors[current_factor_idx] = if current_factor_exp.is_one() {
                    current_factor
                } else {
                    current_factor.pow(current_factor_exp)
                };
            }

            current_factor_idx += 1;
        }

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten_mul(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| reduce_numerical_fraction(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn recip(n: i32) -> Expr {
        Expr::integer(n).pow(Expr::integer(-1))
    }

    #[test]
    fn zero_product() {
        let expr = Expr::Mul(vec![x(), Expr::integer(0)]);
        assert_eq!(multiply_zero(&expr, &mut ()), Some(Expr::integer(0)));
    }

    #[test]
    fn reduce_fraction() {
        let expr = Expr::Mul(vec![Expr::integer(3), recip(12)]);
        assert_eq!(reduce_numerical_fraction(&expr, &mut ()), Some(recip(4)));
    }

    #[test]
    fn reduce_to_integer() {
        let expr = Expr::Mul(vec![Expr::integer(12), x(), recip(3)]);
        assert_eq!(
            reduce_numerical_fraction(&expr, &mut ()),
            Some(Expr::Mul(vec![Expr::integer(4), x()])),
        );
    }

    #[test]
    fn reduced_fraction_is_left_alone() {
        let expr = Expr::Mul(vec![Expr::integer(2), recip(3), x()]);
        assert_eq!(reduce_numerical_fraction(&expr, &mut ()), None);
    }

    #[test]
    fn square() {
        let expr = Expr::Mul(vec![x(), Expr::symbol("y"), x()]);
        assert_eq!(
            combine_like_factors(&expr, &mut ()),
            Some(Expr::Mul(vec![x().pow(Expr::integer(2)), Expr::symbol("y")])),
        );
    }

    #[test]
    fn cancel_to_power_zero() {
        let expr = Expr::Mul(vec![x(), x().pow(Expr::integer(-1))]);
        assert_eq!(
            combine_like_factors(&expr, &mut ()),
            Some(x().pow(Expr::integer(0))),
        );
    }

    #[test]
    fn flatten_nested() {
        let expr = Expr::Mul(vec![Expr::Mul(vec![x(), Expr::integer(2)]), x()]);
        assert_eq!(
            flatten_mul(&expr, &mut ()),
            Some(Expr::Mul(vec![x(), Expr::integer(2), x()])),
        );
    }
}
