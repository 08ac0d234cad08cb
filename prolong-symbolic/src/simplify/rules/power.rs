//! Simplification rules for powers with integer exponents.

use crate::expr::Expr;
use crate::primitive::int;
use crate::simplify::{rules::do_power, step::Step};
use crate::step_collector::StepCollector;
use rug::ops::Pow;

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        if rhs.is_zero() {
            Some(Expr::integer(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `1^a = 1`
pub fn one_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        if lhs.is_one() {
            Some(Expr::integer(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::OnePower);
    Some(opt)
}

/// Evaluates integer powers of integers, keeping negative powers as the reciprocal of a positive
/// integer.
///
/// `2^3 = 8`
/// `2^-3 = 8^-1`
/// `(-2)^-1 = -1 * 2^-1`
/// `(-1)^-1 = -1`
pub fn integer_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        let base = lhs.as_integer()?;
        let exp = rhs.as_integer()?;

        if *exp > 0 {
            let exp = exp.to_u32()?;
            Some(Expr::from(int(base.pow(exp))))
        } else if *exp == -1 {
            if *base == 1 || *base == -1 {
                Some(Expr::from(base.clone()))
            } else if *base < 0 {
                Some(Expr::Mul(vec![
                    Expr::integer(-1),
                    Expr::from(int(-base)).pow(Expr::integer(-1)),
                ]))
            } else {
                None
            }
        } else if *exp < -1 && !base.is_zero() {
            let exp = int(-exp).to_u32()?;
            Some(Expr::from(int(base.pow(exp))).pow(Expr::integer(-1)))
        } else {
            None
        }
    })?;

    step_collector.push(Step::IntegerPower);
    Some(opt)
}

/// `(a^b)^c = a^(b*c)`, where `b` and `c` are integers
pub fn power_of_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if let Expr::Exp(base, inner_exp) = lhs {
            let inner_exp = inner_exp.as_integer()?;
            let outer_exp = rhs.as_integer()?;
            return Some(Expr::Exp(
                base.clone(),
                Box::new(Expr::from(int(inner_exp * outer_exp))),
            ));
        }

        None
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// Expands a sum raised to a positive integer power into a sum of products.
///
/// `(a+b)^2 = a*a + a*b + b*a + b*b`
pub fn expand_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if let Expr::Add(terms) = lhs {
            let exp = rhs.as_integer()?.to_u32().filter(|exp| *exp >= 2)?;
            let mut expanded = terms.clone();
            for _ in 1..exp {
                expanded = expanded.iter()
                    .flat_map(|lhs| terms.iter().map(move |rhs| lhs.clone() * rhs.clone()))
                    .collect();
            }
            return Some(Expr::Add(expanded));
        }

        None
    })?;

    step_collector.push(Step::ExpandPower);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| one_power(expr, step_collector))
        .or_else(|| integer_power(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
        .or_else(|| expand_power(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn pow(base: Expr, exp: i32) -> Expr {
        base.pow(Expr::integer(exp))
    }

    #[test]
    fn evaluate_integer_power() {
        assert_eq!(integer_power(&pow(Expr::integer(-2), 3), &mut ()), Some(Expr::integer(-8)));
    }

    #[test]
    fn negative_power_is_reciprocal() {
        assert_eq!(
            integer_power(&pow(Expr::integer(2), -3), &mut ()),
            Some(pow(Expr::integer(8), -1)),
        );
        assert_eq!(integer_power(&pow(Expr::integer(8), -1), &mut ()), None);
    }

    #[test]
    fn negative_base_reciprocal() {
        assert_eq!(
            integer_power(&pow(Expr::integer(-2), -1), &mut ()),
            Some(Expr::Mul(vec![Expr::integer(-1), pow(Expr::integer(2), -1)])),
        );
    }

    #[test]
    fn nested_powers() {
        let x = Expr::symbol("x");
        assert_eq!(
            power_of_power(&pow(pow(x.clone(), 2), 3), &mut ()),
            Some(pow(x, 6)),
        );
    }

    #[test]
    fn expand_square() {
        let (a, b) = (Expr::symbol("a"), Expr::symbol("b"));
        assert_eq!(
            expand_power(&pow(a.clone() + b.clone(), 2), &mut ()),
            Some(Expr::Add(vec![
                a.clone() * a.clone(),
                a.clone() * b.clone(),
                b.clone() * a.clone(),
                b.clone() * b.clone(),
            ])),
        );
    }

    #[test]
    fn symbolic_exponent_untouched() {
        let expr = Expr::symbol("x").pow(Expr::symbol("n"));
        assert_eq!(all(&expr, &mut ()), None);
    }
}
