//! Tools to help manipulate numerical coefficients and fractions.
//!
//! Fractions are represented as a [`Expr::Mul`] containing a [`Primary::Integer`] numerator and
//! an [`Expr::Exp`] whose base is the integer denominator and whose exponent is `-1`. The
//! functions here convert between that representation and [`Rational`]s.

use crate::expr::{Expr, Primary};
use crate::primitive::{int, rational};
use rug::Rational;

/// Create an [`Expr`] representing a fraction with the given numerator and denominator.
///
/// The representation is a [`Expr::Mul`] containing two factors. The first factor is the
/// numerator, and the second factor is the denominator raised to the power of -1.
pub fn make_fraction(numerator: Expr, denominator: Expr) -> Expr {
    numerator *
        Expr::Exp(
            Box::new(denominator),
            Box::new(Expr::Primary(Primary::Integer(int(-1)))),
        )
}

/// Returns true if the factor is an integer or the reciprocal of a nonzero integer.
pub(crate) fn is_numeric(factor: &Expr) -> bool {
    factor.is_integer() || factor.is_integer_recip()
}

/// Multiplies together every integer and integer reciprocal in the given factors, returning the
/// product along with the remaining factors in their original order.
///
/// - `[2, x, 3^-1]` -> `(2/3, [x])`
/// - `[x, y]` -> `(1, [x, y])`
pub(crate) fn split_rational(factors: &[Expr]) -> (Rational, Vec<Expr>) {
    let mut coeff = rational(1);
    let mut rest = Vec::new();
    for factor in factors {
        if let Some(numerator) = factor.as_integer() {
            coeff *= rational(numerator);
        } else if let Some(denominator) = factor.as_integer_recip() {
            coeff /= rational(denominator);
        } else {
            rest.push(factor.clone());
        }
    }
    (coeff, rest)
}

/// Extracts the rational coefficient and the remaining factors of a term. If the term is not a
/// [`Expr::Mul`], it is treated as a product with one factor.
///
/// - `5` -> `(5, [])`
/// - `3*a` -> `(3, [a])`
/// - `4^-1*a*b` -> `(1/4, [a, b])`
/// - `a` -> `(1, [a])`
pub fn split_coefficient(term: &Expr) -> (Rational, Vec<Expr>) {
    match term {
        Expr::Mul(factors) => split_rational(factors),
        term => split_rational(std::slice::from_ref(term)),
    }
}

/// Returns the factors that represent the given rational number in canonical form: the numerator
/// (omitted if it is 1) followed by the reciprocal of the denominator (omitted if it is 1).
pub(crate) fn rational_factors(value: &Rational) -> Vec<Expr> {
    let (numerator, denominator) = (value.numer(), value.denom());
    match (*numerator == 1, *denominator == 1) {
        (true, true) => Vec::new(),
        (false, true) => vec![Expr::from(numerator.clone())],
        (true, false) => vec![Expr::from(denominator.clone()).pow(Expr::integer(-1))],
        (false, false) => match make_fraction(
            Expr::from(numerator.clone()),
            Expr::from(denominator.clone()),
        ) {
            Expr::Mul(factors) => factors,
            other => vec![other],
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn split_mixed() {
        let x = Expr::symbol("x");
        let term = Expr::Mul(vec![
            Expr::integer(2),
            x.clone(),
            Expr::integer(3).pow(Expr::integer(-1)),
        ]);
        let (coeff, rest) = split_coefficient(&term);
        assert_eq!(coeff, rational((2, 3)));
        assert_eq!(rest, vec![x]);
    }

    #[test]
    fn split_constant() {
        let (coeff, rest) = split_coefficient(&Expr::integer(-7));
        assert_eq!(coeff, rational(-7));
        assert!(rest.is_empty());
    }

    #[test]
    fn zero_denominator_is_not_numeric() {
        let term = Expr::integer(0).pow(Expr::integer(-1));
        assert!(!is_numeric(&term));
        let (coeff, rest) = split_coefficient(&term);
        assert_eq!(coeff, rational(1));
        assert_eq!(rest, vec![term]);
    }

    #[test]
    fn canonical_factors() {
        assert_eq!(rational_factors(&rational(1)), Vec::<Expr>::new());
        assert_eq!(rational_factors(&rational(-3)), vec![Expr::integer(-3)]);
        assert_eq!(
            rational_factors(&rational((1, 4))),
            vec![Expr::integer(4).pow(Expr::integer(-1))],
        );
        assert_eq!(
            rational_factors(&rational((-6, 4))),
            vec![Expr::integer(-3), Expr::integer(2).pow(Expr::integer(-1))],
        );
    }

    #[test]
    fn fraction_shape() {
        assert_eq!(
            make_fraction(Expr::integer(1), Expr::integer(2)),
            Expr::Mul(vec![Expr::integer(1), Expr::integer(2).pow(Expr::integer(-1))]),
        );
    }
}
