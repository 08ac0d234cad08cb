//! The total derivative operator, `D(expr, x)`.
//!
//! Dependent variables and coefficient functions are [`Call`]s. Differentiating a call applies the
//! chain rule over its arguments: every argument that is the independent variable itself
//! contributes the partial derivative with respect to it, and every argument that is itself a
//! function contributes the partial derivative with respect to that function, multiplied by the
//! total derivative of the function. The result is written with [`Call::derivatives`] instead of
//! unevaluated derivative nodes, so `D(xi^x(x, t, u(x, t)), x)` is
//! `xi^x_x(x, t, u(x, t)) + xi^x_u(x, t, u(x, t)) * u_x(x, t)`.

use crate::error::unsupported;
use prolong_error::Error;
use prolong_symbolic::{primitive::int, Call, Expr, Primary};

/// Something that is trivially zero. Intended to keep derivative trees small, not to be
/// mathematically rigorous.
fn is_trivially_zero(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Integer(i)) => i.is_zero(),
        Expr::Add(terms) => terms.iter().all(is_trivially_zero),
        Expr::Mul(factors) => factors.iter().any(is_trivially_zero),
        _ => false,
    }
}

/// Something that is trivially one. Intended to keep derivative trees small, not to be
/// mathematically rigorous.
fn is_trivially_unity(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Integer(i)) => *i == 1,
        Expr::Mul(factors) => factors.iter().all(is_trivially_unity),
        Expr::Exp(base, exp) => is_trivially_zero(exp) || is_trivially_unity(base),
        _ => false,
    }
}

/// Collects the factors of a product, collapsing to zero as soon as a zero factor is added and
/// dropping factors of one.
#[derive(Default)]
struct MultBuilder(Vec<Expr>);

impl From<MultBuilder> for Expr {
    fn from(value: MultBuilder) -> Self {
        Expr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: Expr) {
        if self.is_zero() {
            return;
        }

        if is_trivially_zero(&e) {
            self.0 = vec![Expr::integer(0)];
            return;
        }

        if !is_trivially_unity(&e) {
            self.0.push(e)
        }
    }

    fn is_zero(&self) -> bool {
        self.0.first().is_some_and(is_trivially_zero)
    }
}

/// Collects the terms of a sum, dropping terms that are zero.
#[derive(Default)]
struct SumBuilder(Vec<Expr>);

impl From<SumBuilder> for Expr {
    fn from(value: SumBuilder) -> Self {
        Expr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: Expr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

fn sum_rule(terms: &[Expr], var: &str) -> Result<Expr, Error> {
    let mut sum = SumBuilder::default();
    for term in terms {
        sum.add(total_derivative(term, var)?);
    }
    Ok(sum.into())
}

fn product_rule(product: &[Expr], var: &str) -> Result<Expr, Error> {
    let mut outer_sum = SumBuilder::default();

    // f'*g*h + f*g'*h + f*g*h'
    for derivative_index in 0..product.len() {
        let derivative = total_derivative(&product[derivative_index], var)?;
        if is_trivially_zero(&derivative) {
            continue;
        }

        let mut inner_mult = MultBuilder::default();
        for (term_index, term) in product.iter().enumerate() {
            if derivative_index == term_index {
                inner_mult.mult(derivative.clone());
            } else {
                inner_mult.mult(term.clone());
            }
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// Applies the chain rule to a function call.
fn chain_rule(call: &Call, var: &str) -> Result<Expr, Error> {
    let mut sum = SumBuilder::default();
    for arg in &call.args {
        match arg {
            Expr::Primary(Primary::Integer(_)) => (),
            Expr::Primary(Primary::Symbol(sym)) => {
                if sym == var {
                    sum.add(call.differentiate(var).into());
                }
            },
            Expr::Primary(Primary::Call(inner)) => {
                let mut mult = MultBuilder::default();
                mult.mult(total_derivative(arg, var)?);
                if !mult.is_zero() {
                    mult.mult(call.differentiate(&inner.full_name()).into());
                }
                sum.add(mult.into());
            },
            _ => return Err(unsupported(
                "differentiate",
                "a function whose argument is not a variable or function",
                &Expr::from(call.clone()),
            )),
        }
    }
    Ok(sum.into())
}

/// Computes the total derivative of the expression with respect to the given independent
/// variable.
///
/// Every function call is treated as depending on the variable through its arguments (see the
/// [module-level documentation](self)). Powers are differentiated with the power rule, which
/// requires an integer exponent; any other exponent results in an
/// [`UnsupportedExpressionKind`](crate::error::UnsupportedExpressionKind) error.
///
/// No simplification is done beyond dropping trivial zero and unit factors.
pub fn total_derivative(expr: &Expr, var: &str) -> Result<Expr, Error> {
    if is_trivially_zero(expr) {
        return Ok(Expr::integer(0));
    }

    let derivative = match expr {
        Expr::Primary(Primary::Integer(_)) => Expr::integer(0),
        Expr::Primary(Primary::Symbol(sym)) => {
            if sym == var {
                Expr::integer(1)
            } else {
                Expr::integer(0)
            }
        },
        Expr::Primary(Primary::Call(call)) => chain_rule(call, var)?,
        Expr::Add(terms) => sum_rule(terms, var)?,
        Expr::Mul(factors) => product_rule(factors, var)?,
        Expr::Exp(base, exp) => match exp.as_integer() {
            // n * base^(n - 1) * D(base)
            Some(n) => {
                let mut mult = MultBuilder::default();
                mult.mult(total_derivative(base, var)?);
                if !mult.is_zero() {
                    mult.mult(Expr::from(n.clone()));
                    let reduced = int(n - 1);
                    if reduced == 1 {
                        mult.mult((**base).clone());
                    } else {
                        mult.mult((**base).clone().pow(Expr::from(reduced)));
                    }
                }
                mult.into()
            },
            None => return Err(unsupported(
                "differentiate",
                "a power with a non-integer exponent",
                expr,
            )),
        },
    };

    if is_trivially_zero(&derivative) {
        Ok(Expr::integer(0))
    } else {
        Ok(derivative)
    }
}
