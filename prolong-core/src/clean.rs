//! Canonical ordering of derivative subscripts.
//!
//! Mixed partial derivatives commute, but [`total_derivative`](crate::total_derivative()) records
//! derivatives in the order they were taken, so `u_xt(x, t)` and `u_tx(x, t)` are different
//! calls. [`clean`] sorts the derivatives of every call by the position of the corresponding
//! argument, which makes both `u_xt(x, t)`.

use prolong_symbolic::{Call, Expr, Primary};

/// Sorts the derivatives of a single call into argument order. Derivatives with respect to names
/// that are not arguments of the call are kept at the end, in their original order.
fn clean_call(call: &Call) -> Call {
    let mut keyed = call.derivatives.iter()
        .map(|name| (call.arg_position(name).unwrap_or(usize::MAX), name.clone()))
        .collect::<Vec<_>>();
    keyed.sort_by_key(|(position, _)| *position);

    Call {
        name: call.name.clone(),
        derivatives: keyed.into_iter().map(|(_, name)| name).collect(),
        args: call.args.iter().map(clean).collect(),
    }
}

/// Returns the expression with the derivatives of every function call sorted into the order of
/// the call's arguments.
///
/// All other structure is left unchanged. Calls that have not been differentiated are returned
/// as-is, apart from their arguments being cleaned.
pub fn clean(expr: &Expr) -> Expr {
    match expr {
        Expr::Primary(Primary::Call(call)) => clean_call(call).into(),
        Expr::Primary(_) => expr.clone(),
        Expr::Add(terms) => Expr::Add(terms.iter().map(clean).collect()),
        Expr::Mul(factors) => Expr::Mul(factors.iter().map(clean).collect()),
        Expr::Exp(base, exp) => Expr::Exp(Box::new(clean(base)), Box::new(clean(exp))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn u() -> Call {
        Call::new("u", vec![Expr::symbol("x"), Expr::symbol("t")])
    }

    fn xi() -> Call {
        Call::new("xi^x", vec![Expr::symbol("x"), Expr::symbol("t"), u().into()])
    }

    #[test]
    fn mixed_partials_commute() {
        let xt = Expr::from(u().differentiate("x").differentiate("t"));
        let tx = Expr::from(u().differentiate("t").differentiate("x"));
        assert_ne!(xt, tx);
        assert_eq!(clean(&xt), clean(&tx));
        assert_eq!(clean(&tx).to_string(), "u_xt(x, t)");
    }

    #[test]
    fn sorts_by_argument_position() {
        let call = xi().differentiate("u").differentiate("t").differentiate("x").differentiate("u");
        let cleaned = clean(&call.into());
        assert_eq!(cleaned.as_call().unwrap().full_name(), "xi^x_xtuu");
    }

    #[test]
    fn undifferentiated_unchanged() {
        let expr = Expr::from(xi()) * Expr::from(u()).pow(Expr::integer(2));
        assert_eq!(clean(&expr), expr);
    }

    #[test]
    fn recurses_into_tree() {
        let tx = Expr::from(u().differentiate("t").differentiate("x"));
        let expr = Expr::integer(3) * tx.clone().pow(Expr::integer(2)) + Expr::symbol("x") + tx;
        assert_eq!(
            clean(&expr).to_string(),
            "3 * u_xt(x, t)^2 + x + u_xt(x, t)",
        );
    }

    #[test]
    fn unknown_names_last() {
        let call = u().differentiate("y").differentiate("t").differentiate("x");
        assert_eq!(clean(&call.into()).as_call().unwrap().full_name(), "u_xty");
    }

    #[test]
    fn idempotent() {
        let expr = Expr::from(xi().differentiate("u").differentiate("x"))
            * Expr::from(u().differentiate("t").differentiate("x").differentiate("x"));
        let once = clean(&expr);
        assert_eq!(clean(&once), once);
    }
}
