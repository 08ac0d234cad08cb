use std::cmp::Ordering;
use super::{cmp_slices, Expr, Primary};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named function applied to a list of arguments, such as `u(x, t)` or `xi^x(x, t, u(x, t))`,
/// possibly differentiated with respect to some of its arguments.
///
/// Derivatives are stored as a list of argument names, in the order the differentiations were
/// performed. For example, the second derivative of `u(x, t)` with respect to `x` and then `t` is
/// a [`Call`] named `u` with derivatives `["x", "t"]`, rendered as `u_xt(x, t)`.
///
/// The name of an argument is the name of the symbol if the argument is a [`Primary::Symbol`], or
/// the [full name](Call::full_name) of the call if the argument is a [`Primary::Call`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The base name of the function, such as `u` or `xi^x`.
    pub name: String,

    /// The names of the arguments the function has been differentiated by, in order.
    pub derivatives: Vec<String>,

    /// The arguments to the function.
    pub args: Vec<Expr>,
}

impl Call {
    /// Creates a new, undifferentiated function call.
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self { name: name.into(), derivatives: Vec::new(), args }
    }

    /// Returns the name of the function with its derivative subscripts, such as `u_xt`.
    ///
    /// If the function has not been differentiated, this is the same as [`Call::name`].
    pub fn full_name(&self) -> String {
        if self.derivatives.is_empty() {
            self.name.clone()
        } else {
            format!("{}_{}", self.name, self.derivatives.concat())
        }
    }

    /// Returns a copy of this call, differentiated once more by the argument with the given name.
    ///
    /// No check is made that an argument with the given name exists.
    pub fn differentiate(&self, arg_name: &str) -> Self {
        let mut derivatives = self.derivatives.clone();
        derivatives.push(arg_name.to_string());
        Self {
            name: self.name.clone(),
            derivatives,
            args: self.args.clone(),
        }
    }

    /// Returns the name of each argument, or [`None`] for arguments that are neither symbols nor
    /// function calls.
    pub fn arg_names(&self) -> impl Iterator<Item = Option<String>> + '_ {
        self.args.iter().map(|arg| match arg {
            Expr::Primary(Primary::Symbol(sym)) => Some(sym.clone()),
            Expr::Primary(Primary::Call(call)) => Some(call.full_name()),
            _ => None,
        })
    }

    /// Returns the position of the argument with the given name.
    pub fn arg_position(&self, arg_name: &str) -> Option<usize> {
        self.arg_names().position(|name| name.as_deref() == Some(arg_name))
    }

    /// Compares two calls by name, then derivatives, then arguments.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
            .then_with(|| self.derivatives.cmp(&other.derivatives))
            .then_with(|| cmp_slices(&self.args, &other.args))
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.full_name())?;
        let mut iter = self.args.iter();
        if let Some(arg) = iter.next() {
            write!(f, "{}", arg)?;
            for arg in iter {
                write!(f, ", {}", arg)?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn u() -> Call {
        Call::new("u", vec![Expr::symbol("x"), Expr::symbol("t")])
    }

    #[test]
    fn full_name() {
        assert_eq!(u().full_name(), "u");
        assert_eq!(u().differentiate("x").differentiate("t").full_name(), "u_xt");
    }

    #[test]
    fn multi_character_names() {
        let c = Call::new("c", vec![Expr::symbol("x1"), Expr::symbol("x2")])
            .differentiate("x2")
            .differentiate("x1");
        assert_eq!(c.derivatives, vec!["x2".to_string(), "x1".to_string()]);
        assert_eq!(c.full_name(), "c_x2x1");
    }

    #[test]
    fn arg_position_of_call() {
        let xi = Call::new("xi^x", vec![
            Expr::symbol("x"),
            Expr::symbol("t"),
            Expr::Primary(Primary::Call(u())),
        ]);
        assert_eq!(xi.arg_position("t"), Some(1));
        assert_eq!(xi.arg_position("u"), Some(2));
        assert_eq!(xi.arg_position("y"), None);
    }

    #[test]
    fn fmt_call() {
        assert_eq!(u().differentiate("x").to_string(), "u_x(x, t)");
    }
}
