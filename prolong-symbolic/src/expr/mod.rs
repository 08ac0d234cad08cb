//! A representation of mathematical expressions that is easy to manipulate algebraically.
//!
//! [`Expr`] is a recursive `enum` that flattens sums and products into a list of terms or factors,
//! so that an expression like `a + (b + c)` is a single [`Expr::Add`] node with three children.
//! All submodules in this crate that deal with symbolic manipulation use [`Expr`], and any
//! occurrences of the word `expression` refer to this type.
//!
//! # Strict equality
//!
//! Determining whether two expressions are mathematically equal is hard in general, because
//! there are infinitely many ways to write the same expression. Instead, we use a subset of
//! semantic equality, called **strict equality**. Two expressions are strictly equal if:
//!
//! - They are the same type of expression (i.e. both [`Expr::Primary`], both [`Expr::Add`], etc.).
//! - If both are [`Expr::Primary`], both expressions must have strictly equal values. For
//! [`Primary::Call`], this means equal names, equal derivative lists, and strictly equal
//! arguments in the same order.
//! - If both are [`Expr::Add`] or [`Expr::Mul`], both expressions must have strictly equal terms /
//! factors, in any order, with the same multiplicities.
//! - If both are [`Expr::Exp`], both expressions must have strictly equal base and exponent.
//!
//! Strict equality can never report false positives: if two expressions are strictly equal, they
//! are mathematically equal. The converse does not hold; `(x + 1)^2` and `x^2 + 2x + 1` are not
//! strictly equal. Simplifying both sides with [`simplify`](crate::simplify()) first brings
//! polynomials into a canonical form in which strict equality and mathematical equality agree.
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **strict equality**.
//!
//! # Canonical order
//!
//! [`Expr::canonical_cmp`] defines a total order over expressions, and [`Expr::sorted`] uses it
//! to sort the terms and factors of every sum and product in a tree. The simplifier returns
//! sorted trees, which makes its output deterministic.

mod call;
mod iter;

pub use call::Call;
pub use iter::ExprIter;

use crate::primitive::int;
use rug::Integer;
use std::{cmp::Ordering, ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single term / factor, such as a number, variable, or function call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An integer, such as `2` or `144`.
    Integer(Integer),

    /// A variable, such as `x` or `t`.
    Symbol(String),

    /// A function call, such as `u(x, t)` or `u_xx(x, t)`.
    Call(Call),
}

impl Primary {
    /// Rank of each kind of primary in the canonical order.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Symbol(_) => 1,
            Self::Call(_) => 2,
        }
    }

    /// Compares two primaries in canonical order: integers, then symbols, then calls.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.cmp(rhs),
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs.cmp(rhs),
            (Self::Call(lhs), Self::Call(rhs)) => lhs.canonical_cmp(rhs),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Sums two leaves. Two integers fold into their sum; any other pair becomes a two-term
/// [`Expr::Add`].
impl Add<Primary> for Primary {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                Expr::Primary(Primary::Integer(lhs + rhs))
            },
            (lhs, rhs) => Expr::Add(vec![
                Expr::Primary(lhs),
                Expr::Primary(rhs),
            ]),
        }
    }
}

/// Multiplies two leaves. Two integers fold into their product; any other pair becomes a
/// two-factor [`Expr::Mul`].
impl Mul<Primary> for Primary {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Primary::Integer(lhs), Primary::Integer(rhs)) => {
                Expr::Primary(Primary::Integer(lhs * rhs))
            },
            (lhs, rhs) => Expr::Mul(vec![
                Expr::Primary(lhs),
                Expr::Primary(rhs),
            ]),
        }
    }
}

/// A mathematical expression with information about its terms and factors.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// An expression raised to a power.
    Exp(Box<Expr>, Box<Expr>),
}

/// Writes a list of factors separated by ` * `, parenthesizing factors that bind less tightly
/// than multiplication.
fn fmt_factors(f: &mut std::fmt::Formatter<'_>, factors: &[Expr]) -> std::fmt::Result {
    let mut iter = factors.iter();
    if let Some(factor) = iter.next() {
        if factor.precedence() < 2 {
            write!(f, "({})", factor)?;
        } else {
            write!(f, "{}", factor)?;
        }
        for factor in iter {
            if factor.precedence() < 2 {
                write!(f, " * ({})", factor)?;
            } else {
                write!(f, " * {}", factor)?;
            }
        }
    }
    Ok(())
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        // fold a leading negative coefficient into the operator
                        match term {
                            Self::Primary(Primary::Integer(n)) if *n < 0 => {
                                write!(f, " - {}", n.clone().abs())?;
                            },
                            Self::Mul(factors) => match factors.first().and_then(Self::as_integer) {
                                Some(n) if *n == -1 => {
                                    write!(f, " - ")?;
                                    fmt_factors(f, &factors[1..])?;
                                },
                                Some(n) if *n < 0 => {
                                    write!(f, " - {} * ", n.clone().abs())?;
                                    fmt_factors(f, &factors[1..])?;
                                },
                                _ => write!(f, " + {}", term)?,
                            },
                            _ => write!(f, " + {}", term)?,
                        }
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => fmt_factors(f, factors),
            Self::Exp(base, exp) => {
                if base.precedence() <= 3 {
                    write!(f, "({})", base)?;
                } else {
                    write!(f, "{}", base)?;
                }
                write!(f, "^")?;
                if exp.precedence() <= 3 && !exp.is_integer() {
                    write!(f, "({})", exp)
                } else {
                    write!(f, "{}", exp)
                }
            },
        }
    }
}

/// Compares two slices of expressions element by element in canonical order, then by length.
pub(crate) fn cmp_slices(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
    for (lhs, rhs) in lhs.iter().zip(rhs) {
        match lhs.canonical_cmp(rhs) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    lhs.len().cmp(&rhs.len())
}

impl Expr {
    /// Creates an integer expression.
    pub fn integer<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Integer(int(n)))
    }

    /// Creates a symbol expression.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates an undifferentiated function call expression.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Primary(Primary::Call(Call::new(name, args)))
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exp: Expr) -> Self {
        Self::Exp(Box::new(self), Box::new(exp))
    }

    /// Returns the binding strength of the expression when printed. Primaries bind the tightest.
    fn precedence(&self) -> u8 {
        match self {
            Self::Primary(Primary::Integer(n)) if *n < 0 => 2,
            Self::Primary(_) => 4,
            Self::Add(_) => 1,
            Self::Mul(_) => 2,
            Self::Exp(..) => 3,
        }
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// Returns true if the expression is the integer 0.
    pub fn is_zero(&self) -> bool {
        self.as_integer().map(|n| n.is_zero()).unwrap_or(false)
    }

    /// Returns true if the expression is the integer 1.
    pub fn is_one(&self) -> bool {
        self.as_integer().map(|n| *n == 1).unwrap_or(false)
    }

    /// Returns true if the expression is a nonzero [`Primary::Integer`] raised to the power of -1.
    pub fn is_integer_recip(&self) -> bool {
        self.as_integer_recip().is_some()
    }

    /// If the expression is a nonzero [`Primary::Integer`] raised to the power of -1, returns a
    /// reference to the contained integer (the denominator of the fraction).
    pub fn as_integer_recip(&self) -> Option<&Integer> {
        if let Self::Exp(base, exp) = self {
            if exp.as_integer().map(|n| *n == -1).unwrap_or(false) {
                return base.as_integer().filter(|n| !n.is_zero());
            }
        }

        None
    }

    /// If the expression is a [`Primary::Call`], returns a reference to the contained call.
    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Self::Primary(Primary::Call(call)) => Some(call),
            _ => None,
        }
    }

    /// Collapses degenerate sums and products.
    ///
    /// An empty sum becomes `0`, an empty product becomes `1`, and a sum or product with a single
    /// child becomes that child. Everything else is returned unchanged.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::integer(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::integer(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first), including the arguments of function calls.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the expression tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the number of terms in the expression, treating anything other than an
    /// [`Expr::Add`] as a single term.
    pub fn term_count(&self) -> usize {
        match self {
            Self::Add(terms) => terms.len(),
            _ => 1,
        }
    }

    /// Replaces every subtree that is strictly equal to `target` with `replacement`. Sums and
    /// products are flattened if the replacement is itself a sum or product; no other
    /// simplification is done.
    pub fn substitute(&self, target: &Expr, replacement: &Expr) -> Self {
        if self == target {
            return replacement.clone();
        }

        match self {
            Self::Primary(Primary::Call(call)) => {
                let args = call.args.iter()
                    .map(|arg| arg.substitute(target, replacement))
                    .collect();
                Self::Primary(Primary::Call(Call { args, ..call.clone() }))
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => terms.iter()
                .map(|term| term.substitute(target, replacement))
                .fold(Self::Add(Vec::new()), |acc, term| acc + term),
            Self::Mul(factors) => factors.iter()
                .map(|factor| factor.substitute(target, replacement))
                .fold(Self::Mul(Vec::new()), |acc, factor| acc * factor),
            Self::Exp(base, exp) => Self::Exp(
                Box::new(base.substitute(target, replacement)),
                Box::new(exp.substitute(target, replacement)),
            ),
        }
    }

    /// Rank of each kind of expression in the canonical order.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Primary(_) => 0,
            Self::Exp(..) => 1,
            Self::Mul(_) => 2,
            Self::Add(_) => 3,
        }
    }

    /// Compares two expressions in canonical order.
    ///
    /// Primaries come first (see [`Primary::canonical_cmp`]), then powers, products, and sums.
    /// Powers compare by base, then exponent. Sums and products compare their children element by
    /// element, so this order only agrees with strict equality on [sorted](Expr::sorted) trees.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs.canonical_cmp(rhs),
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                cmp_slices(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base.canonical_cmp(rhs_base)
                    .then_with(|| lhs_exp.canonical_cmp(rhs_exp))
            },
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Sorts the terms and factors of every sum and product in the tree into canonical order.
    /// Function arguments keep their order.
    pub fn sorted(self) -> Self {
        match self {
            Self::Primary(Primary::Call(call)) => {
                let args = call.args.into_iter().map(Self::sorted).collect();
                Self::Primary(Primary::Call(Call { args, ..call }))
            },
            Self::Primary(_) => self,
            Self::Add(terms) => {
                let mut terms = terms.into_iter().map(Self::sorted).collect::<Vec<_>>();
                terms.sort_by(Self::canonical_cmp);
                Self::Add(terms)
            },
            Self::Mul(factors) => {
                let mut factors = factors.into_iter().map(Self::sorted).collect::<Vec<_>>();
                factors.sort_by(Self::canonical_cmp);
                Self::Mul(factors)
            },
            Self::Exp(base, exp) => Self::Exp(Box::new(base.sorted()), Box::new(exp.sorted())),
        }
    }
}

/// Returns true if both lists contain strictly equal expressions with the same multiplicities, in
/// any order.
fn multiset_eq(lhs: &[Expr], rhs: &[Expr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut matched = vec![false; rhs.len()];
    'outer: for lhs in lhs {
        for (i, rhs) in rhs.iter().enumerate() {
            if !matched[i] && lhs == rhs {
                matched[i] = true;
                continue 'outer;
            }
        }
        return false;
    }

    true
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                multiset_eq(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        Self::Primary(primary)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Primary(Primary::Call(call))
    }
}

impl From<Integer> for Expr {
    fn from(int: Integer) -> Self {
        Self::Primary(Primary::Integer(int))
    }
}

/// Builds the sum of two expressions. Sums on either side are spliced into a single list of terms
/// and two integers are folded; nothing else is simplified.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs + rhs,
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// In-place version of [`Add`], which appends to the term list of `self` when it is already a
/// sum.
impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Primary(Primary::Integer(lhs)), Self::Primary(Primary::Integer(rhs))) => {
                *lhs += rhs;
            },
            (Self::Add(terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
            },
            (Self::Add(terms), other) => {
                terms.push(other);
            },
            (lhs, rhs) => {
                let owned = std::mem::replace(lhs, Self::Add(Vec::new()));
                *lhs = owned + rhs;
            },
        }
    }
}

/// Subtracts two [`Expr`]s, as `lhs + -1 * rhs`. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs.neg()
    }
}

/// Builds the product of two expressions. Products on either side are spliced into a single list
/// of factors and two integers are folded; nothing else is simplified.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs * rhs,
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        match (self, rhs) {
            (Self::Primary(Primary::Integer(lhs)), Self::Primary(Primary::Integer(rhs))) => {
                *lhs *= rhs;
            },
            (Self::Mul(factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
            },
            (Self::Mul(factors), other) => {
                factors.push(other);
            },
            (lhs, rhs) => {
                let owned = std::mem::replace(lhs, Self::Mul(Vec::new()));
                *lhs = owned * rhs;
            },
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is an integer, in which case the number is negated. The `-1` factor is placed first.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Mul(mut factors) => {
                factors.insert(0, Self::integer(-1));
                Self::Mul(factors)
            },
            expr => Self::Mul(vec![Self::integer(-1), expr]),
        }
    }
}

/// NOTE: Strict equality ignores the order of terms and factors, but `pretty_assertions` does
/// not, so the diff of a failing test can be noisy when the orders differ.
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::symbol("x")
    }

    fn y() -> Expr {
        Expr::symbol("y")
    }

    fn u() -> Expr {
        Expr::call("u", vec![x(), Expr::symbol("t")])
    }

    #[test]
    fn flatten_on_add() {
        let expr = x() + (y() + Expr::integer(5));
        assert_eq!(expr, Expr::Add(vec![
            x(),
            y(),
            Expr::integer(5),
        ]));
    }

    #[test]
    fn strict_equality() {
        let a = Expr::integer(2) * (x() + (y() - Expr::integer(5)));
        let b = (y() - Expr::integer(5) + x()) * Expr::integer(2);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_2() {
        // semantically equal, but `b` is the expanded form of `a`
        let a = Expr::integer(2) * (x() + y());
        let b = Expr::integer(2) * x() + Expr::integer(2) * y();
        assert_ne!(a, b);
    }

    #[test]
    fn strict_equality_counts_multiplicity() {
        let a = Expr::Add(vec![x(), x(), y()]);
        let b = Expr::Add(vec![x(), y(), y()]);
        assert_ne!(a, b);
        assert_eq!(a, Expr::Add(vec![x(), y(), x()]));
    }

    #[test]
    fn call_args_are_ordered() {
        let a = Expr::call("f", vec![x(), y()]);
        let b = Expr::call("f", vec![y(), x()]);
        assert_ne!(a, b);
    }

    #[test]
    fn neg_integer() {
        assert_eq!(-Expr::integer(3), Expr::integer(-3));
        assert_eq!(-x(), Expr::Mul(vec![Expr::integer(-1), x()]));
    }

    #[test]
    fn add_assign_wraps() {
        let mut expr = x();
        expr += y();
        expr += Expr::integer(1);
        assert_eq!(expr, Expr::Add(vec![x(), y(), Expr::integer(1)]));

        let mut n = Expr::integer(2);
        n += Expr::integer(3);
        assert_eq!(n, Expr::integer(5));
    }

    #[test]
    fn mul_assign_wraps() {
        let mut expr = x();
        expr *= y();
        expr *= u();
        assert_eq!(expr, Expr::Mul(vec![x(), y(), u()]));
    }

    #[test]
    fn sorted_order() {
        let expr = Expr::Mul(vec![
            u().pow(Expr::integer(2)),
            u(),
            x(),
            Expr::integer(-3),
        ]).sorted();
        assert_eq!(expr.to_string(), "-3 * x * u(x, t) * u(x, t)^2");
    }

    #[test]
    fn canonical_cmp_agrees_with_strict_equality() {
        let a = (x() * y() + u()).sorted();
        let b = (u() + y() * x()).sorted();
        assert_eq!(a.canonical_cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn substitute_flattens() {
        let u_t = Call::new("u", vec![x(), Expr::symbol("t")]).differentiate("t");
        let u_xx = Call::new("u", vec![x(), Expr::symbol("t")])
            .differentiate("x")
            .differentiate("x");
        let expr = Expr::from(u_t.clone()) + x();
        let replaced = expr.substitute(&u_t.into(), &(Expr::from(u_xx.clone()) + y()));
        assert_eq!(replaced, Expr::Add(vec![u_xx.into(), y(), x()]));
    }

    #[test]
    fn substitute_inside_calls() {
        let f = Expr::call("f", vec![x(), u()]);
        let replaced = f.substitute(&x(), &y());
        assert_eq!(replaced, Expr::call("f", vec![y(), Expr::call("u", vec![y(), Expr::symbol("t")])]));
    }

    #[test]
    fn fmt_expr() {
        let expr = x() - Expr::integer(2) * y() - u().pow(Expr::integer(2)) + Expr::integer(-4);
        assert_eq!(expr.to_string(), "x - 2 * y - u(x, t)^2 - 4");
    }

    #[test]
    fn fmt_nested() {
        let expr = (x() + y()) * (x() + y()).pow(Expr::integer(-1));
        assert_eq!(expr.to_string(), "(x + y) * (x + y)^-1");
    }

    #[test]
    fn node_count() {
        // x, t, u(x, t), 2, u^2, x, the product
        let expr = u().pow(Expr::integer(2)) * x();
        assert_eq!(expr.node_count(), 7);
    }
}
