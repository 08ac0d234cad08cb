//! Classification of an expanded expression into monomials in the dependent variables.
//!
//! After simplification, an expression is a sum of products. Every factor of a product is either
//! part of a **monomial** (a dependent variable or one of its derivatives, possibly raised to a
//! power), or part of the **coefficient** of that monomial (numbers, independent variables, and
//! any other function, such as the coefficient functions of a vector field). Terms with the same
//! monomial are grouped, and their coefficients are added together.
//!
//! Each monomial is identified by a key: the rendered names of its factors, with a `^n` suffix for
//! powers, sorted and concatenated. For example, `u_x(x, t)^2 * u_xx(x, t)` has the key
//! `u_x^2u_xx`. Terms with no monomial factors are grouped under the empty key.

use crate::error::unsupported;
use log::debug;
use prolong_error::Error;
use prolong_symbolic::{simplify, Call, Expr, Primary};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monomial in the dependent variables, along with its accumulated coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    /// The key identifying the monomial, such as `u_xu_xt`. The constant monomial has the empty
    /// key.
    pub key: String,

    /// The product of the monomial's factors, such as `u_x(x, t) * u_xt(x, t)`. The constant
    /// monomial is the integer 1.
    pub factors: Expr,

    /// The simplified sum of the coefficients of every term with this monomial.
    pub coefficient: Expr,
}

/// An insertion-ordered mapping from monomial keys to [`Monomial`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomials {
    entries: Vec<Monomial>,
    index: HashMap<String, usize>,
}

impl Monomials {
    /// Returns the coefficient of the monomial with the given key.
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entry(key).map(|monomial| &monomial.coefficient)
    }

    /// Returns the monomial with the given key.
    pub fn entry(&self, key: &str) -> Option<&Monomial> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Returns true if there is a monomial with the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the keys of the monomials, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|monomial| monomial.key.as_str())
    }

    /// Returns the monomials, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Monomial> {
        self.entries.iter()
    }

    /// Returns the number of monomials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no monomials.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the coefficient of the constant monomial, i.e. the sum of every term that contains
    /// no dependent variable.
    pub fn constant(&self) -> Option<&Expr> {
        self.get("")
    }

    /// Rebuilds the simplified expression that these monomials were classified from, as the sum of
    /// every monomial multiplied by its coefficient.
    pub fn to_expr(&self) -> Expr {
        let sum = self.entries.iter()
            .map(|monomial| monomial.factors.clone() * monomial.coefficient.clone())
            .fold(Expr::Add(Vec::new()), |acc, term| acc + term);
        simplify(&sum)
    }

    /// Adds a coefficient to the monomial with the given key, inserting the monomial if it does
    /// not exist yet.
    pub(crate) fn accumulate(&mut self, key: String, factors: Expr, coefficient: Expr) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].coefficient += coefficient,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Monomial { key, factors, coefficient });
            },
        }
    }
}

impl<'a> IntoIterator for &'a Monomials {
    type Item = &'a Monomial;
    type IntoIter = std::slice::Iter<'a, Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Monomials {
    type Item = Monomial;
    type IntoIter = std::vec::IntoIter<Monomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The split of a single term into its monomial and its coefficient.
struct Classified {
    /// Rendered monomial factors, paired with the factors themselves.
    parts: Vec<(String, Expr)>,

    /// Every other factor.
    coefficient: Vec<Expr>,
}

/// Returns the call if the expression is a call to one of the dependent variables.
fn dependent_call<'a>(expr: &'a Expr, dependent: &[String]) -> Option<&'a Call> {
    expr.as_call().filter(|call| dependent.contains(&call.name))
}

/// Splits the factors of a term into monomial factors and coefficient factors.
fn classify_term(term: &Expr, dependent: &[String]) -> Result<Classified, Error> {

    let factors = match term {
        Expr::Mul(factors) => factors.as_slice(),
        term => std::slice::from_ref(term),
    };

    let mut classified = Classified { parts: Vec::new(), coefficient: Vec::new() };
    for factor in factors {
        match factor {
            Expr::Primary(Primary::Call(_)) => match dependent_call(factor, dependent) {
                Some(call) => classified.parts.push((call.full_name(), factor.clone())),
                None => classified.coefficient.push(factor.clone()),
            },
            Expr::Primary(_) => classified.coefficient.push(factor.clone()),
            Expr::Exp(base, exp) => match dependent_call(base, dependent) {
                Some(call) => classified.parts
                    .push((format!("{}^{}", call.full_name(), exp), factor.clone())),
                None => classified.coefficient.push(factor.clone()),
            },
            Expr::Add(_) | Expr::Mul(_) => return Err(unsupported(
                "classify",
                "a nested sum or product",
                factor,
            )),
        }
    }

    classified.parts.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(classified)
}

/// Expands the expression and groups its terms by their monomial in the given dependent variables.
///
/// A function call is part of a monomial if its name (not including derivatives) is one of the
/// `dependent` names. The monomials are returned in the order their first term appears in the
/// simplified expression, and each coefficient is simplified.
pub fn get_monomials(expr: &Expr, dependent: &[String]) -> Result<Monomials, Error> {
    let simplified = simplify(expr);
    let terms: &[Expr] = match &simplified {
        Expr::Add(terms) => terms.as_slice(),
        term if term.is_zero() => &[],
        term => std::slice::from_ref(term),
    };

    let mut monomials = Monomials::default();
    for term in terms {
        let Classified { parts, coefficient } = classify_term(term, dependent)?;
        let key = parts.iter().map(|(name, _)| name.as_str()).collect::<String>();
        let factors = Expr::Mul(parts.into_iter().map(|(_, factor)| factor).collect()).downgrade();
        monomials.accumulate(key, factors, Expr::Mul(coefficient).downgrade());
    }

    for monomial in monomials.entries.iter_mut() {
        monomial.coefficient = simplify(&monomial.coefficient);
    }

    debug!(
        "classified {} terms into {} monomials",
        terms.len(),
        monomials.len(),
    );
    Ok(monomials)
}
