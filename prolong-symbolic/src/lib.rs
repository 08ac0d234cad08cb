//! Symbolic expressions for prolongation computations.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Expr`] nodes that **flatten** out nested sums and
//! products. For example, `x + (y + z)` is a single [`Expr::Add`] node with _three_ children. This
//! makes it much easier to combine "like terms" (e.g. `x + x = 2x`), since the terms in question
//! are all at the same level in the tree.
//!
//! The leaves of the tree are [`Primary`] values: integers, symbols (independent variables such as
//! `x` or `t`), and function calls (dependent variables such as `u(x, t)` and the undetermined
//! coefficients of a vector field). A function call records the derivatives that have been taken
//! of it, so `u_xt(x, t)` is a [`Call`] named `u` with derivatives `["x", "t"]`.
//!
//! ```
//! use prolong_symbolic::{Call, Expr};
//!
//! let u = Call::new("u", vec![Expr::symbol("x"), Expr::symbol("t")]);
//! let u_x = Expr::from(u.differentiate("x"));
//! let expr = Expr::integer(2) * u_x.clone() + u_x;
//! assert_eq!(expr.to_string(), "2 * u_x(x, t) + u_x(x, t)");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] brings an expression into an expanded, canonical sum of products: sums are
//! distributed out of products, like terms and factors are combined, numerical coefficients are
//! reduced, and terms and factors are sorted into a canonical order.
//!
//! ```
//! use prolong_symbolic::{simplify, Expr};
//!
//! let x = Expr::symbol("x");
//! let expr = (x.clone() + Expr::integer(1)).pow(Expr::integer(2)) - x.clone() * x;
//! assert_eq!(simplify(&expr).to_string(), "1 + 2 * x");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod expr;
pub mod primitive;
pub mod simplify;
pub mod step_collector;

pub use expr::{Call, Expr, Primary};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
