//! Prolongations of vector fields, for finding the Lie point symmetries of partial differential
//! equations.
//!
//! A one-parameter group of point transformations of the independent variables `x` and dependent
//! variables `u` is generated by a vector field with undetermined coefficient functions `xi^x`
//! and `phi^u`. The group is a symmetry of a PDE when the **prolongation** of the vector field,
//! which also acts on the derivatives of `u`, annihilates the PDE on its solutions.
//! [`Prolongation`] computes the coefficients of the prolonged vector field, and
//! [`get_monomials`] splits the resulting expression into the **determining equations**: one
//! coefficient for every monomial in the derivatives of `u`, each of which must vanish.
//!
//! ```
//! use prolong_core::Prolongation;
//!
//! // the heat equation, u_t = u_xx
//! let p = Prolongation::new(["x", "t"], ["u"]);
//! let determining = p.compute_vector_field_coefficient(&[1], 0)?
//!     - p.compute_vector_field_coefficient(&[0, 0], 0)?;
//! let u_t = p.derivative(0, &[1])?;
//! let u_xx = p.derivative(0, &[0, 0])?;
//!
//! let monomials = p.get_monomials(&determining.substitute(&u_t, &u_xx))?;
//! assert_eq!(monomials.len(), 9);
//! assert_eq!(monomials.get("u_xt").unwrap().to_string(), "2 * xi^t_x(x, t, u(x, t))");
//! # Ok::<(), prolong_core::Error>(())
//! ```
//!
//! Every fallible operation returns a [`prolong_error::Error`], which can be printed as a report
//! pointing at the offending expression or index with [`Error::report_to_stderr`].

pub mod clean;
pub mod error;
pub mod latex;
pub mod logging;
pub mod monomials;
pub mod prolongation;
pub mod total_derivative;

pub use clean::clean;
pub use latex::{expr_to_latex, output_to_latex, LatexOptions, LatexOptionsBuilder};
pub use monomials::{get_monomials, Monomial, Monomials};
pub use prolong_error::Error;
pub use prolongation::Prolongation;
pub use total_derivative::total_derivative;
