//! The prolongation of a vector field to derivatives of the dependent variables.

use crate::{
    clean::clean,
    error::{dependent_out_of_range, empty_multi_index, independent_out_of_range},
    monomials::{self, Monomials},
    total_derivative::total_derivative,
};
use log::{debug, trace};
use prolong_error::Error;
use prolong_symbolic::{simplify, simplify_with, Call, Expr};

/// The infinitesimal generator of a one-parameter symmetry group of a system of PDEs, with
/// independent variables `x_1, ..., x_p` and dependent variables `u^1, ..., u^q`:
///
/// ```text
/// v = Σ_i xi^{x_i}(x, u) ∂/∂x_i + Σ_a phi^{u^a}(x, u) ∂/∂u^a
/// ```
///
/// The coefficient functions `xi` and `phi` are undetermined functions of every independent and
/// dependent variable. [`Prolongation::compute_vector_field_coefficient`] computes the coefficient
/// of the prolonged vector field for any derivative of a dependent variable, written in terms of
/// derivatives of `xi`, `phi`, and the dependent variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prolongation {
    /// The names of the independent variables, such as `x` and `t`.
    independent: Vec<String>,

    /// The dependent variables, each a function of every independent variable.
    dependent: Vec<Call>,

    /// The coefficient function of each independent variable.
    xi: Vec<Expr>,

    /// The coefficient function of each dependent variable.
    phi: Vec<Expr>,
}

impl Prolongation {
    /// Creates the vector field for the given independent and dependent variables.
    ///
    /// For an independent variable `x`, the coefficient function is named `xi^x`. For a dependent
    /// variable `u`, it is named `phi^u`.
    pub fn new<I, D>(independent: I, dependent: D) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let independent = independent.into_iter().map(Into::into).collect::<Vec<String>>();
        let symbols = independent.iter().map(Expr::symbol).collect::<Vec<_>>();
        let dependent = dependent.into_iter()
            .map(|name| Call::new(name, symbols.clone()))
            .collect::<Vec<_>>();

        let mut args = symbols;
        args.extend(dependent.iter().cloned().map(Expr::from));

        let xi = independent.iter()
            .map(|var| Expr::call(format!("xi^{}", var), args.clone()))
            .collect::<Vec<_>>();
        let phi = dependent.iter()
            .map(|var| Expr::call(format!("phi^{}", var.name), args.clone()))
            .collect::<Vec<_>>();

        debug!(
            "created vector field with {} independent and {} dependent variables",
            independent.len(),
            dependent.len(),
        );
        Self { independent, dependent, xi, phi }
    }

    /// Returns the names of the independent variables.
    pub fn independent(&self) -> &[String] {
        &self.independent
    }

    /// Returns the dependent variables.
    pub fn dependent(&self) -> &[Call] {
        &self.dependent
    }

    /// Returns the names of the dependent variables.
    pub fn dependent_names(&self) -> Vec<String> {
        self.dependent.iter().map(|call| call.name.clone()).collect()
    }

    /// Returns the coefficient function of the independent variable at the given index.
    pub fn xi(&self, index: usize) -> Option<&Expr> {
        self.xi.get(index)
    }

    /// Returns the coefficient function of the dependent variable at the given index.
    pub fn phi(&self, index: usize) -> Option<&Expr> {
        self.phi.get(index)
    }

    /// Returns the coefficient functions of every independent variable.
    pub fn xis(&self) -> &[Expr] {
        &self.xi
    }

    /// Returns the coefficient functions of every dependent variable.
    pub fn phis(&self) -> &[Expr] {
        &self.phi
    }

    /// Checks that the dependent index and every entry of the multi-index are in range.
    fn validate(&self, multi_index: &[usize], dependent: usize) -> Result<(), Error> {
        if dependent >= self.dependent.len() {
            return Err(dependent_out_of_range(multi_index, dependent, self.dependent.len()));
        }

        if let Some(position) = multi_index.iter().position(|&i| i >= self.independent.len()) {
            return Err(independent_out_of_range(
                multi_index,
                dependent,
                position,
                self.independent.len(),
            ));
        }

        Ok(())
    }

    /// Returns the derivative of the dependent variable at index `dependent`, taken with respect
    /// to each independent variable in the multi-index, in canonical form. For example, with
    /// independent variables `[x, t]`, the multi-index `[1, 0]` gives `u_xt(x, t)`.
    ///
    /// An empty multi-index returns the dependent variable itself.
    pub fn derivative(&self, dependent: usize, multi_index: &[usize]) -> Result<Expr, Error> {
        self.validate(multi_index, dependent)?;
        let derivative = multi_index.iter()
            .fold(self.dependent[dependent].clone(), |call, &i| {
                call.differentiate(&self.independent[i])
            });
        Ok(clean(&derivative.into()))
    }

    /// Computes the coefficient of the prolonged vector field for the derivative of the dependent
    /// variable at index `dependent` given by the multi-index.
    ///
    /// With `Q = phi - Σ_i xi^i * D_i(u)` the characteristic of the vector field, the coefficient
    /// for the multi-index `J = [j_1, ..., j_k]` is:
    ///
    /// ```text
    /// phi^J = D_J(Q) + Σ_i xi^i * D_i(u_J)
    /// ```
    ///
    /// The result is canonicalized and simplified. Nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexOutOfRange`](crate::error::IndexOutOfRange) error if `dependent` or any
    /// entry of the multi-index is out of range, and an
    /// [`EmptyMultiIndex`](crate::error::EmptyMultiIndex) error if the multi-index is empty.
    pub fn compute_vector_field_coefficient(
        &self,
        multi_index: &[usize],
        dependent: usize,
    ) -> Result<Expr, Error> {
        self.validate(multi_index, dependent)?;
        if multi_index.is_empty() {
            return Err(empty_multi_index(dependent));
        }

        let u = Expr::from(self.dependent[dependent].clone());
        let u_j = self.derivative(dependent, multi_index)?;
        debug!("computing coefficient for {}", u_j);

        let mut characteristic = self.phi[dependent].clone();
        for (var, xi) in self.independent.iter().zip(&self.xi) {
            characteristic = characteristic - xi.clone() * total_derivative(&u, var)?;
        }

        for &i in multi_index {
            let var = &self.independent[i];
            let mut steps = 0usize;
            characteristic = simplify_with(
                &clean(&total_derivative(&characteristic, var)?),
                &mut steps,
            );
            trace!(
                "differentiated characteristic by {}: {} terms after {} simplification steps",
                var,
                characteristic.term_count(),
                steps,
            );
        }

        let mut coefficient = characteristic;
        for (var, xi) in self.independent.iter().zip(&self.xi) {
            coefficient = coefficient + xi.clone() * total_derivative(&u_j, var)?;
        }
        let coefficient = simplify(&clean(&coefficient));

        debug!(
            "coefficient for {} has {} terms and {} nodes",
            u_j,
            coefficient.term_count(),
            coefficient.node_count(),
        );
        Ok(coefficient)
    }

    /// Groups the terms of the expression by their monomial in the dependent variables and their
    /// derivatives. See [`monomials::get_monomials`].
    pub fn get_monomials(&self, expr: &Expr) -> Result<Monomials, Error> {
        monomials::get_monomials(expr, &self.dependent_names())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::error::{EmptyMultiIndex, IndexOutOfRange};
    use super::*;

    /// Differentiates a coefficient function by the given argument names, in order.
    fn d(handle: &Expr, names: &[&str]) -> Expr {
        let call = names.iter()
            .fold(handle.as_call().unwrap().clone(), |call, name| call.differentiate(name));
        call.into()
    }

    fn heat() -> Prolongation {
        Prolongation::new(["x", "t"], ["u"])
    }

    #[test]
    fn coefficient_functions() {
        let p = heat();
        assert_eq!(p.xi(0).unwrap().to_string(), "xi^x(x, t, u(x, t))");
        assert_eq!(p.xi(1).unwrap().to_string(), "xi^t(x, t, u(x, t))");
        assert_eq!(p.phi(0).unwrap().to_string(), "phi^u(x, t, u(x, t))");
        assert_eq!(p.xi(2), None);
        assert_eq!(p.phi(1), None);
        assert_eq!(p.dependent_names(), vec!["u".to_string()]);
    }

    #[test]
    fn coefficient_function_nodes() {
        // x, t, then the arguments x and t of u, u itself, and xi^x
        assert_eq!(heat().xi(0).unwrap().node_count(), 6);
    }

    #[test]
    fn two_dependent_variables() {
        let p = Prolongation::new(["x", "t"], ["u", "v"]);
        let (xi, tau, phi_v) = (p.xi(0).unwrap(), p.xi(1).unwrap(), p.phi(1).unwrap());
        assert_eq!(xi.to_string(), "xi^x(x, t, u(x, t), v(x, t))");
        assert_eq!(p.phi(0).unwrap().to_string(), "phi^u(x, t, u(x, t), v(x, t))");

        let coefficient = p.compute_vector_field_coefficient(&[0], 1).unwrap();
        let monomials = p.get_monomials(&coefficient).unwrap();

        let mut keys = monomials.keys().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["", "u_x", "u_xv_t", "u_xv_x", "v_t", "v_tv_x", "v_x", "v_x^2"]);

        let minus = |expr: Expr| simplify(&-expr);
        assert_eq!(monomials.constant(), Some(&d(phi_v, &["x"])));
        assert_eq!(monomials.get("u_x"), Some(&d(phi_v, &["u"])));
        assert_eq!(
            monomials.get("v_x"),
            Some(&simplify(&(d(phi_v, &["v"]) - d(xi, &["x"])))),
        );
        assert_eq!(monomials.get("v_x^2"), Some(&minus(d(xi, &["v"]))));
        assert_eq!(monomials.get("u_xv_x"), Some(&minus(d(xi, &["u"]))));
        assert_eq!(monomials.get("v_t"), Some(&minus(d(tau, &["x"]))));
        assert_eq!(monomials.get("u_xv_t"), Some(&minus(d(tau, &["u"]))));
        assert_eq!(monomials.get("v_tv_x"), Some(&minus(d(tau, &["v"]))));

        assert_eq!(monomials.to_expr(), coefficient);
    }

    #[test]
    fn derivative_is_canonical() {
        let p = heat();
        assert_eq!(p.derivative(0, &[1, 0]).unwrap().to_string(), "u_xt(x, t)");
        assert_eq!(p.derivative(0, &[]).unwrap().to_string(), "u(x, t)");
    }

    #[test]
    fn first_order_coefficient() {
        let p = heat();
        let (xi, tau, phi) = (p.xi(0).unwrap(), p.xi(1).unwrap(), p.phi(0).unwrap());
        let u_x = p.derivative(0, &[0]).unwrap();
        let u_t = p.derivative(0, &[1]).unwrap();

        // phi_x + phi_u u_x - u_x (xi_x + xi_u u_x) - u_t (tau_x + tau_u u_x)
        let expected = d(phi, &["x"]) + d(phi, &["u"]) * u_x.clone()
            - u_x.clone() * (d(xi, &["x"]) + d(xi, &["u"]) * u_x.clone())
            - u_t * (d(tau, &["x"]) + d(tau, &["u"]) * u_x);

        let coefficient = p.compute_vector_field_coefficient(&[0], 0).unwrap();
        assert_eq!(coefficient, simplify(&expected));
    }

    #[test]
    fn mixed_coefficients_agree() {
        let p = heat();
        let xt = p.compute_vector_field_coefficient(&[0, 1], 0).unwrap();
        let tx = p.compute_vector_field_coefficient(&[1, 0], 0).unwrap();
        assert_eq!(xt, tx);
        assert!(simplify(&(xt - tx)).is_zero());
    }

    #[test]
    fn heat_equation_1d() {
        let p = heat();
        let (xi, tau, phi) = (p.xi(0).unwrap(), p.xi(1).unwrap(), p.phi(0).unwrap());
        let two = || Expr::integer(2);

        let determining = p.compute_vector_field_coefficient(&[1], 0).unwrap()
            - p.compute_vector_field_coefficient(&[0, 0], 0).unwrap();
        let u_t = p.derivative(0, &[1]).unwrap();
        let u_xx = p.derivative(0, &[0, 0]).unwrap();
        let monomials = p.get_monomials(&determining.substitute(&u_t, &u_xx)).unwrap();

        let expected = vec![
            ("", d(phi, &["t"]) - d(phi, &["x", "x"])),
            ("u_x", -(two() * d(phi, &["x", "u"])) - d(xi, &["t"]) + d(xi, &["x", "x"])),
            ("u_xx", -d(tau, &["t"]) + d(tau, &["x", "x"]) + two() * d(xi, &["x"])),
            ("u_x^3", d(xi, &["u", "u"])),
            ("u_x^2", -d(phi, &["u", "u"]) + two() * d(xi, &["x", "u"])),
            ("u_xt", two() * d(tau, &["x"])),
            ("u_x^2u_xx", d(tau, &["u", "u"])),
            ("u_xu_xt", two() * d(tau, &["u"])),
            ("u_xu_xx", two() * d(tau, &["x", "u"]) + two() * d(xi, &["u"])),
        ];

        assert_eq!(monomials.len(), expected.len());
        for (key, coefficient) in expected {
            assert_eq!(monomials.get(key), Some(&simplify(&coefficient)), "monomial {:?}", key);
        }
    }

    #[test]
    fn heat_equation_2d() {
        let p = Prolongation::new(["x", "y", "t"], ["u"]);
        let (xi, eta) = (p.xi(0).unwrap(), p.xi(1).unwrap());

        let determining = p.compute_vector_field_coefficient(&[2], 0).unwrap()
            - p.compute_vector_field_coefficient(&[0, 0], 0).unwrap()
            - p.compute_vector_field_coefficient(&[1, 1], 0).unwrap();
        let u_t = p.derivative(0, &[2]).unwrap();
        let laplacian = p.derivative(0, &[0, 0]).unwrap() + p.derivative(0, &[1, 1]).unwrap();
        let monomials = p.get_monomials(&determining.substitute(&u_t, &laplacian)).unwrap();

        assert_eq!(monomials.len(), 27);
        assert_eq!(
            monomials.get("u_xy"),
            Some(&simplify(&(Expr::integer(2) * d(xi, &["y"]) + Expr::integer(2) * d(eta, &["x"])))),
        );
        assert_eq!(monomials.get("u_xu_y^2"), Some(&d(xi, &["u", "u"])));
    }

    #[test]
    fn conservation() {
        let p = heat();
        let coefficient = p.compute_vector_field_coefficient(&[0, 0], 0).unwrap();
        let monomials = p.get_monomials(&coefficient).unwrap();
        assert_eq!(monomials.to_expr(), coefficient);
    }

    #[test]
    fn dependent_index_out_of_range() {
        let err = heat().compute_vector_field_coefficient(&[0], 5).unwrap_err();
        assert_eq!(err.downcast_ref::<IndexOutOfRange>(), Some(&IndexOutOfRange {
            what: "dependent variable",
            index: 5,
            len: 1,
        }));
    }

    #[test]
    fn independent_index_out_of_range() {
        let err = heat().compute_vector_field_coefficient(&[0, 2], 0).unwrap_err();
        assert_eq!(err.downcast_ref::<IndexOutOfRange>(), Some(&IndexOutOfRange {
            what: "independent variable",
            index: 2,
            len: 2,
        }));
        assert!(heat().derivative(0, &[3]).unwrap_err().is::<IndexOutOfRange>());
    }

    #[test]
    fn rejects_empty_multi_index() {
        let err = heat().compute_vector_field_coefficient(&[], 0).unwrap_err();
        assert!(err.is::<EmptyMultiIndex>());
    }
}
