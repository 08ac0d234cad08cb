//! Determining equations of the one-dimensional Cahn-Hilliard equation with a quartic free
//! energy:
//!
//! ```text
//! u_t = (4u^3 - 6u^2 + 2u - u_xx)_xx
//! ```
//!
//! The computation involves the fourth prolongation and takes noticeably longer than the heat
//! equation.

use log::info;
use prolong_core::{logging, output_to_latex, Error, LatexOptionsBuilder, Prolongation};
use prolong_symbolic::Expr;
use std::process::ExitCode;

fn run() -> Result<(), Error> {
    let p = Prolongation::new(["x", "t"], ["u"]);
    let n = Expr::integer;
    let u = p.derivative(0, &[])?;
    let u_x = p.derivative(0, &[0])?;
    let u_xx = p.derivative(0, &[0, 0])?;
    let u_xxxx = p.derivative(0, &[0, 0, 0, 0])?;
    let u_t = p.derivative(0, &[1])?;
    let phi = p.phis()[0].clone();

    let phi_t = p.compute_vector_field_coefficient(&[1], 0)?;
    let phi_x = p.compute_vector_field_coefficient(&[0], 0)?;
    let phi_xx = p.compute_vector_field_coefficient(&[0, 0], 0)?;
    let phi_xxxx = p.compute_vector_field_coefficient(&[0, 0, 0, 0], 0)?;
    info!("computed prolongation up to fourth order");

    // the linearized equation, acting on the coefficients of the prolonged vector field
    let determining = phi_t
        - phi * (n(24) * u_x.clone().pow(n(2)) + n(24) * u.clone() * u_xx.clone() - n(12) * u_xx.clone())
        - phi_x * (n(48) * u.clone() * u_x.clone() - n(24) * u_x.clone())
        - phi_xx * (n(12) * u.clone().pow(n(2)) - n(12) * u.clone() + n(2))
        + phi_xxxx;

    let rhs = n(24) * u.clone() * u_x.clone().pow(n(2))
        + n(12) * u.clone().pow(n(2)) * u_xx.clone()
        - n(12) * u_x.pow(n(2))
        - n(12) * u * u_xx.clone()
        + n(2) * u_xx
        - u_xxxx;
    let determining = determining.substitute(&u_t, &rhs);

    let monomials = p.get_monomials(&determining)?;
    info!("Cahn-Hilliard equation: {} determining equations", monomials.len());

    let options = LatexOptionsBuilder::new()
        .caption("Determining equations of the Cahn-Hilliard equation")
        .label("tab:cahn_hilliard")
        .build();
    println!("{}", output_to_latex(&monomials, &options));
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.report_to_stderr().is_err() {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        },
    }
}
