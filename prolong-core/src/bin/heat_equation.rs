//! Determining equations of the heat equation in one and two spatial dimensions.

use log::info;
use prolong_core::{logging, output_to_latex, Error, LatexOptionsBuilder, Prolongation};
use std::process::ExitCode;

/// `u_t = u_xx`
fn heat_1d() -> Result<(), Error> {
    let p = Prolongation::new(["x", "t"], ["u"]);
    let phi_t = p.compute_vector_field_coefficient(&[1], 0)?;
    let phi_xx = p.compute_vector_field_coefficient(&[0, 0], 0)?;

    let u_t = p.derivative(0, &[1])?;
    let u_xx = p.derivative(0, &[0, 0])?;
    let determining = (phi_t - phi_xx).substitute(&u_t, &u_xx);

    let monomials = p.get_monomials(&determining)?;
    info!("1D heat equation: {} determining equations", monomials.len());
    for monomial in &monomials {
        println!("{:>12}: {}", monomial.key, monomial.coefficient);
    }

    let options = LatexOptionsBuilder::new()
        .caption("Determining equations of the 1D heat equation")
        .label("tab:heat_1d")
        .build();
    println!("{}", output_to_latex(&monomials, &options));
    Ok(())
}

/// `u_t = u_xx + u_yy`
fn heat_2d() -> Result<(), Error> {
    let p = Prolongation::new(["x", "y", "t"], ["u"]);
    let phi_t = p.compute_vector_field_coefficient(&[2], 0)?;
    let phi_xx = p.compute_vector_field_coefficient(&[0, 0], 0)?;
    let phi_yy = p.compute_vector_field_coefficient(&[1, 1], 0)?;

    let u_t = p.derivative(0, &[2])?;
    let laplacian = p.derivative(0, &[0, 0])? + p.derivative(0, &[1, 1])?;
    let determining = (phi_t - phi_xx - phi_yy).substitute(&u_t, &laplacian);

    let monomials = p.get_monomials(&determining)?;
    info!("2D heat equation: {} determining equations", monomials.len());

    let options = LatexOptionsBuilder::new()
        .caption("Determining equations of the 2D heat equation")
        .label("tab:heat_2d")
        .build();
    println!("{}", output_to_latex(&monomials, &options));
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logger();

    match heat_1d().and_then(|()| heat_2d()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.report_to_stderr().is_err() {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        },
    }
}
