//! Rendering of monomials and their coefficients as a LaTeX table.

use crate::monomials::Monomials;
use prolong_symbolic::{simplify::fraction::split_coefficient, Call, Expr, Primary};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names that are rendered as LaTeX commands, such as `\xi`.
const GREEK: [&str; 23] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega",
];

/// Options for rendering LaTeX.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatexOptions {
    /// The caption of the table.
    pub caption: String,

    /// The label of the table, used to reference it with `\ref`.
    pub label: String,

    /// Whether to print the arguments of function calls, as in `\xi^{x}(x, t, u(x, t))`.
    ///
    /// Every coefficient function depends on the same arguments, so they are omitted by default.
    pub show_arguments: bool,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            caption: "Caption".to_string(),
            label: "tab:label".to_string(),
            show_arguments: false,
        }
    }
}

impl LatexOptions {
    /// Wraps the given [`LatexOptions`] into a builder for further customization.
    pub fn into_builder(self) -> LatexOptionsBuilder {
        LatexOptionsBuilder(self)
    }
}

/// A builder for [`LatexOptions`].
#[derive(Debug, Default, Clone)]
pub struct LatexOptionsBuilder(LatexOptions);

impl LatexOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caption of the table.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.0.caption = caption.into();
        self
    }

    /// Sets the label of the table.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.0.label = label.into();
        self
    }

    /// Sets whether to print the arguments of function calls. See
    /// [`LatexOptions::show_arguments`] for more information.
    pub fn show_arguments(mut self, show_arguments: bool) -> Self {
        self.0.show_arguments = show_arguments;
        self
    }

    /// Builds the [`LatexOptions`].
    pub fn build(self) -> LatexOptions {
        self.0
    }
}

fn name_to_latex(name: &str) -> String {
    if GREEK.contains(&name) {
        format!("\\{}", name)
    } else {
        name.to_string()
    }
}

/// Renders a call as `base_{derivatives}^{superscript}`, where the superscript is the part of the
/// name after a `^`, if any.
fn call_to_latex(call: &Call, options: &LatexOptions) -> String {
    let (base, sup) = match call.name.split_once('^') {
        Some((base, sup)) => (base, Some(sup)),
        None => (call.name.as_str(), None),
    };

    let mut out = name_to_latex(base);
    if !call.derivatives.is_empty() {
        out.push_str(&format!("_{{{}}}", call.derivatives.concat()));
    }
    if let Some(sup) = sup {
        out.push_str(&format!("^{{{}}}", name_to_latex(sup)));
    }

    if options.show_arguments && !call.args.is_empty() {
        let args = call.args.iter()
            .map(|arg| expr_to_latex(arg, options))
            .collect::<Vec<_>>();
        out.push_str(&format!("({})", args.join(", ")));
    }
    out
}

fn primary_to_latex(primary: &Primary, options: &LatexOptions) -> String {
    match primary {
        Primary::Integer(n) => n.to_string(),
        Primary::Symbol(sym) => name_to_latex(sym),
        Primary::Call(call) => call_to_latex(call, options),
    }
}

/// Renders a factor of a product, parenthesizing sums and products.
fn factor_to_latex(factor: &Expr, options: &LatexOptions) -> String {
    match factor {
        Expr::Primary(primary) => primary_to_latex(primary, options),
        Expr::Add(_) | Expr::Mul(_) => {
            format!("\\left({}\\right)", expr_to_latex(factor, options))
        },
        Expr::Exp(base, exp) => {
            let base = match &**base {
                // avoid a double superscript on names like `xi^x`
                Expr::Primary(Primary::Call(call)) if call.name.contains('^') => {
                    format!("{{{}}}", call_to_latex(call, options))
                },
                Expr::Primary(Primary::Integer(n)) if *n < 0 => format!("\\left({}\\right)", n),
                Expr::Primary(primary) => primary_to_latex(primary, options),
                base => format!("\\left({}\\right)", expr_to_latex(base, options)),
            };
            format!("{}^{{{}}}", base, expr_to_latex(exp, options))
        },
    }
}

/// Renders a term without its sign, returning whether the term is negative.
fn term_to_latex(term: &Expr, options: &LatexOptions) -> (bool, String) {
    let (coeff, rest) = split_coefficient(term);
    let negative = coeff < 0;
    let coeff = coeff.abs();

    let mut parts = Vec::new();
    if *coeff.denom() != 1 {
        parts.push(format!("\\frac{{{}}}{{{}}}", coeff.numer(), coeff.denom()));
    } else if *coeff.numer() != 1 || rest.is_empty() {
        parts.push(coeff.numer().to_string());
    }
    parts.extend(rest.iter().map(|factor| factor_to_latex(factor, options)));

    (negative, parts.join(" "))
}

/// Renders the expression as LaTeX, for use in math mode.
///
/// Sums are written with their signs merged (`a - 2 b` rather than `a + -2 b`), numerical
/// coefficients are written as fractions, and the coefficient functions `xi^x` and `phi^u` are
/// written as `\xi^{x}` and `\phi^{u}`, with their derivatives as a subscript.
pub fn expr_to_latex(expr: &Expr, options: &LatexOptions) -> String {
    let terms = match expr {
        Expr::Add(terms) => terms.as_slice(),
        expr => std::slice::from_ref(expr),
    };

    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        let (negative, body) = term_to_latex(term, options);
        match (i, negative) {
            (0, false) => (),
            (0, true) => out.push('-'),
            (_, false) => out.push_str(" + "),
            (_, true) => out.push_str(" - "),
        }
        out.push_str(&body);
    }
    out
}

/// Renders the monomials as a two-column LaTeX table, with one row per monomial in insertion
/// order. The constant monomial, if present, is written as `1` in the last row.
pub fn output_to_latex(monomials: &Monomials, options: &LatexOptions) -> String {
    let mut out = String::from(
        "\\begin{table}[]\n    \\centering\n    \\begin{tabular}{c|c}\n        monomial & coefficient \\\\\n        \\hline\n",
    );

    let row = |monomial: &str, coefficient: &Expr| {
        format!(
            "        ${}$ & ${}$ \\\\\n",
            monomial,
            expr_to_latex(coefficient, options),
        )
    };

    for monomial in monomials.iter().filter(|monomial| !monomial.key.is_empty()) {
        out.push_str(&row(&expr_to_latex(&monomial.factors, options), &monomial.coefficient));
    }
    if let Some(constant) = monomials.constant() {
        out.push_str(&row("1", constant));
    }

    out.push_str(&format!(
        "    \\end{{tabular}}\n    \\caption{{{}}}\n    \\label{{{}}}\n\\end{{table}}",
        options.caption,
        options.label,
    ));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn u() -> Call {
        Call::new("u", vec![Expr::symbol("x"), Expr::symbol("t")])
    }

    fn coefficient_function(name: &str) -> Call {
        Call::new(name, vec![Expr::symbol("x"), Expr::symbol("t"), u().into()])
    }

    #[test]
    fn coefficient_functions() {
        let options = LatexOptions::default();
        let xi_xu = coefficient_function("xi^x").differentiate("x").differentiate("u");
        assert_eq!(expr_to_latex(&xi_xu.into(), &options), "\\xi_{xu}^{x}");
        assert_eq!(expr_to_latex(&coefficient_function("phi^u").into(), &options), "\\phi^{u}");
    }

    #[test]
    fn show_arguments() {
        let options = LatexOptionsBuilder::new().show_arguments(true).build();
        assert_eq!(
            expr_to_latex(&coefficient_function("xi^t").into(), &options),
            "\\xi^{t}(x, t, u(x, t))",
        );
    }

    #[test]
    fn signs_and_fractions() {
        let options = LatexOptions::default();
        let x = Expr::symbol("x");
        let expr = Expr::Add(vec![
            Expr::Mul(vec![Expr::integer(-1), Expr::integer(2).pow(Expr::integer(-1)), x.clone()]),
            Expr::Mul(vec![Expr::integer(3), Expr::integer(4).pow(Expr::integer(-1)), x.clone()]),
            Expr::Mul(vec![Expr::integer(-5), u().differentiate("x").into()]),
            Expr::integer(7),
        ]);
        assert_eq!(
            expr_to_latex(&expr, &options),
            "-\\frac{1}{2} x + \\frac{3}{4} x - 5 u_{x} + 7",
        );
    }

    #[test]
    fn powers() {
        let options = LatexOptions::default();
        let xi = Expr::from(coefficient_function("xi^x"));
        let expr = Expr::Mul(vec![
            xi.pow(Expr::integer(2)),
            (Expr::symbol("x") + Expr::integer(1)).pow(Expr::integer(3)),
        ]);
        assert_eq!(
            expr_to_latex(&expr, &options),
            "{\\xi^{x}}^{2} \\left(x + 1\\right)^{3}",
        );
    }

    #[test]
    fn table() {
        let u_x = Expr::from(u().differentiate("x"));
        let phi = coefficient_function("phi^u");
        let xi_u = Expr::from(coefficient_function("xi^x").differentiate("u"));

        let mut monomials = Monomials::default();
        monomials.accumulate(
            String::new(),
            Expr::integer(1),
            Expr::from(phi.differentiate("t")) - Expr::from(phi.differentiate("x").differentiate("x")),
        );
        monomials.accumulate("u_x^2".to_string(), u_x.clone().pow(Expr::integer(2)), Expr::integer(8));
        monomials.accumulate("u_x".to_string(), u_x, Expr::integer(-2) * xi_u);

        let options = LatexOptionsBuilder::new()
            .caption("Heat equation")
            .label("tab:heat")
            .build();
        assert_eq!(output_to_latex(&monomials, &options), [
            "\\begin{table}[]",
            "    \\centering",
            "    \\begin{tabular}{c|c}",
            "        monomial & coefficient \\\\",
            "        \\hline",
            "        $u_{x}^{2}$ & $8$ \\\\",
            "        $u_{x}$ & $-2 \\xi_{u}^{x}$ \\\\",
            "        $1$ & $\\phi_{t}^{u} - \\phi_{xx}^{u}$ \\\\",
            "    \\end{tabular}",
            "    \\caption{Heat equation}",
            "    \\label{tab:heat}",
            "\\end{table}",
        ].join("\n"));
    }
}
