//! Brackets and refines every root of two sample functions.
//!
//! # Usage
//!
//! ```text
//! cargo run --example all_roots
//! cargo run --example all_roots -- secant
//! cargo run --example all_roots -- muller 1e-8
//! ```
//!
//! With no method argument both methods run. The optional second argument
//! overrides the squared-residual tolerance (default `1e-4`).

use std::error::Error;

use rootscan_solvers::equation::{
    Config,
    bracket::find_brackets,
    scan::{Method, RootScan, all_roots_unobserved},
};

const LOW: i64 = -20;
const HIGH: i64 = 20;

fn quartic(x: f64) -> f64 {
    x.powi(4) + x.powi(3) - 2.0 * x * x + x - 6.0
}

fn sin_3x(x: f64) -> f64 {
    (3.0 * x).sin()
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    let methods = match args.next() {
        Some(method) => vec![method.parse::<Method>()?],
        None => vec![Method::Secant, Method::Muller],
    };
    let config = match args.next() {
        Some(epsilon) => Config::new(Config::default().max_iters(), epsilon.parse()?)?,
        None => Config::default(),
    };

    let functions: [(&str, fn(f64) -> f64); 2] = [
        ("x^4 + x^3 - 2x^2 + x - 6", quartic),
        ("sin(3x)", sin_3x),
    ];

    for (name, f) in functions {
        let brackets: Vec<_> = find_brackets(&f, LOW, HIGH)
            .iter()
            .map(|bracket| bracket.lo())
            .collect();
        println!("f(x) = {name} on [{LOW}, {HIGH}]");
        println!("  brackets: {brackets:?}");

        for &method in &methods {
            print_scan(method, &all_roots_unobserved(&f, LOW, HIGH, method, &config));
        }
        println!();
    }

    Ok(())
}

fn print_scan(method: Method, scan: &RootScan) {
    println!("  {method}:");
    for outcome in scan.outcomes() {
        let lo = outcome.bracket.lo();
        match &outcome.result {
            Ok(solution) => println!(
                "    [{lo:>3}, {:>3}]  x = {:>12.8}  f(x) = {:>10.3e}  iters = {}",
                outcome.bracket.hi(),
                solution.x,
                solution.residual,
                solution.iters,
            ),
            Err(error) => println!("    [{lo:>3}, {:>3}]  {error}", outcome.bracket.hi()),
        }
    }
}
