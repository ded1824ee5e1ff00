//! Locates local extrema with golden section search and five-point bisection.
//!
//! # Usage
//!
//! ```text
//! cargo run --example extrema
//! ```
//!
//! The ellipse case maximizes `2x - y` on `x^2/4 + y^2/9 = 1` through the
//! parameterization `x = 2 cos t`, `y = 3 sin t`.

use std::error::Error;

use rootscan_solvers::optimization::{Config, Goal, Solution, bisection, golden_section};

fn parabola(x: f64) -> f64 {
    -(x - 3.0) * (x - 3.0) + 1.0
}

fn ellipse_objective(t: f64) -> f64 {
    4.0 * t.cos() - 3.0 * t.sin()
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::default();

    println!("f(x) = -(x - 3)^2 + 1 on [-20, 20]");
    let solution = golden_section::search(&parabola, [-20.0, 20.0], Goal::Maximum, &config, ())?;
    print_solution("golden section (max)", &solution);
    let solution = bisection::locate_unobserved(&parabola, [-20.0, 20.0], &config)?;
    print_solution("bisection", &solution);

    println!();
    println!("f(t) = 4 cos t - 3 sin t on [-5, 5]");
    let solution = golden_section::maximize_unobserved(&ellipse_objective, [-5.0, 5.0], &config)?;
    print_solution("golden section (max)", &solution);
    println!(
        "    at x = {:.8}, y = {:.8}",
        2.0 * solution.x.cos(),
        3.0 * solution.x.sin()
    );

    Ok(())
}

fn print_solution(label: &str, solution: &Solution) {
    println!(
        "  {label:<22} x = {:>12.8}  f(x) = {:>12.8}  iters = {}",
        solution.x, solution.value, solution.iters
    );
}
