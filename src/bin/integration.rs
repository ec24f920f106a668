//! Compare composite quadrature rules against the closed-form integral of
//! sine.
//!
//! Usage: `integration <xmin> <xmax> <h>`. For step sizes from `h` halving
//! down to below 1e-8, prints one tab-separated line with the step size and
//! the relative error of the trapezoid rule, the Simpson rule, and the
//! Richardson extrapolation of each.

use std::process::ExitCode;

use fdrelax::quadrature::{richardson, CompositeRule, Simpson, Trapezoid};
use fdrelax::types::{Error, Result};

fn parse_args() -> Result<(f64, f64, f64)> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        return Err(Error::InvalidConfiguration(
            "expected three arguments: xmin xmax h".to_string(),
        ));
    }
    let mut values = [0.0f64; 3];
    for (value, arg) in values.iter_mut().zip(&args) {
        *value = arg
            .parse()
            .map_err(|_| Error::InvalidConfiguration(format!("not a number: {}", arg)))?;
    }
    let [xmin, xmax, h] = values;
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidConfiguration(
            "step size must be positive".to_string(),
        ));
    }
    if xmax <= xmin {
        return Err(Error::InvalidConfiguration(
            "xmax must be greater than xmin".to_string(),
        ));
    }
    Ok((xmin, xmax, h))
}

fn run() -> Result<()> {
    let (xmin, xmax, start) = parse_args()?;
    let exact = xmin.cos() - xmax.cos();

    let mut h = start;
    while h >= 1.0e-8 {
        let trapezoid = Trapezoid.estimate(xmin, xmax, h, &f64::sin);
        let simpson = Simpson.estimate(xmin, xmax, h, &f64::sin);
        let extrapolated_trapezoid = richardson(&Trapezoid, xmin, xmax, h, &f64::sin);
        let extrapolated_simpson = richardson(&Simpson, xmin, xmax, h, &f64::sin);
        println!(
            "{:e}\t{:e}\t{:e}\t{:e}\t{:e}",
            h,
            (1.0 - trapezoid / exact).abs(),
            (1.0 - simpson / exact).abs(),
            (1.0 - extrapolated_trapezoid / exact).abs(),
            (1.0 - extrapolated_simpson / exact).abs()
        );
        h /= 2.0;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("integration: {}", e);
            ExitCode::FAILURE
        }
    }
}
