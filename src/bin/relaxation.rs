//! Relax the parallel-plate Laplace problem and stream gnuplot frames to
//! standard output.
//!
//! Takes no arguments. Pipe the output into gnuplot to render `anim.gif`.

use std::io::{self, Write};
use std::process::ExitCode;

use fdrelax::relaxation::{RelaxationParameters, RelaxationSolver, UpdateScheme};
use fdrelax::types::Result;

fn run() -> Result<()> {
    let parameters = RelaxationParameters::<f64>::default();
    let mut solver = RelaxationSolver::new(parameters, UpdateScheme::GaussSeidel)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    solver.run(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("relaxation: {}", e);
            ExitCode::FAILURE
        }
    }
}
