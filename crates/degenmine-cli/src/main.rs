//! `degenmine`: the CLI front-end over `degenmine-core` + `degenmine-io`.
//!
//! Ported from `main.cpp`'s `getopt_long` dispatch (spec.md §6): load a
//! graph, run the selected problem/algorithm, print labeled diagnostic
//! lines, validate the answer, and exit 1 with an `ERROR:` stderr line on
//! validator failure.

mod cli;
mod error;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Algo, Cli, Command, ConvertArgs, MineArgs, Program};
use degenmine_core::graph::{CsrGraph, VertexId};
use degenmine_core::{
    is_valid_kdef, is_valid_kplex, is_valid_pseudo_clique, is_valid_quasi_clique, naive_kdef,
    naive_kplex_degen, naive_pseudo_clique, naive_quasi_clique, prepare_degeneracy, refine_kdef,
    refine_kplex, refine_pseudo, refine_quasi,
};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = match &cli.command {
        Command::Mine(args) => args.verbose,
        Command::Convert(args) => args.verbose,
    };
    if verbose {
        init_tracing();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Mine(args) => run_mine(args),
        Command::Convert(args) => run_convert(args),
    }
}

fn run_mine(args: MineArgs) -> Result<(), CliError> {
    validate_params(&args)?;

    let g = degenmine_io::read_from_file(&args.graph)?;
    println!("[input graph] {g}");

    let start = Instant::now();
    let (label, solution, ub) = solve(&args, &g)?;
    let elapsed = start.elapsed();

    match ub {
        Some(ub) => println!("[[{label}]] Found {} of size {}\n    upper bound: {ub}", args.program, solution.len()),
        None => println!("[[{label}]] Found {} of size {}", args.program, solution.len()),
    }
    println!("[timer] {} microseconds", elapsed.as_micros());
    print!("[solution]");
    for v in &solution {
        print!(" {v}");
    }
    println!();

    if !validate(args.program, &g, &solution, args.k, args.alpha) {
        return Err(CliError::InvalidSolution { program: args.program });
    }
    Ok(())
}

fn validate_params(args: &MineArgs) -> Result<(), CliError> {
    match args.program {
        Program::Kplex | Program::Kdef => {
            let k = args.k.ok_or(CliError::MissingK { program: args.program })?;
            if k < 0 {
                return Err(CliError::NegativeK(k));
            }
        }
        Program::Quasi | Program::Pseudo => {
            let alpha = args.alpha.ok_or(CliError::MissingAlpha { program: args.program })?;
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(CliError::AlphaOutOfRange(alpha));
            }
        }
    }
    if args.program == Program::Kplex && args.algo == Algo::Naive {
        return Err(CliError::NaiveNotSupportedForKplex);
    }
    Ok(())
}

/// Returns `(diagnostic label, solution vertex ids, optional upper bound)`.
fn solve(args: &MineArgs, g: &CsrGraph) -> Result<(String, Vec<VertexId>, Option<i64>), CliError> {
    let two_hop = matches!(args.algo, Algo::Twohop);
    let seed_only = matches!(args.algo, Algo::V1 | Algo::Naive);

    Ok(match args.program {
        Program::Kplex => {
            let k = args.k.unwrap();
            if seed_only {
                let result = naive_kplex_degen(g, k);
                ("kplex::v1".to_string(), result.vertices, Some(result.ub))
            } else {
                let mut g2 = g.clone();
                let rank = prepare_degeneracy(&mut g2);
                let label = if two_hop { "kplex::twohop" } else { "kplex::v2" };
                let sol = refine_kplex(&g2, &rank, k, two_hop);
                let ub = naive_kplex_degen(g, k).ub;
                (label.to_string(), sol, Some(ub))
            }
        }
        Program::Kdef => {
            let k = args.k.unwrap();
            if seed_only {
                ("kdef::naive".to_string(), naive_kdef(g, k).vertices, None)
            } else {
                let mut g2 = g.clone();
                let rank = prepare_degeneracy(&mut g2);
                let label = if two_hop { "kdef::twohop" } else { "kdef::v2" };
                (label.to_string(), refine_kdef(&g2, &rank, k, two_hop), None)
            }
        }
        Program::Quasi => {
            let alpha = args.alpha.unwrap();
            if seed_only {
                ("quasi::naive".to_string(), naive_quasi_clique(g, alpha).vertices, None)
            } else {
                let mut g2 = g.clone();
                let rank = prepare_degeneracy(&mut g2);
                let label = if two_hop { "quasi::twohop" } else { "quasi::v2" };
                (label.to_string(), refine_quasi(&g2, &rank, alpha, two_hop), None)
            }
        }
        Program::Pseudo => {
            let alpha = args.alpha.unwrap();
            if seed_only {
                ("pseudo::naive".to_string(), naive_pseudo_clique(g, alpha).vertices, None)
            } else {
                let mut g2 = g.clone();
                let rank = prepare_degeneracy(&mut g2);
                let label = if two_hop { "pseudo::twohop" } else { "pseudo::v2" };
                (label.to_string(), refine_pseudo(&g2, &rank, alpha, two_hop), None)
            }
        }
    })
}

fn validate(program: Program, g: &CsrGraph, solution: &[VertexId], k: Option<i64>, alpha: Option<f64>) -> bool {
    match program {
        Program::Kplex => is_valid_kplex(g, solution, k.unwrap()),
        Program::Kdef => is_valid_kdef(g, solution, k.unwrap()),
        Program::Quasi => is_valid_quasi_clique(g, solution, alpha.unwrap()),
        Program::Pseudo => is_valid_pseudo_clique(g, solution, alpha.unwrap()),
    }
}

fn run_convert(args: ConvertArgs) -> Result<(), CliError> {
    let g = degenmine_io::read_from_file(&args.graph)?;
    println!("[input graph] {g}");
    let mut out = std::fs::File::create(&args.output).map_err(|e| CliError::Write {
        path: args.output.clone(),
        source: e,
    })?;
    degenmine_io::write_edge_list(&g, &mut out).map_err(|e| CliError::Write {
        path: args.output.clone(),
        source: e,
    })?;
    println!("[converted] wrote {}", args.output.display());
    Ok(())
}
