//! Fill a crossword structure from a word list and print the result.
//!
//! ```sh
//! generate data/structure1.txt data/words1.txt [output.png]
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossword_solver::{render, save, Error, Puzzle, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "generate", version, about = "Fill a crossword grid from a word list")]
struct Cli {
    /// Structure file: `_` marks a cell to fill, anything else is blocked.
    structure: PathBuf,

    /// Word list, one word per line.
    words: PathBuf,

    /// Where to save the filled grid as a PNG image.
    output: Option<PathBuf>,

    /// Search without re-establishing arc consistency after each guess.
    #[arg(long, default_value_t = false)]
    no_inference: bool,

    /// Print the number of guesses the search made.
    #[arg(short, long, default_value_t = false)]
    stats: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {}", source);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let puzzle = Puzzle::load(&cli.structure, &cli.words)?;
    let config = SolverConfig {
        inference: !cli.no_inference,
    };

    let mut solver = Solver::with_config(&puzzle, config);
    let assignment = solver.solve();

    if cli.stats {
        println!("guesses: {}", solver.num_guesses());
    }

    match assignment {
        None => println!("No solution."),
        Some(assignment) => {
            print!("{}", render(&puzzle, &assignment));

            if let Some(output) = &cli.output {
                save(&puzzle, &assignment, output)?;
            }
        }
    }

    Ok(())
}
