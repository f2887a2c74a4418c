use std::{io, process::ExitCode};

use clap::Parser;
use infixcalc::{evaluate_expression, repl};

/// infixcalc evaluates arithmetic expressions such as `2 + 3 * 4`,
/// `(2 add 3) mul 4` or `2 ^ 3 ^ 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate once. Without it an interactive session starts.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = args.expression {
        return match evaluate_expression(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(message) => {
                eprintln!("{message}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = repl::run(&mut io::stdin().lock(), &mut io::stdout().lock()) {
        eprintln!("Failed to run the interactive session: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
