use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use anyhow::{Context, Result};
use calc::{
    caret_at_position,
    lexer::lexer::tokenize,
    parser::parser::evaluate,
    repl::{format_value, Repl, ReplConfig},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calc")]
#[command(version, about = "Interactive arithmetic expression evaluator", long_about = None)]
struct Cli {
    /// Evaluate a single expression and exit instead of starting the loop
    #[arg(short, long)]
    expr: Option<String>,
    /// With --expr, print the tokens of the expression instead of its value
    #[arg(long, requires = "expr")]
    tokens: bool,
    /// Prompt shown by the interactive loop
    #[arg(long, default_value = "Calc> ")]
    prompt: String,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.expr {
        Some(expr) if cli.tokens => Ok(print_tokens(&expr)),
        Some(expr) => Ok(evaluate_once(&expr)),
        None => {
            let config = ReplConfig {
                prompt: cli.prompt,
                ..ReplConfig::default()
            };

            let stdin = io::stdin();
            let stdout = io::stdout();
            Repl::new(stdin.lock(), BufWriter::new(stdout.lock()), config)
                .run()
                .context("interactive loop failed")?;

            Ok(ExitCode::SUCCESS)
        }
    }
}

fn evaluate_once(expr: &str) -> ExitCode {
    match evaluate(expr) {
        Ok(value) => {
            println!("{}", format_value(value));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("{}", caret_at_position(expr, error.get_position()));
            ExitCode::FAILURE
        }
    }
}

fn print_tokens(expr: &str) -> ExitCode {
    match tokenize(expr) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}", token.debug());
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
