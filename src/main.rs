use std::{process::ExitCode, time::Instant};

use clap::Parser;
use exprtree::{
    ast::{to_json, to_json_compact, Expr},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
};

/// Parse arithmetic expressions into a syntax tree and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "exprtree", version)]
struct Cli {
    /// Expressions to parse, e.g. "3 + 4 * 5"
    #[arg(required = true)]
    expressions: Vec<String>,

    /// Print the token stream before the tree
    #[arg(short, long)]
    tokens: bool,

    /// Print the tree as single-line JSON
    #[arg(short, long)]
    compact: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut failed = false;

    for expression in &cli.expressions {
        println!("Parsing: {}", expression);

        let ast = match run(&cli, expression) {
            Ok(ast) => ast,
            Err(error) => {
                eprint!("{}", render_error(&error, expression));
                failed = true;
                continue;
            }
        };

        let json = if cli.compact {
            to_json_compact(&ast)
        } else {
            to_json(&ast)
        };

        match json {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: failed to serialize tree: {}", err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli, expression: &str) -> Result<Expr, Error> {
    let start = Instant::now();
    let tokens = tokenize(expression)?;
    log::info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("  {}", token);
        }
    }

    let parse_start = Instant::now();
    let ast = parse(tokens)?;
    log::info!("Parsed in {:?}", parse_start.elapsed());

    Ok(ast)
}
