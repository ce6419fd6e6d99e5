use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lambda_front::fmt::{to_functional, to_source};
use lambda_front::parse_source;

/// Parse a lambda program, resolve its names and print it back.
#[derive(Parser, Debug)]
#[command(name = "lambda-front", version)]
struct Args {
    /// Print the node structure instead of lambda notation.
    #[arg(short, long)]
    functional: bool,

    /// Source file to read; standard input when omitted.
    file: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let source = read_input(args.file.as_ref())?;
    let program = parse_source(&source)?;

    if args.functional {
        println!("{}", to_functional(&program));
    } else {
        println!("{}", to_source(&program));
    }

    Ok(())
}
