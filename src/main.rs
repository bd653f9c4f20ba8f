use std::fs;

use clap::Parser;
use textcalc::interpreter::evaluator::core::{Context, MAX_DEPTH};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// textcalc evaluates a one-line arithmetic expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells textcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Logs every fragment as it is recognized.
    #[arg(short, long)]
    verbose: bool,

    /// Maximum nesting depth before evaluation gives up.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      if verbose {
                                                          EnvFilter::new("textcalc=debug")
                                                      } else {
                                                          EnvFilter::new("textcalc=warn")
                                                      }
                                                  });

    tracing_subscriber::registry().with(fmt::layer().with_target(false)
                                                    .with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match Context::with_max_depth(args.max_depth).evaluate(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
