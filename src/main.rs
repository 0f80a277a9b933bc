// Copyright (C) 2025 Jeremy J. Carroll.

//! Command-line entry point: prints one term of the digit-sum sequence.

use clap::{Parser, ValueEnum};
use digit_sum_sequence::{Evaluator, EvaluatorConfig, Indexing};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndexingArg {
    /// a[0] = 1, a[1] = 2, ...
    Recurrence,
    /// a[0] = 1, a[1] = 1, a[2] = 2, ...
    PrecedingDigitSums,
}

impl From<IndexingArg> for Indexing {
    fn from(arg: IndexingArg) -> Self {
        match arg {
            IndexingArg::Recurrence => Indexing::Recurrence,
            IndexingArg::PrecedingDigitSums => Indexing::PrecedingDigitSums,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "digitseq")]
#[command(version)]
#[command(about = "Compute a[n] of the sequence a[n+1] = a[n] + digitsum(a[n])", long_about = None)]
struct Args {
    /// Index of the term to compute
    #[arg(short, long, default_value_t = 1_000_000)]
    n: u64,

    /// Number of digits in the common suffix
    #[arg(long, default_value_t = 3)]
    suffix_digits: u32,

    /// Maximum number of digits of any value reached
    #[arg(long, default_value_t = 19)]
    output_digits: u32,

    /// How terms are numbered
    #[arg(long, value_enum, default_value_t = IndexingArg::Recurrence)]
    indexing: IndexingArg,

    /// Step through every term without shortcuts
    #[arg(long)]
    no_shortcuts: bool,

    /// Log evaluator internals
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "digitseq=debug,digit_sum_sequence=debug"
    } else {
        "digitseq=info,digit_sum_sequence=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EvaluatorConfig::default()
        .with_suffix_digits(args.suffix_digits)
        .with_output_digits(args.output_digits)
        .with_indexing(args.indexing.into())
        .with_shortcuts(!args.no_shortcuts);

    let result = Evaluator::new(config).and_then(|mut evaluator| evaluator.evaluate(args.n));
    match result {
        Ok(value) => {
            println!("SumOfDigitSequence({}) = {}", args.n, value);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
