mod benchmarks;

use clap::Parser;
use easybench::{BenchError, ComparisonReport, DEFAULT_ITERATIONS};
use std::process;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the suite to run (`all` runs every suite).
    #[arg()]
    suite: Option<String>,

    /// Timed iterations per candidate.
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Print reports as JSON instead of text tables.
    #[arg(long)]
    json: bool,

    /// Enumerate all available suites.
    #[arg(short, long)]
    list_suites: bool,
}

fn main() {
    // Creates a logger, filtering out all log messages except those from this crate.
    env_logger::builder()
        .filter_level(log::LevelFilter::Off)
        .filter_module(module_path!(), log::LevelFilter::Info)
        .filter_module("easybench", log::LevelFilter::Info)
        .format_timestamp_nanos()
        .init();

    let args = Args::parse();

    if args.list_suites {
        for &(name, _) in benchmarks::SUITES {
            println!("{name}");
        }
        return;
    }

    let reports = match run_suites(&args) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("benchmark failed: {err}");
            process::exit(1);
        }
    };

    for report in &reports {
        if args.json {
            println!("{}", report.to_json());
        } else {
            println!("{}", report.table());
        }
    }
}

fn run_suites(args: &Args) -> Result<Vec<ComparisonReport>, BenchError> {
    match args.suite.as_deref() {
        Some("all") => benchmarks::SUITES
            .iter()
            .map(|&(_, run)| run(args.iterations))
            .collect(),
        Some(name) => match benchmarks::SUITES.iter().find(|&&(n, _)| n == name) {
            Some(&(_, run)) => Ok(vec![run(args.iterations)?]),
            None => {
                eprintln!("Unknown suite `{name}`. Use --list-suites to see what is available.");
                process::exit(1);
            }
        },
        None => {
            eprintln!("No suite specified. Use --list-suites to see what is available.");
            process::exit(1);
        }
    }
}
