use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use clfbench_classifiers::data_handling::Sampling;
use clfbench_cli::bench::run::{
    load_bench_config, run_benchmark, write_leaderboard_json, BenchConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CLFBENCH_LOG", "error,clfbench=info"))
        .init();

    let matches = Command::new("clfbench")
        .version(clap::crate_version!())
        .about("Benchmark binary classifiers on a labeled CSV dataset")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("evaluate")
                .about("Fit every configured classifier and print the ranked leaderboard")
                .arg(
                    Arg::new("dataset")
                        .help("Path to the CSV dataset; the last column holds the 0/1 label")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON benchmark configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for every random baseline. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("k")
                        .short('k')
                        .long("k")
                        .help("Neighbor count for every KNN classifier. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("split_seed")
                        .long("split-seed")
                        .help("Seed for the random train/test split, making it reproducible.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("no_header")
                        .long("no-header")
                        .help("Treat the first line of the dataset as data.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Also write the ranked leaderboard as JSON to this path.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("default-config")
                .about("Print the default JSON benchmark configuration"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("evaluate", sub_m)) => handle_evaluate(sub_m),
        Some(("default-config", _)) => {
            println!("{}", serde_json::to_string_pretty(&BenchConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_evaluate(matches: &ArgMatches) -> Result<()> {
    let dataset: &PathBuf = matches
        .get_one("dataset")
        .expect("dataset is a required argument");

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[clfbench] Using config: {:?}", config_path);
            load_bench_config(config_path)?
        }
        None => {
            log::info!("[clfbench] No config provided; using defaults.");
            BenchConfig::default()
        }
    };

    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.set_random_seed(seed);
    }
    if let Some(&k) = matches.get_one::<usize>("k") {
        config.set_knn_k(k);
    }
    if let Some(&split_seed) = matches.get_one::<u64>("split_seed") {
        config.evaluation.sampling = Sampling::Random {
            seed: Some(split_seed),
        };
    }
    if matches.get_flag("no_header") {
        config.evaluation.has_header = false;
    }

    log::info!("[clfbench] Evaluating models on {:?}", dataset);
    let leaderboard = match run_benchmark(dataset, &config) {
        Ok(leaderboard) => leaderboard,
        Err(e) => {
            log::error!("Benchmark failed: {:#}", e);
            std::process::exit(1)
        }
    };

    print!("{}", leaderboard);

    if let Some(output_path) = matches.get_one::<PathBuf>("output_file") {
        write_leaderboard_json(&leaderboard, output_path)?;
        log::info!("[clfbench] Wrote leaderboard to {:?}", output_path);
    }
    Ok(())
}
