use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use matfact::config::{load_config, FactorConfig, Factorization};
use matfact::decomposition::{decompose_cholesky, decompose_lu_with_tolerance, reduce_to_hessenberg};
use matfact::io::{read_grid, render, RenderOptions};
use matfact::math::{multiply, Matrix};

const EXIT_USAGE: i32 = 1;
const EXIT_FIRST_FILE: i32 = 2;
const EXIT_SECOND_FILE: i32 = 3;

fn cli() -> Command {
    Command::new("matfact")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Factor or multiply dense matrices read from text grids")
        .arg(
            Arg::new("matrix")
                .help("Path to the matrix file (row count, column count, then comma-separated rows)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("other")
                .help("Optional second matrix; when given, the product of the two is printed")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("factorization")
                .short('f')
                .long("factorization")
                .help("Factorization to apply to a single matrix. Overrides the config file.")
                .value_parser(["lu", "cholesky", "hessenberg"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON run configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Fractional digits to print per element. Overrides the config file.")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATFACT_LOG", "error,matfact=info"))
        .init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    let matrix_path: &PathBuf = matches.get_one("matrix").unwrap();
    let a = load_or_exit(matrix_path, EXIT_FIRST_FILE);
    let options = config.render_options();
    print_matrix("A", &a, &options);

    let outcome = match matches.get_one::<PathBuf>("other") {
        Some(other_path) => {
            let b = load_or_exit(other_path, EXIT_SECOND_FILE);
            print_matrix("B", &b, &options);
            multiply(&a, &b)
                .map(|ab| print_matrix("AB", &ab, &options))
                .map_err(anyhow::Error::from)
        }
        None => run_factorization(&a, &config),
    };

    if let Err(e) = outcome {
        log::error!("Computation failed: {:#}", e);
        std::process::exit(EXIT_USAGE);
    }
    Ok(())
}

fn build_config(matches: &ArgMatches) -> Result<FactorConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Using config: {:?}", path);
            load_config(path)?
        }
        None => FactorConfig::default(),
    };

    if let Some(name) = matches.get_one::<String>("factorization") {
        config.factorization = Factorization::from_str(name).map_err(anyhow::Error::msg)?;
    }
    if let Some(&precision) = matches.get_one::<usize>("precision") {
        config.precision = Some(precision);
    }
    Ok(config)
}

fn load_or_exit(path: &Path, code: i32) -> Matrix<f64> {
    match read_grid(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: File '{}' not found, inaccessible or malformed.", path.display());
            log::error!("Failed to load {:?}: {:#}", path, e);
            std::process::exit(code);
        }
    }
}

fn run_factorization(a: &Matrix<f64>, config: &FactorConfig) -> Result<()> {
    let options = config.render_options();
    log::info!("Running {} factorization", config.factorization.name());
    match config.factorization {
        Factorization::Lu => {
            let lu = decompose_lu_with_tolerance(a, config.pivot_tolerance)?;
            print_matrix("P", &lu.p, &options);
            print_matrix("L", &lu.l, &options);
            print_matrix("U", &lu.u, &options);
        }
        Factorization::Cholesky => {
            let r = decompose_cholesky(a)?;
            print_matrix("R", &r, &options);
        }
        Factorization::Hessenberg => {
            let h = reduce_to_hessenberg(a)?;
            print_matrix("H", &h, &options);
        }
    }
    Ok(())
}

fn print_matrix(label: &str, m: &Matrix<f64>, options: &RenderOptions) {
    println!("{}:", label);
    println!("{}", render(m, options));
}
