//! Enumforge - Main Entry Point
//!
//! Batch command-line front end: load the configuration document, run
//! the generation pipeline and print the written file paths. Any load,
//! validation or write failure aborts the run with a descriptive message
//! and a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use enumforge_application::{GenerateInterfaces, GenerateInterfacesInput};
use enumforge_infrastructure::{
    CHeaderEmitter, ModuleInterfaceEmitter, StdFileSystem, SystemClock, load_config,
};

/// Generates C and C++ module interfaces from a declarative enum/flag
/// configuration document.
#[derive(Debug, Parser)]
#[command(name = "enumforge", version, about)]
struct Cli {
    /// Path to the configuration document (JSON or YAML).
    config: PathBuf,

    /// Directory the generated files are written into (created if absent).
    #[arg(default_value = "./output")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;

    let use_case = GenerateInterfaces::new(
        SystemClock::new(),
        StdFileSystem::new(),
        vec![
            Box::new(CHeaderEmitter::new()),
            Box::new(ModuleInterfaceEmitter::new()),
        ],
    );

    let input = GenerateInterfacesInput {
        config,
        output_dir: cli.output_dir.clone(),
    };
    Ok(use_case.execute(&input)?)
}
