use anyhow::Context;
use clap::Parser;
use log::info;

use kubernetriks_tracegen::config::GeneratorConfig;
use kubernetriks_tracegen::logging::init_logger;
use kubernetriks_tracegen::report::print_report;
use kubernetriks_tracegen::runner::generate_directory;

/// Generates workload traces for the simulator from directive files.
#[derive(Parser)]
struct Args {
    #[clap(short, long)]
    config_file: Option<std::path::PathBuf>,
    /// Overrides `input_dir` of the config.
    #[clap(short, long)]
    input_dir: Option<std::path::PathBuf>,
    /// Overrides `output_dir` of the config.
    #[clap(short, long)]
    output_dir: Option<std::path::PathBuf>,
    /// Overrides `seed` of the config.
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config_file {
        Some(config_file) => GeneratorConfig::from_file(config_file)
            .with_context(|| format!("could not load config file {:?}", config_file))?,
        None => GeneratorConfig::default(),
    };
    if let Some(input_dir) = args.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    init_logger(config.logs_filepath.as_deref());

    if let Some(config_file) = &args.config_file {
        info!("Path to config file: {:?}", config_file);
    }
    info!("Input directory: {:?}", config.input_dir);
    info!("Output directory: {:?}", config.output_dir);
    match config.seed {
        Some(seed) => info!("Seed: {}", seed),
        None => info!("Seed is not set, using entropy"),
    }

    let report = generate_directory(&config).context("trace generation failed")?;

    if let Some(report_config) = &config.report {
        print_report(&report, report_config)
            .with_context(|| format!("could not write report to {:?}", report_config.output_file))?;
        info!("Report written to {:?}", report_config.output_file);
    }
    Ok(())
}
