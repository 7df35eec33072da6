use clap::Parser;
use name_sort::utils::{logger, validation::Validate};
use name_sort::{CliConfig, SortedFileWriter};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!(
        "name-sort - executed with {} argument(s): {}",
        args.len(),
        args.join(",")
    );
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let writer = SortedFileWriter::new();
    let outcome = writer.create_sorted_file(&config.input);

    tracing::debug!("name-sort - message: {}", outcome.message);
    println!("{}", outcome.message);

    if outcome.output_file.is_none() {
        std::process::exit(1);
    }

    Ok(())
}
