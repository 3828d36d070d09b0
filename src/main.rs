use clap::Parser;
use png2webp::utils::{logger, validation::Validate};
use png2webp::{CliConfig, Converter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting png2webp");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let converter = Converter::new(config);

    match converter.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Conversion finished: {} converted, {} skipped, {} failed",
                summary.converted,
                summary.skipped,
                summary.failed
            );
            println!(
                "✅ Conversion finished: {} converted, {} skipped, {} failed",
                summary.converted, summary.skipped, summary.failed
            );
        }
        Err(e) => {
            // Missing source directory is reported, not signaled via exit status
            tracing::error!("❌ Conversion did not run: {}", e);
            eprintln!("❌ {}", e);
        }
    }
}
