use clap::Parser;
use qamscope_rs::cli::Cli;
use qamscope_rs::pipeline;
use qamscope_rs::report::export_report;
use qamscope_rs::ui::{print_banner, print_quality};
use qamscope_rs::utils::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();
    print_banner();
    let cli = Cli::parse();

    let config = cli.resolve()?;
    match &config.noise {
        Some(noise) => tracing::info!(
            "Generating {} with {} noise (intensity {})",
            config.order,
            noise.scope,
            noise.intensity
        ),
        None => tracing::info!("Generating {} without noise", config.order),
    }

    let mut rng = config.rng();
    let outcome = pipeline::run(&config, &mut rng)?;
    if let Some(report) = &outcome.quality {
        print_quality(report);
    }

    if cli.no_export {
        tracing::info!("Export skipped");
        return Ok(());
    }

    let written = export_report(&config.output_dir, &outcome, config.noise.as_ref())?;
    tracing::info!(
        "{} files generated in {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}
