pub mod progress;

use crate::config::RunConfig;
use crate::error::QamResult;
use crate::noise::{NoiseConfig, NoiseScope};
use crate::qam::ModulationOrder;
use crate::quality::QualityReport;
use dialoguer::{Confirm, Input, Select};

pub fn print_banner() {
    println!("QamScope-rs");
}

/// Ask for the order and optional noise settings on the terminal
pub fn prompt_run_config() -> QamResult<RunConfig> {
    let labels: Vec<String> = ModulationOrder::ALL.iter().map(|o| o.to_string()).collect();
    let choice = Select::new()
        .with_prompt("Select the size of QAM")
        .items(&labels)
        .default(1)
        .interact()?;
    let mut config = RunConfig::new(ModulationOrder::ALL[choice]);

    let add_noise = Confirm::new()
        .with_prompt("Do you want to add noise?")
        .default(false)
        .interact()?;
    if add_noise {
        let scopes: Vec<&str> = NoiseScope::ALL.iter().map(NoiseScope::as_str).collect();
        let scope = Select::new()
            .with_prompt("Add noise to amplitude or phase?")
            .items(&scopes)
            .default(0)
            .interact()?;
        let intensity: f64 = Input::new()
            .with_prompt("Noise intensity (e.g. 0.1 for low, 1 for high)")
            .default(0.5)
            .validate_with(|v: &f64| -> Result<(), &str> {
                if v.is_finite() && *v > 0.0 {
                    Ok(())
                } else {
                    Err("intensity must be a positive number")
                }
            })
            .interact_text()?;
        config = config.with_noise(NoiseConfig::new(intensity, NoiseScope::ALL[scope])?);
    }

    Ok(config)
}

pub fn print_quality(report: &QualityReport) {
    println!("SNR: {:.2} dB ({})", report.snr_db, report.rating);
    println!("BNR: {:.2} dB", report.bnr_db);
}
