use crate::config::RunConfig;
use crate::error::QamResult;
use crate::noise::inject_noise;
use crate::qam::{Constellation, build_constellation};
use crate::quality::{QualityReport, estimate_quality};
use crate::report::table::{SymbolRow, tabulate};
use num_complex::Complex64;
use rand::Rng;
use tracing::info;

/// Everything one run produces
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub constellation: Constellation,
    /// Phase-sorted symbol table
    pub rows: Vec<SymbolRow>,
    /// Point-major noise samples, present when noise was requested
    pub noise: Option<Vec<Complex64>>,
    pub quality: Option<QualityReport>,
}

/// Build the constellation, then inject noise and estimate quality if requested
pub fn run<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> QamResult<RunOutcome> {
    let constellation = build_constellation(config.order);
    info!(
        "{}: {} symbols, {} excluded corner points",
        config.order,
        constellation.len(),
        constellation.excluded.len()
    );

    let noise = match &config.noise {
        Some(noise_config) => Some(inject_noise(&constellation.symbols, noise_config, rng)?),
        None => None,
    };

    let quality = match &noise {
        Some(samples) => Some(estimate_quality(&constellation.symbols, samples)?),
        None => None,
    };

    let rows = tabulate(&constellation);

    Ok(RunOutcome {
        constellation,
        rows,
        noise,
        quality,
    })
}
