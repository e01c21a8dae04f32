use crate::noise::NoiseConfig;
use crate::qam::{ModulationOrder, SymbolPoint};
use crate::quality::QualityReport;
use crate::report::table::SymbolRow;
use serde::Serialize;

/// JSON snapshot of one run
#[derive(Serialize)]
pub struct ConstellationDump<'a> {
    pub order: ModulationOrder,
    pub symbols: &'a [SymbolRow],
    pub excluded: &'a [SymbolPoint],
    pub noise_config: Option<NoiseConfig>,
    /// `[i, q]` pairs, ten per symbol in lattice order
    pub noise_samples: Vec<[f64; 2]>,
    /// A noiseless run has infinite `snr_db` and `bnr_db`; JSON has no
    /// infinity, so both are written as `null`
    pub quality: Option<QualityReport>,
}
