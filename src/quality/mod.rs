//! SNR / BNR estimation from a constellation and its noise samples

use crate::error::{QamError, QamResult};
use crate::qam::SymbolPoint;
use crate::utils::consts::{NOISE_SAMPLES_PER_SYMBOL, SNR_EXCELLENT_DB, SNR_FAIR_DB, SNR_GOOD_DB};
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Qualitative SNR label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SnrRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SnrRating {
    /// Bands are inclusive on their lower bound: 30 dB is Excellent, 29.999 dB is Good.
    pub fn from_snr(snr_db: f64) -> Self {
        if snr_db >= SNR_EXCELLENT_DB {
            SnrRating::Excellent
        } else if snr_db >= SNR_GOOD_DB {
            SnrRating::Good
        } else if snr_db >= SNR_FAIR_DB {
            SnrRating::Fair
        } else {
            SnrRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnrRating::Excellent => "Excellent",
            SnrRating::Good => "Good",
            SnrRating::Fair => "Fair",
            SnrRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for SnrRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QualityReport {
    /// Mean `i² + q²` over the symbols
    pub signal_power: f64,
    /// Mean squared distance of each sample from its symbol
    pub noise_power: f64,
    /// `+inf` when the noise power is exactly zero
    pub snr_db: f64,
    /// Taken as SNR / 2
    pub bnr_db: f64,
    pub rating: SnrRating,
}

/// Signal power, noise power, SNR, BNR and a rating for `samples` around `symbols`
///
/// `samples` must hold exactly `NOISE_SAMPLES_PER_SYMBOL` entries per symbol,
/// in the same order as `symbols`.
pub fn estimate_quality(
    symbols: &[SymbolPoint],
    samples: &[Complex64],
) -> QamResult<QualityReport> {
    if symbols.is_empty() {
        return Err(QamError::EmptyConstellation);
    }
    let expected = symbols.len() * NOISE_SAMPLES_PER_SYMBOL;
    if samples.len() != expected {
        return Err(QamError::MalformedNoiseGrouping {
            expected,
            actual: samples.len(),
        });
    }

    let signal_power = symbols.iter().map(SymbolPoint::power).sum::<f64>() / symbols.len() as f64;

    let noise_power = samples
        .chunks_exact(NOISE_SAMPLES_PER_SYMBOL)
        .zip(symbols)
        .map(|(block, symbol)| {
            let s = symbol.to_complex();
            block.iter().map(|n| (n - s).norm_sqr()).sum::<f64>()
        })
        .sum::<f64>()
        / samples.len() as f64;

    let snr_db = if noise_power > 0.0 {
        10.0 * (signal_power / noise_power).log10()
    } else {
        f64::INFINITY
    };
    let bnr_db = snr_db / 2.0;

    debug!(
        "Signal power {:.4}, noise power {:.6}, SNR {:.2} dB",
        signal_power, noise_power, snr_db
    );

    Ok(QualityReport {
        signal_power,
        noise_power,
        snr_db,
        bnr_db,
        rating: SnrRating::from_snr(snr_db),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{NoiseConfig, NoiseScope, inject_noise};
    use crate::qam::{ModulationOrder, build_constellation};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clean_samples(symbols: &[SymbolPoint]) -> Vec<Complex64> {
        symbols
            .iter()
            .flat_map(|p| std::iter::repeat_n(p.to_complex(), NOISE_SAMPLES_PER_SYMBOL))
            .collect()
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(SnrRating::from_snr(30.0), SnrRating::Excellent);
        assert_eq!(SnrRating::from_snr(29.999), SnrRating::Good);
        assert_eq!(SnrRating::from_snr(20.0), SnrRating::Good);
        assert_eq!(SnrRating::from_snr(19.999), SnrRating::Fair);
        assert_eq!(SnrRating::from_snr(10.0), SnrRating::Fair);
        assert_eq!(SnrRating::from_snr(9.999), SnrRating::Poor);
        assert_eq!(SnrRating::from_snr(-5.0), SnrRating::Poor);
        assert_eq!(SnrRating::from_snr(f64::INFINITY), SnrRating::Excellent);
    }

    #[test]
    fn test_zero_noise_gives_infinite_snr() {
        let c = build_constellation(ModulationOrder::Qam16);
        let report = estimate_quality(&c.symbols, &clean_samples(&c.symbols)).unwrap();
        assert_eq!(report.noise_power, 0.0);
        assert!(report.snr_db.is_infinite() && report.snr_db > 0.0);
        assert!(report.bnr_db.is_infinite());
        assert_eq!(report.rating, SnrRating::Excellent);
    }

    #[test]
    fn test_known_powers() {
        // 4-QAM: every symbol has power 2
        let c = build_constellation(ModulationOrder::Qam4);
        let samples: Vec<Complex64> = clean_samples(&c.symbols)
            .into_iter()
            .map(|s| s + Complex64::new(0.1, 0.0))
            .collect();
        let report = estimate_quality(&c.symbols, &samples).unwrap();
        assert!((report.signal_power - 2.0).abs() < 1e-12);
        assert!((report.noise_power - 0.01).abs() < 1e-12);
        assert!((report.snr_db - 10.0 * 200f64.log10()).abs() < 1e-9);
        assert!((report.bnr_db - report.snr_db / 2.0).abs() < 1e-12);
        assert_eq!(report.rating, SnrRating::Good);
    }

    #[test]
    fn test_snr_falls_with_intensity() {
        let c = build_constellation(ModulationOrder::Qam64);
        let mut last = f64::INFINITY;
        for intensity in [0.01, 0.1, 1.0, 5.0] {
            let mut rng = StdRng::seed_from_u64(5);
            let config = NoiseConfig::new(intensity, NoiseScope::Amplitude).unwrap();
            let samples = inject_noise(&c.symbols, &config, &mut rng).unwrap();
            let report = estimate_quality(&c.symbols, &samples).unwrap();
            assert!(report.snr_db < last, "SNR did not drop at intensity {}", intensity);
            last = report.snr_db;
        }
    }

    #[test]
    fn test_malformed_grouping_rejected() {
        let c = build_constellation(ModulationOrder::Qam16);
        let mut samples = clean_samples(&c.symbols);
        samples.pop();
        match estimate_quality(&c.symbols, &samples) {
            Err(QamError::MalformedNoiseGrouping { expected, actual }) => {
                assert_eq!(expected, 160);
                assert_eq!(actual, 159);
            }
            other => panic!("expected MalformedNoiseGrouping, got {:?}", other),
        }

        // Right multiple of 10, wrong symbol set
        let samples = clean_samples(&c.symbols[..8]);
        assert!(estimate_quality(&c.symbols, &samples).is_err());
        assert!(matches!(
            estimate_quality(&[], &[]),
            Err(QamError::EmptyConstellation)
        ));
    }
}
