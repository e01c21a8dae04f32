use crate::error::{QamError, QamResult};
use crate::noise::{NoiseConfig, NoiseScope};
use crate::qam::SymbolPoint;
use crate::utils::consts::{NOISE_SAMPLES_PER_SYMBOL, NOISE_SCALING_FACTOR};
use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Scatter `NOISE_SAMPLES_PER_SYMBOL` noise samples around every symbol
///
/// Output is point-major: samples `[k*10, (k+1)*10)` belong to `symbols[k]`.
/// Offsets are drawn from N(0, intensity * NOISE_SCALING_FACTOR).
pub fn inject_noise<R: Rng + ?Sized>(
    symbols: &[SymbolPoint],
    config: &NoiseConfig,
    rng: &mut R,
) -> QamResult<Vec<Complex64>> {
    config.validate()?;
    if symbols.is_empty() {
        return Err(QamError::EmptyConstellation);
    }

    let std_dev = config.intensity * NOISE_SCALING_FACTOR;
    let normal =
        Normal::new(0.0, std_dev).map_err(|_| QamError::InvalidIntensity(config.intensity))?;

    let mut samples = Vec::with_capacity(symbols.len() * NOISE_SAMPLES_PER_SYMBOL);
    for symbol in symbols {
        let s = symbol.to_complex();
        match config.scope {
            NoiseScope::Amplitude => {
                for _ in 0..NOISE_SAMPLES_PER_SYMBOL {
                    let di = normal.sample(rng);
                    let dq = normal.sample(rng);
                    samples.push(s + Complex64::new(di, dq));
                }
            }
            NoiseScope::Phase => {
                let (r, theta) = s.to_polar();
                for _ in 0..NOISE_SAMPLES_PER_SYMBOL {
                    let dphi = normal.sample(rng);
                    samples.push(Complex64::from_polar(r, theta + dphi));
                }
            }
        }
    }

    debug!(
        "Injected {} {} noise samples (sigma = {:.4})",
        samples.len(),
        config.scope,
        std_dev
    );
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qam::{ModulationOrder, build_constellation};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_amplitude_sample_count() {
        let c = build_constellation(ModulationOrder::Qam64);
        let mut rng = StdRng::seed_from_u64(7);
        let config = NoiseConfig::new(1.0, NoiseScope::Amplitude).unwrap();
        let samples = inject_noise(&c.symbols, &config, &mut rng).unwrap();
        assert_eq!(samples.len(), 10 * c.len());
    }

    #[test]
    fn test_amplitude_deviation_scales_with_intensity() {
        let c = build_constellation(ModulationOrder::Qam64);
        for intensity in [0.2, 1.0, 4.0] {
            let mut rng = StdRng::seed_from_u64(42);
            let config = NoiseConfig::new(intensity, NoiseScope::Amplitude).unwrap();
            let samples = inject_noise(&c.symbols, &config, &mut rng).unwrap();

            let mean_sq: f64 = samples
                .chunks(NOISE_SAMPLES_PER_SYMBOL)
                .zip(&c.symbols)
                .flat_map(|(block, p)| block.iter().map(move |s| (s - p.to_complex()).norm_sqr()))
                .sum::<f64>()
                / samples.len() as f64;

            // E|d|^2 = 2 * sigma^2 for independent I/Q offsets
            let sigma = intensity * NOISE_SCALING_FACTOR;
            let expected = 2.0 * sigma * sigma;
            assert!(
                (mean_sq / expected - 1.0).abs() < 0.2,
                "intensity {}: mean squared deviation {} vs expected {}",
                intensity,
                mean_sq,
                expected
            );
        }
    }

    #[test]
    fn test_samples_grouped_by_symbol() {
        let c = build_constellation(ModulationOrder::Qam32);
        let mut rng = StdRng::seed_from_u64(3);
        let config = NoiseConfig::new(0.01, NoiseScope::Amplitude).unwrap();
        let samples = inject_noise(&c.symbols, &config, &mut rng).unwrap();
        for (k, block) in samples.chunks(NOISE_SAMPLES_PER_SYMBOL).enumerate() {
            let p = c.symbols[k].to_complex();
            assert!(
                block.iter().all(|s| (s - p).norm() < 0.1),
                "block {} strays from its symbol",
                k
            );
        }
    }

    #[test]
    fn test_phase_noise_preserves_magnitude() {
        let c = build_constellation(ModulationOrder::Qam128);
        let mut rng = StdRng::seed_from_u64(11);
        let config = NoiseConfig::new(2.0, NoiseScope::Phase).unwrap();
        let samples = inject_noise(&c.symbols, &config, &mut rng).unwrap();
        assert_eq!(samples.len(), 10 * c.len());
        for (block, p) in samples.chunks(NOISE_SAMPLES_PER_SYMBOL).zip(&c.symbols) {
            for s in block {
                assert!((s.norm() - p.energy()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let c = build_constellation(ModulationOrder::Qam16);
        let config = NoiseConfig::new(0.5, NoiseScope::Phase).unwrap();
        let a = inject_noise(&c.symbols, &config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = inject_noise(&c.symbols, &config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = NoiseConfig::new(1.0, NoiseScope::Amplitude).unwrap();
        assert!(matches!(
            inject_noise(&[], &config, &mut rng),
            Err(QamError::EmptyConstellation)
        ));

        let bad = NoiseConfig {
            intensity: -0.5,
            scope: NoiseScope::Phase,
        };
        let c = build_constellation(ModulationOrder::Qam4);
        assert!(matches!(
            inject_noise(&c.symbols, &bad, &mut rng),
            Err(QamError::InvalidIntensity(_))
        ));
    }
}
