//! Command-line flags and how they merge with a JSON config and prompts

use crate::config::RunConfig;
use crate::error::{QamError, QamResult};
use crate::noise::{NoiseConfig, NoiseScope};
use crate::qam::ModulationOrder;
use crate::ui::prompt_run_config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "QAM constellation builder with synthetic noise and SNR/BNR estimation",
    long_about = None
)]
pub struct Cli {
    /// QAM order (4, 16, 32, 64, 128, 512, 1024, 2048, 4096); prompts when omitted
    #[arg(short, long)]
    pub order: Option<ModulationOrder>,
    /// Noise scope: amplitude or phase
    #[arg(short = 's', long)]
    pub noise_scope: Option<NoiseScope>,
    /// Noise intensity, required with --noise-scope
    #[arg(short, long)]
    pub intensity: Option<f64>,
    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,
    /// Directory for the exported files
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,
    /// JSON run configuration; flags given alongside override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Skip writing the plot, table and JSON files
    #[arg(long, default_value_t = false)]
    pub no_export: bool,
}

impl Cli {
    /// Noise settings from the flags; scope and intensity come as a pair
    pub fn noise(&self) -> QamResult<Option<NoiseConfig>> {
        match (self.noise_scope, self.intensity) {
            (Some(scope), Some(intensity)) => Ok(Some(NoiseConfig::new(intensity, scope)?)),
            (None, None) => Ok(None),
            (Some(_), None) => Err(QamError::Config(
                "--noise-scope needs --intensity".into(),
            )),
            (None, Some(_)) => Err(QamError::Config(
                "--intensity needs --noise-scope".into(),
            )),
        }
    }

    /// Final run configuration
    ///
    /// The config file is the base when given, then `--order`, otherwise the
    /// interactive prompts. Explicit flags override whatever the base set.
    pub fn resolve(&self) -> QamResult<RunConfig> {
        let noise = self.noise()?;
        let mut config = match (&self.config, self.order) {
            (Some(path), _) => RunConfig::from_json_file(path)?,
            (None, Some(order)) => RunConfig::new(order),
            (None, None) => prompt_run_config()?,
        };

        if let Some(order) = self.order {
            config.order = order;
        }
        if noise.is_some() {
            config.noise = noise;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("qamscope").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(
            &path,
            r#"{"order": 16, "noise": {"intensity": 0.5, "scope": "phase"}, "seed": 7}"#,
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        let config = parse(&["-c", path_arg, "--order", "64", "-d", "elsewhere"])
            .resolve()
            .unwrap();
        assert_eq!(config.order, ModulationOrder::Qam64);
        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
        // Untouched by flags, so the file wins
        assert_eq!(config.seed, Some(7));
        let noise = config.noise.unwrap();
        assert_eq!(noise.scope, NoiseScope::Phase);
        assert_eq!(noise.intensity, 0.5);

        let config = parse(&["-c", path_arg, "-s", "amplitude", "-i", "2", "--seed", "9"])
            .resolve()
            .unwrap();
        assert_eq!(config.order, ModulationOrder::Qam16);
        assert_eq!(config.seed, Some(9));
        let noise = config.noise.unwrap();
        assert_eq!(noise.scope, NoiseScope::Amplitude);
        assert_eq!(noise.intensity, 2.0);
    }

    #[test]
    fn test_order_flag_without_config() {
        let config = parse(&["-o", "32-QAM"]).resolve().unwrap();
        assert_eq!(config, RunConfig::new(ModulationOrder::Qam32));
    }

    #[test]
    fn test_unpaired_noise_flags_rejected() {
        let err = parse(&["-o", "16", "-s", "phase"]).resolve().unwrap_err();
        assert!(matches!(err, QamError::Config(_)));
        let err = parse(&["-o", "16", "-i", "1.0"]).resolve().unwrap_err();
        assert!(matches!(err, QamError::Config(_)));
    }

    #[test]
    fn test_zero_intensity_rejected() {
        let err = parse(&["-o", "16", "-s", "amplitude", "-i", "0"])
            .resolve()
            .unwrap_err();
        assert!(matches!(err, QamError::InvalidIntensity(_)));
    }

    #[test]
    fn test_bad_flag_values_fail_to_parse() {
        assert!(Cli::try_parse_from(["qamscope", "-o", "100"]).is_err());
        assert!(Cli::try_parse_from(["qamscope", "-s", "frequency"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = parse(&["-c", "/nonexistent/qamscope/run.json"])
            .resolve()
            .unwrap_err();
        assert!(matches!(err, QamError::Config(_)));
    }
}
