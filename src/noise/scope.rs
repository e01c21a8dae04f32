use crate::error::{QamError, QamResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which coordinate system the synthetic noise perturbs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseScope {
    /// Independent Gaussian offsets on I and Q
    Amplitude,
    /// Gaussian rotation around the origin, magnitude kept
    Phase,
}

impl NoiseScope {
    pub const ALL: [NoiseScope; 2] = [NoiseScope::Amplitude, NoiseScope::Phase];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseScope::Amplitude => "amplitude",
            NoiseScope::Phase => "phase",
        }
    }
}

impl FromStr for NoiseScope {
    type Err = QamError;

    fn from_str(s: &str) -> QamResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "amplitude" => Ok(NoiseScope::Amplitude),
            "phase" => Ok(NoiseScope::Phase),
            _ => Err(QamError::InvalidNoiseScope(s.to_string())),
        }
    }
}

impl fmt::Display for NoiseScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Noise settings for one run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Standard deviation before the fixed scaling factor
    pub intensity: f64,
    pub scope: NoiseScope,
}

impl NoiseConfig {
    pub fn new(intensity: f64, scope: NoiseScope) -> QamResult<Self> {
        let config = Self { intensity, scope };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QamResult<()> {
        if self.intensity.is_finite() && self.intensity > 0.0 {
            Ok(())
        } else {
            Err(QamError::InvalidIntensity(self.intensity))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope() {
        assert_eq!("amplitude".parse::<NoiseScope>().unwrap(), NoiseScope::Amplitude);
        assert_eq!(" Phase\n".parse::<NoiseScope>().unwrap(), NoiseScope::Phase);
    }

    #[test]
    fn test_unknown_scope_is_error() {
        match "frequency".parse::<NoiseScope>() {
            Err(QamError::InvalidNoiseScope(s)) => assert_eq!(s, "frequency"),
            other => panic!("expected InvalidNoiseScope, got {:?}", other),
        }
        assert!("".parse::<NoiseScope>().is_err());
        assert!(serde_json::from_str::<NoiseScope>("\"both\"").is_err());
    }

    #[test]
    fn test_intensity_validation() {
        assert!(NoiseConfig::new(0.5, NoiseScope::Phase).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                NoiseConfig::new(bad, NoiseScope::Amplitude),
                Err(QamError::InvalidIntensity(_))
            ));
        }
    }
}
