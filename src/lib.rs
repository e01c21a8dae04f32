pub mod cli;
pub mod config;
pub mod error;
pub mod noise;
pub mod pipeline;
pub mod qam;
pub mod quality;
pub mod report;
pub mod ui;
pub mod utils;

pub use config::RunConfig;
pub use error::{QamError, QamResult};
pub use noise::{NoiseConfig, NoiseScope, inject_noise};
pub use qam::{Constellation, ModulationOrder, SymbolPoint, build_constellation};
pub use quality::{QualityReport, SnrRating, estimate_quality};
