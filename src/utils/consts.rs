/// Log level (RUST_LOG takes precedence)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Noise model
// ============================================================================

/// Noise samples generated around each symbol
pub const NOISE_SAMPLES_PER_SYMBOL: usize = 10;

/// Applied to the noise intensity to keep samples close to their symbol
pub const NOISE_SCALING_FACTOR: f64 = 0.25;

// ============================================================================
// SNR rating thresholds (dB, inclusive lower bounds)
// ============================================================================

pub const SNR_EXCELLENT_DB: f64 = 30.0;
pub const SNR_GOOD_DB: f64 = 20.0;
pub const SNR_FAIR_DB: f64 = 10.0;

// ============================================================================
// Export
// ============================================================================

/// Directory the report files are written to unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "qam_output";

/// Rows per symbol table page
pub const TABLE_PAGE_ROWS: usize = 20;

/// Constellation plot size (pixels)
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 900;

/// Table page size (pixels)
pub const TABLE_WIDTH: u32 = 800;
pub const TABLE_HEIGHT: u32 = 600;

/// Vertical offset of symbol labels below their marker (lattice units)
pub const LABEL_OFFSET: f64 = 0.4;
