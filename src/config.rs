//! Rendering and comparison settings.

/// Decimal places used for floating components unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 4;

/// Per-component tolerance for approximate comparison.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Settings shared by the text renderers and approximate comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatConfig {
    /// Decimal places for floating components
    pub precision: usize,
    /// Largest per-component difference still considered equal
    pub epsilon: f64,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}
