//! Δ-stepping configuration.

use std::fmt;

/// Default bucket width Δ.
pub const DEFAULT_DELTA: f64 = 3.0;

/// Errors from [`DeltaSteppingConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Δ must be at least 1.
    DeltaTooSmall(f64),
    /// Δ must be a finite number.
    DeltaNotFinite(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeltaTooSmall(delta) => {
                write!(f, "delta must be at least 1, got {delta}")
            }
            Self::DeltaNotFinite(delta) => {
                write!(f, "delta must be finite, got {delta}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for the Δ-stepping engine.
#[derive(Debug, Clone)]
pub struct DeltaSteppingConfig {
    /// Bucket width Δ. Nodes whose tentative distance falls in
    /// `[i·Δ, (i+1)·Δ)` share bucket `i`, and edges are classified light
    /// (`weight ≤ Δ`) or heavy (`weight > Δ`).
    ///
    /// Valid values lie in `1 ≤ Δ ≤ |V| · max-edge-weight`. Validation
    /// enforces the lower bound and finiteness; a Δ above the distance span
    /// of the graph is legal and merely collapses everything into few
    /// buckets.
    pub delta: f64,
}

impl Default for DeltaSteppingConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
        }
    }
}

impl DeltaSteppingConfig {
    /// Creates a configuration with an explicit bucket width.
    #[must_use]
    pub fn with_delta(delta: f64) -> Self {
        Self { delta }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when Δ is below 1 or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delta.is_finite() {
            return Err(ConfigError::DeltaNotFinite(self.delta));
        }
        if self.delta < 1.0 {
            return Err(ConfigError::DeltaTooSmall(self.delta));
        }
        Ok(())
    }
}
