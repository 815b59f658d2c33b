//! Generator configuration and validation
//!
//! All knobs that shape a generated graph live here. Validation runs before
//! any sampling so a bad configuration never produces partial output.

use std::ops::Range;

use crate::error::DepgenError;

/// Parameters for one generation run
///
/// A run is a pure function of these five values: identical configurations
/// always produce byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Total number of non-root packages to generate
    pub num_packages: usize,

    /// Minimum version number (inclusive)
    pub min_version: u32,

    /// Maximum version number (exclusive)
    pub max_version: u32,

    /// Maximum dependencies per package version
    pub max_deps: usize,

    /// Seed for the shared random stream
    pub seed: u64,
}

impl GeneratorConfig {
    /// Validate the configuration, failing fast before any sampling
    ///
    /// `max_deps` of zero is allowed (the graph degenerates to root edges
    /// only); negative values are unrepresentable by type.
    pub fn validate(&self) -> Result<(), DepgenError> {
        if self.num_packages == 0 {
            return Err(DepgenError::config_with_hint(
                "package count must be positive",
                "Pass -n/--num-packages with a value of 1 or more",
            ));
        }

        if self.max_version <= self.min_version {
            return Err(DepgenError::config_with_hint(
                format!(
                    "empty version window [{}, {})",
                    self.min_version, self.max_version
                ),
                "max-version is exclusive and must be greater than min-version",
            ));
        }

        Ok(())
    }

    /// The shared half-open version window
    pub fn versions(&self) -> Range<u32> {
        self.min_version..self.max_version
    }

    /// Number of versions every package carries
    pub fn version_count(&self) -> usize {
        (self.max_version - self.min_version) as usize
    }
}
