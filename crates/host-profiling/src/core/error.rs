//! Profiling errors.

use thiserror::Error;

use crate::core::resources::ResourceDimension;

#[derive(Error, Debug)]
pub enum ProfilingError {
    /// The cluster has no running VMs, so there is no average footprint to compare against.
    #[error("cluster has no VM instances to profile against")]
    EmptyCluster,

    #[error("average {0} of cluster VMs is zero")]
    ZeroAverage(ResourceDimension),

    /// A sum, average or score left the finite floating-point range.
    #[error("{0} value is out of range")]
    Overflow(ResourceDimension),

    #[error("invalid value {value} for {field}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("can't read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("can't parse cluster config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ProfilingError>;

/// Checks that a resource quantity is finite and non-negative.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0. {
        Ok(())
    } else {
        Err(ProfilingError::InvalidInput { field, value })
    }
}

/// Checks that a derived quantity stayed finite.
pub(crate) fn ensure_finite(dimension: ResourceDimension, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProfilingError::Overflow(dimension))
    }
}
