//! Average resource footprint of cluster VMs.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::aggregator::{aggregate, ResourceTotals};
use crate::core::error::{ensure_finite, ProfilingError, Result};
use crate::core::resources::{HostResources, ResourceDimension};

/// Per-instance average of VM resources.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AverageProfile {
    pub cpus_profile: f64,
    /// Average CPU speed in MHz.
    pub cpu_speed_profile: f64,
    /// Average memory in megabytes.
    pub memory_profile: f64,
}

/// Totals of cluster VMs together with their per-instance averages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterVmProfile {
    pub totals: ResourceTotals,
    pub averages: AverageProfile,
}

/// Divides each total by the number of instances.
///
/// Fails with `EmptyCluster` if the totals account no instances and with `Overflow` if any total
/// is not finite.
pub fn derive_averages(totals: &ResourceTotals) -> Result<AverageProfile> {
    if totals.is_empty() {
        return Err(ProfilingError::EmptyCluster);
    }
    let n = totals.number_of_instances as f64;
    let averages = AverageProfile {
        cpus_profile: totals.total_cpus as f64 / n,
        cpu_speed_profile: ensure_finite(ResourceDimension::CpuSpeed, totals.total_cpu_speed)? / n,
        memory_profile: ensure_finite(ResourceDimension::Memory, totals.total_memory.value())? / n,
    };
    debug!(
        "average VM profile: cpus={}, cpu_speed={}, memory={}",
        averages.cpus_profile, averages.cpu_speed_profile, averages.memory_profile
    );
    Ok(averages)
}

/// Aggregates VMs of the given hosts and derives their averages.
pub fn profile_cluster(hosts: &[HostResources]) -> Result<ClusterVmProfile> {
    let totals = aggregate(hosts)?;
    let averages = derive_averages(&totals)?;
    Ok(ClusterVmProfile { totals, averages })
}
