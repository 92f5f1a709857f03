//! Host capacity expressed in units of the average cluster VM.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::cluster_profile::{profile_cluster, AverageProfile, ClusterVmProfile};
use crate::core::error::{ensure_finite, ensure_non_negative, ProfilingError, Result};
use crate::core::inventory::ClusterInventory;
use crate::core::resources::{HostResources, ResourceDimension};

/// Number of average VMs the host could support, per resource dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostProfile {
    pub cpus_profile: f64,
    pub cpu_speed_profile: f64,
    pub memory_profile: f64,
}

fn proportion(capacity: f64, average: f64, dimension: ResourceDimension) -> Result<f64> {
    ensure_non_negative(dimension.average_field(), average)?;
    if average == 0. {
        return Err(ProfilingError::ZeroAverage(dimension));
    }
    ensure_finite(dimension, capacity / average)
}

/// Divides host capacity by the average VM profile, each dimension independently.
///
/// Averages must be finite and non-negative, and every resulting score must be finite.
///
/// CPU speed is scaled by CPU overprovisioning and memory is converted to megabytes and scaled by
/// memory overprovisioning before the division.
pub fn profile(host: &HostResources, averages: &AverageProfile) -> Result<HostProfile> {
    host.validate()?;
    let result = HostProfile {
        cpus_profile: proportion(host.cpus as f64, averages.cpus_profile, ResourceDimension::Cpus)?,
        cpu_speed_profile: proportion(
            host.effective_speed(),
            averages.cpu_speed_profile,
            ResourceDimension::CpuSpeed,
        )?,
        memory_profile: proportion(
            host.effective_memory().value(),
            averages.memory_profile,
            ResourceDimension::Memory,
        )?,
    };
    trace!("host {} profile: {:?}", host.display_name(), result);
    Ok(result)
}

/// Profiles hosts against the VM population of a fixed cluster snapshot.
///
/// The cluster profile is computed once on creation and reused for every host.
pub struct HostProfiler {
    hosts: Vec<HostResources>,
    cluster_profile: ClusterVmProfile,
}

impl HostProfiler {
    /// Creates profiler for the given cluster snapshot.
    ///
    /// Fails if the snapshot has no VMs or contains invalid VM resources.
    pub fn new(hosts: Vec<HostResources>) -> Result<Self> {
        let cluster_profile = profile_cluster(&hosts)?;
        Ok(Self { hosts, cluster_profile })
    }

    pub fn from_inventory<I: ClusterInventory + ?Sized>(inventory: &I) -> Result<Self> {
        Self::new(inventory.hosts())
    }

    pub fn cluster_profile(&self) -> &ClusterVmProfile {
        &self.cluster_profile
    }

    pub fn hosts(&self) -> &[HostResources] {
        &self.hosts
    }

    /// Returns the proportion of average cluster VMs the host can support.
    ///
    /// The host does not have to belong to the snapshot.
    pub fn host_vms_resource_proportion(&self, host: &HostResources) -> Result<HostProfile> {
        profile(host, &self.cluster_profile.averages)
    }

    /// Profiles every host of the snapshot, in snapshot order.
    pub fn profile_hosts(&self) -> Vec<(&HostResources, Result<HostProfile>)> {
        self.hosts
            .iter()
            .map(|host| (host, self.host_vms_resource_proportion(host)))
            .collect()
    }
}
