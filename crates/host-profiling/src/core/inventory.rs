//! Source of cluster snapshots.

use crate::core::resources::HostResources;

/// Enumerates hosts of a cluster together with the VMs running on them.
///
/// Implementations should return a consistent snapshot which does not change during one profiling
/// pass.
pub trait ClusterInventory {
    fn hosts(&self) -> Vec<HostResources>;
}

impl ClusterInventory for Vec<HostResources> {
    fn hosts(&self) -> Vec<HostResources> {
        self.clone()
    }
}

impl ClusterInventory for [HostResources] {
    fn hosts(&self) -> Vec<HostResources> {
        self.to_vec()
    }
}
