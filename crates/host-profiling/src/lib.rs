//! Profiling of host capacity against the average VM footprint of a cluster.
//!
//! The computation is a pipeline of three pure steps: VM resources of all hosts are summed into
//! [`ResourceTotals`](core::aggregator::ResourceTotals), the totals are turned into a per-instance
//! [`AverageProfile`](core::cluster_profile::AverageProfile), and finally each host's capacity is
//! divided by that profile, producing a [`HostProfile`](core::host_profiler::HostProfile).

pub mod core;

pub use crate::core::aggregator::{aggregate, ResourceTotals};
pub use crate::core::cluster_profile::{derive_averages, profile_cluster, AverageProfile, ClusterVmProfile};
pub use crate::core::config::ClusterConfig;
pub use crate::core::error::{ProfilingError, Result};
pub use crate::core::host_profiler::{profile, HostProfile, HostProfiler};
pub use crate::core::inventory::ClusterInventory;
pub use crate::core::resources::{HostResources, ResourceDimension, VmResources};
pub use crate::core::units::{Bytes, Megabytes};
