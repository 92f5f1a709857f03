//! Cluster snapshot configuration.

use serde::{Deserialize, Serialize};

use crate::core::error::{ProfilingError, Result};
use crate::core::inventory::ClusterInventory;
use crate::core::resources::{HostResources, VmResources};
use crate::core::units::Bytes;

/// Holds raw cluster config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawClusterConfig {
    pub cpu_overprovisioning: Option<f64>,
    pub memory_overprovisioning: Option<f64>,
    pub hosts: Option<Vec<HostConfig>>,
}

/// Holds configuration of a single physical host or a set of identical hosts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HostConfig {
    /// Host name.
    /// Should be set if count = 1.
    pub name: Option<String>,
    /// Host name prefix.
    /// Full name is produced by appending host instance number (starting from 1) to the prefix.
    /// Should be set if count > 1, otherwise the instance number is appended to `name`.
    pub name_prefix: Option<String>,
    /// Number of physical CPUs.
    pub cpus: u32,
    /// CPU clock speed in MHz.
    pub speed: f64,
    /// Total memory in bytes.
    pub memory: Bytes,
    /// Overrides cluster-wide CPU overprovisioning factor.
    pub cpu_overprovisioning: Option<f64>,
    /// Overrides cluster-wide memory overprovisioning factor.
    pub memory_overprovisioning: Option<f64>,
    /// VMs running on the host (on each host if count > 1).
    #[serde(default)]
    pub vms: Vec<VmResources>,
    /// Number of such hosts.
    pub count: Option<u32>,
}

/// Represents cluster snapshot configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClusterConfig {
    /// CPU overprovisioning factor of hosts which do not set their own.
    pub cpu_overprovisioning: f64,
    /// Memory overprovisioning factor of hosts which do not set their own.
    pub memory_overprovisioning: f64,
    /// Configurations of physical hosts.
    pub hosts: Vec<HostConfig>,
}

impl ClusterConfig {
    /// Creates cluster config by reading parameter values from YAML file
    /// (uses default values if some parameters are absent).
    pub fn from_file(file_name: &str) -> Result<Self> {
        let data = std::fs::read_to_string(file_name).map_err(|source| ProfilingError::ConfigRead {
            path: file_name.to_string(),
            source,
        })?;
        Self::from_yaml(&data)
    }

    /// Creates cluster config from YAML string.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let raw: RawClusterConfig = serde_yaml::from_str(data)?;
        Ok(Self {
            cpu_overprovisioning: raw.cpu_overprovisioning.unwrap_or(1.),
            memory_overprovisioning: raw.memory_overprovisioning.unwrap_or(1.),
            hosts: raw.hosts.unwrap_or_default(),
        })
    }

    /// Returns the number of hosts described by config, taking host counts into account.
    pub fn number_of_hosts(&self) -> u32 {
        self.hosts.iter().map(|host| host.count.unwrap_or(1)).sum()
    }
}

impl HostConfig {
    fn host_name(&self, instance: u32) -> Option<String> {
        match (self.count.unwrap_or(1), &self.name, &self.name_prefix) {
            (1, Some(name), _) => Some(name.clone()),
            (_, _, Some(prefix)) => Some(format!("{}{}", prefix, instance)),
            (_, Some(name), None) => Some(format!("{}{}", name, instance)),
            (_, None, None) => None,
        }
    }

    fn build(&self, instance: u32, cluster: &ClusterConfig) -> HostResources {
        HostResources {
            name: self.host_name(instance),
            cpus: self.cpus,
            speed: self.speed,
            cpu_overprovisioning: self.cpu_overprovisioning.unwrap_or(cluster.cpu_overprovisioning),
            total_memory: self.memory,
            memory_overprovisioning: self.memory_overprovisioning.unwrap_or(cluster.memory_overprovisioning),
            vms: self.vms.clone(),
        }
    }
}

impl ClusterInventory for ClusterConfig {
    fn hosts(&self) -> Vec<HostResources> {
        let mut hosts = Vec::new();
        for host in &self.hosts {
            for instance in 1..=host.count.unwrap_or(1) {
                hosts.push(host.build(instance, self));
            }
        }
        hosts
    }
}
