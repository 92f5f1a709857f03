//! Resources of hosts and the VMs running on them.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_non_negative, Result};
use crate::core::units::{Bytes, Megabytes};

/// Resource dimension along which hosts are profiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceDimension {
    Cpus,
    CpuSpeed,
    Memory,
}

impl ResourceDimension {
    /// Name of the average profile field of this dimension, used in validation errors.
    pub fn average_field(self) -> &'static str {
        match self {
            ResourceDimension::Cpus => "average cpus",
            ResourceDimension::CpuSpeed => "average cpu speed",
            ResourceDimension::Memory => "average memory",
        }
    }
}

impl Display for ResourceDimension {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ResourceDimension::Cpus => write!(f, "cpus"),
            ResourceDimension::CpuSpeed => write!(f, "cpu_speed"),
            ResourceDimension::Memory => write!(f, "memory"),
        }
    }
}

/// Resources allocated to a single running VM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VmResources {
    /// Number of virtual CPUs.
    pub cpus: u32,
    /// CPU clock speed in MHz.
    pub speed: f64,
    /// Memory size.
    pub memory: Megabytes,
}

impl VmResources {
    pub fn new(cpus: u32, speed: f64, memory: Megabytes) -> Self {
        Self { cpus, speed, memory }
    }

    /// Checks that speed and memory are non-negative finite numbers.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("vm cpu speed", self.speed)?;
        ensure_non_negative("vm memory", self.memory.value())?;
        Ok(())
    }
}

/// Physical host capacity together with the VMs it currently runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostResources {
    pub name: Option<String>,
    /// Number of physical CPUs.
    pub cpus: u32,
    /// CPU clock speed in MHz.
    pub speed: f64,
    pub cpu_overprovisioning: f64,
    pub total_memory: Bytes,
    pub memory_overprovisioning: f64,
    pub vms: Vec<VmResources>,
}

impl HostResources {
    /// Creates host without VMs and with overprovisioning factors set to 1.
    pub fn new(cpus: u32, speed: f64, total_memory: Bytes) -> Self {
        Self {
            name: None,
            cpus,
            speed,
            cpu_overprovisioning: 1.,
            total_memory,
            memory_overprovisioning: 1.,
            vms: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_cpu_overprovisioning(mut self, factor: f64) -> Self {
        self.cpu_overprovisioning = factor;
        self
    }

    pub fn with_memory_overprovisioning(mut self, factor: f64) -> Self {
        self.memory_overprovisioning = factor;
        self
    }

    pub fn with_vm(mut self, vm: VmResources) -> Self {
        self.vms.push(vm);
        self
    }

    /// Returns host name for logging, `<unnamed>` if the host has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// CPU speed available to VMs, i.e. raw speed scaled by CPU overprovisioning.
    pub fn effective_speed(&self) -> f64 {
        self.speed * self.cpu_overprovisioning
    }

    /// Memory available to VMs: total memory converted to megabytes, then scaled by memory
    /// overprovisioning.
    pub fn effective_memory(&self) -> Megabytes {
        self.total_memory.to_megabytes() * self.memory_overprovisioning
    }

    /// Checks host speed and overprovisioning factors. Hosted VMs are validated separately
    /// during aggregation.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("host cpu speed", self.speed)?;
        ensure_non_negative("host cpu overprovisioning", self.cpu_overprovisioning)?;
        ensure_non_negative("host memory overprovisioning", self.memory_overprovisioning)?;
        Ok(())
    }
}
