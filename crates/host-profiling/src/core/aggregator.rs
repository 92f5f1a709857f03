//! Summation of VM resources over a cluster snapshot.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_finite, Result};
use crate::core::resources::{HostResources, ResourceDimension, VmResources};
use crate::core::units::Megabytes;

/// Cluster-wide sums of resources allocated to VMs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub number_of_instances: u64,
    pub total_cpus: u64,
    /// Sum of VM CPU speeds in MHz.
    pub total_cpu_speed: f64,
    pub total_memory: Megabytes,
}

impl ResourceTotals {
    /// Creates empty totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts one more VM instance. The VM is validated before anything is added, and the
    /// totals are left untouched if a sum would overflow.
    pub fn add_vm(&mut self, vm: &VmResources) -> Result<()> {
        vm.validate()?;
        let total_cpu_speed = ensure_finite(ResourceDimension::CpuSpeed, self.total_cpu_speed + vm.speed)?;
        let total_memory = ensure_finite(ResourceDimension::Memory, (self.total_memory + vm.memory).value())?;
        self.number_of_instances += 1;
        self.total_cpus += vm.cpus as u64;
        self.total_cpu_speed = total_cpu_speed;
        self.total_memory = Megabytes(total_memory);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_instances == 0
    }
}

impl Add for ResourceTotals {
    type Output = ResourceTotals;

    fn add(mut self, rhs: ResourceTotals) -> ResourceTotals {
        self += rhs;
        self
    }
}

impl AddAssign for ResourceTotals {
    fn add_assign(&mut self, rhs: ResourceTotals) {
        self.number_of_instances += rhs.number_of_instances;
        self.total_cpus += rhs.total_cpus;
        self.total_cpu_speed += rhs.total_cpu_speed;
        self.total_memory += rhs.total_memory;
    }
}

impl Sum for ResourceTotals {
    fn sum<I: Iterator<Item = ResourceTotals>>(iter: I) -> Self {
        iter.fold(ResourceTotals::new(), |acc, x| acc + x)
    }
}

/// Sums resources of all VMs running on the given hosts.
///
/// Fails with `InvalidInput` on the first VM with a negative or non-finite speed or memory, and
/// with `Overflow` if the CPU speed or memory sum leaves the finite range.
pub fn aggregate(hosts: &[HostResources]) -> Result<ResourceTotals> {
    let mut totals = ResourceTotals::new();
    for host in hosts {
        for vm in &host.vms {
            totals.add_vm(vm)?;
        }
    }
    debug!(
        "aggregated {} VMs from {} hosts: cpus={}, cpu_speed={}, memory={}",
        totals.number_of_instances,
        hosts.len(),
        totals.total_cpus,
        totals.total_cpu_speed,
        totals.total_memory
    );
    Ok(totals)
}
