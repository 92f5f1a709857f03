//! Memory units.
//!
//! Hosts report memory in bytes while VMs report it in megabytes. Both quantities have their own
//! type so that the conversion is always explicit.

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// Number of bytes in a megabyte (decimal).
pub const BYTES_IN_MEGABYTE: u64 = 1_000_000;

/// Memory amount in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bytes(pub u64);

/// Memory amount in megabytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megabytes(pub f64);

impl Bytes {
    pub fn to_megabytes(self) -> Megabytes {
        Megabytes(self.0 as f64 / BYTES_IN_MEGABYTE as f64)
    }
}

impl Megabytes {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Megabytes {
    type Output = Megabytes;

    fn add(self, rhs: Megabytes) -> Megabytes {
        Megabytes(self.0 + rhs.0)
    }
}

impl AddAssign for Megabytes {
    fn add_assign(&mut self, rhs: Megabytes) {
        self.0 += rhs.0;
    }
}

/// Scales memory by a dimensionless factor, e.g. overprovisioning.
impl Mul<f64> for Megabytes {
    type Output = Megabytes;

    fn mul(self, rhs: f64) -> Megabytes {
        Megabytes(self.0 * rhs)
    }
}

impl Display for Megabytes {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} MB", self.0)
    }
}
