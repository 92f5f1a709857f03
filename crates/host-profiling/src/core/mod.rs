pub mod aggregator;
pub mod cluster_profile;
pub mod config;
pub mod error;
pub mod host_profiler;
pub mod inventory;
pub mod resources;
pub mod units;
