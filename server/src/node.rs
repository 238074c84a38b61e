//! Node diagnostics for `/api/nodeinfo` and `/healthz`.
//!
//! Memory figures come from `sysinfo`, reported in MiB for the node snapshot
//! and in bytes for the health body:
//! - `maxMemoryMB`: total physical memory
//! - `totalMemoryMB`: memory currently in use
//! - `freeMemoryMB`: memory available for new allocations

use sysinfo::System;
use wire::{Health, NodeInfo};

use crate::clock::now_rfc3339;

const BYTES_PER_MIB: u64 = 1024 * 1024;
const UNKNOWN: &str = "unknown";

/// Raw memory counters in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryFigures {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl MemoryFigures {
    #[must_use]
    pub fn sample() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        Self { total: sys.total_memory(), used: sys.used_memory(), available: sys.available_memory() }
    }
}

/// Take a snapshot of the current node.
#[must_use]
pub fn snapshot(app: &str) -> NodeInfo {
    build_node_info(
        app,
        System::host_name(),
        System::name(),
        System::os_version().or_else(System::kernel_version),
        MemoryFigures::sample(),
        now_rfc3339(),
    )
}

pub(crate) fn build_node_info(
    app: &str,
    hostname: Option<String>,
    os_name: Option<String>,
    os_version: Option<String>,
    memory: MemoryFigures,
    timestamp: String,
) -> NodeInfo {
    NodeInfo {
        hostname: hostname.unwrap_or_else(|| UNKNOWN.to_owned()),
        app: app.to_owned(),
        os_name: os_name.unwrap_or_else(|| UNKNOWN.to_owned()),
        os_version: os_version.unwrap_or_else(|| UNKNOWN.to_owned()),
        os_arch: std::env::consts::ARCH.to_owned(),
        available_processors: std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
        max_memory_mb: memory.total / BYTES_PER_MIB,
        total_memory_mb: memory.used / BYTES_PER_MIB,
        free_memory_mb: memory.available / BYTES_PER_MIB,
        timestamp,
    }
}

/// Liveness body for `/healthz`.
#[must_use]
pub fn health(memory: MemoryFigures) -> Health {
    Health { status: "UP".to_owned(), free_memory: memory.available, total_memory: memory.total }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
