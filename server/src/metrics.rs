//! Operation counters exposed at `/api/metrics`.
//!
//! DESIGN
//! ======
//! One set of relaxed atomics per process, labelled with the active store
//! type when snapshotted. Counters only move on successful store calls.

use std::sync::atomic::{AtomicU64, Ordering};

use wire::{MetricsSnapshot, OperationCounts};

use crate::store::StoreKind;

#[derive(Debug, Default)]
pub struct QuoteMetrics {
    create: AtomicU64,
    read: AtomicU64,
    delete: AtomicU64,
}

impl QuoteMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_create(&self) {
        self.create.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_read(&self) {
        self.read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.delete.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self, kind: StoreKind) -> MetricsSnapshot {
        MetricsSnapshot {
            store: kind.as_str().to_owned(),
            operations: OperationCounts {
                create: self.create.load(Ordering::Relaxed),
                read: self.read.load(Ordering::Relaxed),
                delete: self.delete.load(Ordering::Relaxed),
            },
        }
    }
}
