//! Resolution provenance for a single entity pool.

/// How a pool came to hold its records.
///
/// Callers degrade gracefully either way — a degraded pool is just smaller than
/// requested — but the distinction lets tests and logs tell "genuinely empty"
/// apart from "failed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    /// The backend already met the target; records are the first `target` returned.
    Satisfied,
    /// The backend was below target and records were generated to top it up.
    Generated {
        created: usize,
        failed_attempts: usize,
    },
    /// The read failed and nothing could be generated; the pool is empty.
    Degraded,
}

#[derive(Debug, Clone)]
pub struct PoolOutcome<T> {
    pub records: Vec<T>,
    pub source: PoolSource,
}

impl<T> PoolOutcome<T> {
    pub fn satisfied(records: Vec<T>) -> Self {
        Self {
            records,
            source: PoolSource::Satisfied,
        }
    }

    pub fn generated(records: Vec<T>, created: usize, failed_attempts: usize) -> Self {
        Self {
            records,
            source: PoolSource::Generated {
                created,
                failed_attempts,
            },
        }
    }

    pub fn degraded() -> Self {
        Self {
            records: Vec::new(),
            source: PoolSource::Degraded,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.source == PoolSource::Degraded
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
