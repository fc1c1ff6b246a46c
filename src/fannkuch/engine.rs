//! Parallel coordinator: partitions the index space into even-aligned
//! slices, dispatches them on an owned rayon pool, and reduces.

use rayon::prelude::*;
use std::sync::OnceLock;

use crate::error::FannkuchError;
use crate::fannkuch::factorial::index_space;
use crate::fannkuch::task::{SliceOutcome, evaluate_slice};

/// Below this many permutations, parallel dispatch overhead dominates and
/// the whole space runs as a single task. Tuning knob, not a correctness
/// requirement.
const DEFAULT_MIN_TASK_SIZE: u64 = 20_000;

static PHYSICAL_CORES: OnceLock<usize> = OnceLock::new();

#[inline]
fn physical_core_count() -> usize {
    *PHYSICAL_CORES.get_or_init(|| num_cpus::get_physical().max(1))
}

/// Resolve the worker count from a config, falling back to auto-detect.
fn resolve_thread_count(config: &FannkuchConfig) -> usize {
    let mut threads = config.thread_count.unwrap_or_else(physical_core_count);
    if let Some(cap) = config.max_threads {
        threads = threads.min(cap);
    }
    threads.max(1)
}

/// Split `[0, total)` into per-worker slices: `ceil(total / workers)`
/// rounded up to even, last slice clipped to `total`.
///
/// Every slice start is a multiple of the even task size, so the pairing
/// invariant of `evaluate_slice` holds for every emitted slice. Collapses
/// to one slice when a single worker is requested or the space is small.
fn partition(total: u64, workers: usize, min_task_size: u64) -> Vec<(u64, u64)> {
    if workers <= 1 || total < min_task_size {
        return vec![(0, total)];
    }
    let mut task_size = total.div_ceil(workers as u64);
    if task_size % 2 == 1 {
        task_size += 1;
    }

    let mut slices = Vec::with_capacity(workers);
    let mut start = 0;
    while start < total {
        let size = task_size.min(total - start);
        slices.push((start, size));
        start += size;
    }
    slices
}

/// Configuration for a fannkuch engine instance.
///
/// Use `FannkuchConfig::default()` for auto-tuned defaults, or customise
/// individual knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct FannkuchConfig {
    /// Number of worker threads for the compute pool.
    /// `None` means auto-detect (physical cores).
    pub thread_count: Option<usize>,
    /// Hard upper bound on threads regardless of auto-detection.
    pub max_threads: Option<usize>,
    /// Index-space size below which the run collapses to a single task.
    /// `None` means the built-in threshold.
    pub min_task_size: Option<u64>,
}

impl FannkuchConfig {
    /// Set an explicit worker count for the compute pool.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on threads.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }

    /// Set the single-task fallback threshold.
    pub fn min_task_size(mut self, size: u64) -> Self {
        self.min_task_size = Some(size);
        self
    }
}

/// The parallel fannkuch engine. Owns its thread pool; each dispatched
/// slice owns its permutation buffers, so workers share no mutable state
/// and the only synchronization point is the final reduce.
pub struct Fannkuch {
    pool: rayon::ThreadPool,
    threads: usize,
    min_task_size: u64,
}

impl Default for Fannkuch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fannkuch {
    pub fn new() -> Self {
        Self::with_config(FannkuchConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(config: FannkuchConfig) -> Self {
        let threads = resolve_thread_count(&config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build fannkuch rayon thread pool");
        Self {
            pool,
            threads,
            min_task_size: config.min_task_size.unwrap_or(DEFAULT_MIN_TASK_SIZE),
        }
    }

    /// Resolved worker count.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Compute the checksum and maximum flip count over all `n!`
    /// permutations of `0..n`.
    ///
    /// A failed slice fails the whole run: the reduction is fallible, so a
    /// missing contribution can never produce a plausible-looking checksum.
    pub fn run(&self, n: usize) -> Result<SliceOutcome, FannkuchError> {
        let total = index_space(n)?;
        let slices = partition(total, self.threads, self.min_task_size);
        if slices.len() == 1 {
            let (start, size) = slices[0];
            return evaluate_slice(n, start, size);
        }

        self.pool.install(|| {
            slices
                .into_par_iter()
                .map(|(start, size)| evaluate_slice(n, start, size))
                .try_reduce(SliceOutcome::default, |a, b| Ok(a.merge(b)))
        })
    }
}
