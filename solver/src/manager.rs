use std::{
    io,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    thread::JoinHandle,
    time::Instant,
};

use core_affinity::CoreId;
use shared::{
    errors::{SolverError, SolverResult},
    types::{Challenge, ChallengeReport},
};
use tracing::*;

use crate::{
    config::{SearchConfig, ThreadCount},
    container::Container,
    distributor::{partition, SearchCursor, Strategy, WorkSource},
    thread::{WorkerDescriptor, WorkerTask},
};

/// Runs one full search per challenge on a fresh pool of worker threads.
pub struct ChallengeRunner {
    threads: usize,
    strategy: Strategy,
    space: u64,
    cores: Option<usize>,
}

impl ChallengeRunner {
    pub fn new(threads: ThreadCount, config: &SearchConfig) -> Self {
        Self {
            threads: threads.get(),
            strategy: config.strategy,
            space: config.space,
            cores: config.pin_cores.then(num_cpus::get),
        }
    }

    pub fn solve(&self, challenge: Challenge) -> SolverResult<ChallengeReport> {
        self.solve_with(challenge, WorkerTask::spawn)
    }

    /// Same as [`solve`](Self::solve) with the thread spawner supplied by the caller.
    pub(crate) fn solve_with<F>(&self, challenge: Challenge, mut spawn: F) -> SolverResult<ChallengeReport>
    where
        F: FnMut(WorkerTask) -> io::Result<JoinHandle<()>>, {
        debug!("challenge {challenge}: init, {} workers, {:?}", self.threads, self.strategy);

        let container = Arc::new(Container::default());
        let cursor = match self.strategy {
            Strategy::Static => None,
            Strategy::Dynamic => Some(Arc::new(SearchCursor::new(self.space))),
        };
        let probed = Arc::new(AtomicU64::new(0));
        let start = Instant::now();

        let mut handles = Vec::with_capacity(self.threads);
        for ordinal in 0..self.threads {
            let source = match &cursor {
                Some(cursor) => WorkSource::Cursor(cursor.clone()),
                None => WorkSource::Range(partition(ordinal, self.threads, self.space)),
            };

            let task = WorkerTask {
                descriptor: WorkerDescriptor {
                    ordinal,
                    workers: self.threads,
                    challenge,
                },
                container: container.clone(),
                source,
                probed: probed.clone(),
                core: self.cores.map(|cores| CoreId {
                    id: ordinal % cores,
                }),
            };

            match spawn(task) {
                Ok(handle) => handles.push((ordinal, handle)),
                Err(source) => {
                    error!("challenge {challenge}: failed to spawn worker {ordinal}: {source}");
                    // a partial pool is meaningless, stop the spawned workers
                    container.close();
                    join_all(handles)?;
                    return Err(SolverError::SpawnWorker {
                        ordinal,
                        source,
                    });
                }
            }
        }

        debug!("challenge {challenge}: running");
        join_all(handles)?;
        debug!("challenge {challenge}: drained, {} solutions", container.len());

        if let Some(cursor) = &cursor {
            trace!("challenge {challenge}: cursor stopped at {}", cursor.position());
        }

        let elapsed = start.elapsed().as_secs_f64();
        let probed = probed.load(Ordering::Relaxed);
        // every worker has joined, the registry is normally no longer shared
        let solutions =
            Arc::try_unwrap(container).map_or_else(|shared| shared.snapshot(), Container::into_solutions);

        info!(
            "challenge {challenge}: {} solutions, {probed} candidates in {elapsed:.3}s, {:.2} H/s",
            solutions.len(),
            probed as f64 / elapsed.max(f64::EPSILON)
        );

        Ok(ChallengeReport::new(challenge, solutions))
    }
}

pub(crate) fn join_all(handles: Vec<(usize, JoinHandle<()>)>) -> SolverResult<()> {
    let mut panicked = None;
    for (ordinal, handle) in handles {
        if handle.join().is_err() {
            error!("worker {ordinal} panicked");
            panicked.get_or_insert(ordinal);
        }
    }
    match panicked {
        Some(ordinal) => Err(SolverError::WorkerPanicked(ordinal)),
        None => Ok(()),
    }
}
