use std::{
    io,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    thread::{Builder, JoinHandle},
};

use core_affinity::CoreId;
use shared::types::Challenge;
use tracing::*;

use crate::{
    container::{Acceptance, Container},
    distributor::WorkSource,
    filter,
    hash,
};

/// Identity of one worker, fixed for the lifetime of its thread.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkerDescriptor {
    pub ordinal: usize,
    pub workers: usize,
    pub challenge: Challenge,
}

pub(crate) struct WorkerTask {
    pub descriptor: WorkerDescriptor,
    pub container: Arc<Container>,
    pub source: WorkSource,
    pub probed: Arc<AtomicU64>,
    pub core: Option<CoreId>,
}

impl WorkerTask {
    pub(crate) fn spawn(self) -> io::Result<JoinHandle<()>> {
        Builder::new().name(format!("worker-{}", self.descriptor.ordinal)).spawn(move || self.run())
    }

    pub(crate) fn run(mut self) {
        let WorkerDescriptor {
            ordinal,
            workers,
            challenge,
        } = self.descriptor;

        if let Some(core) = self.core {
            // bound thread to core
            if !core_affinity::set_for_current(core) {
                warn!("worker {ordinal}: failed to pin to core {}", core.id);
            }
        }

        trace!("worker {ordinal}/{workers} start, challenge {challenge}, source {:?}", self.source);

        let mut probed = 0u64;
        while !self.container.is_full() {
            let Some(candidate) = self.source.next_candidate() else {
                break;
            };
            probed += 1;

            // the digest rejects almost everything, check it first
            if !hash::matches(challenge, candidate) || !filter::passes(candidate) {
                continue;
            }

            if let Acceptance::Full = self.container.try_accept(candidate) {
                break;
            }
        }

        self.probed.fetch_add(probed, Ordering::Relaxed);
        trace!("worker {ordinal} done, probed {probed}");
    }
}
