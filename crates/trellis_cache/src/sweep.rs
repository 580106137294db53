//! Background expiry sweep for idle cache entries.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crate::cache::CacheState;
use crate::error::CacheError;

/// Handle to the recurring sweeper thread.
///
/// The sweeper fires every interval and removes entries idle for longer
/// than the interval. It shares the entry map through the cache's mutex,
/// so a firing never interleaves within a single cache operation. The
/// thread parks on a channel between firings and wakes immediately when
/// [`stop`](Self::stop) is called, so disposal never waits out an interval.
#[derive(Debug)]
pub(crate) struct Sweeper {
    stop_tx: mpsc::Sender<()>,
    handle: thread::JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweeper thread over the shared entry map.
    pub(crate) fn spawn<A>(
        state: Arc<Mutex<CacheState<A>>>,
        interval: Duration,
    ) -> Result<Sweeper, CacheError>
    where
        A: Send + Sync + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("trellis-cache-sweep".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        // Entries untouched for a full interval are idle.
                        let Some(cutoff) = Instant::now().checked_sub(interval) else {
                            continue;
                        };
                        let Ok(mut state) = state.lock() else {
                            break;
                        };
                        let removed = state.remove_idle(cutoff);
                        drop(state);
                        if removed > 0 {
                            log::trace!("swept {removed} idle document artifact(s)");
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })
            .map_err(|source| CacheError::Sweeper { source })?;

        Ok(Sweeper { stop_tx, handle })
    }

    /// Stops the thread and waits for it to exit.
    pub(crate) fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}
