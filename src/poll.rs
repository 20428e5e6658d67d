//! Background feed polling.
//!
//! Runs on a dedicated thread that asks the feed loader for a fresh snapshot
//! on a timer.  Results are delivered by the loader's completion, which may
//! run on a transport task rather than this thread, and are forwarded to the
//! UI thread over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The poller never waits for a load to finish before sleeping.  A slow
//! transport can therefore have more than one load in flight; each one
//! reports independently, in whatever order they complete.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use livescroll_feed::source::{FeedLoader, LoadResult};

/// Messages sent from the poller to the UI thread.
#[derive(Debug)]
pub enum PollMsg {
    /// A load was just issued.
    Loading,
    /// A load finished with this result.
    Loaded(LoadResult),
}

/// Spawn the background polling thread.
///
/// Returns a receiver that the main loop should drain on every tick.  The
/// thread stops once the receiver is dropped, and drops `loader` with it, so
/// any load still in flight is never reported.
pub fn spawn(loader: Box<dyn FeedLoader>, interval: Duration) -> mpsc::Receiver<PollMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
        // If the receiver is gone the main thread has exited;
        // silently stop polling.
        if tx.send(PollMsg::Loading).is_err() {
            debug!("poll receiver dropped, stopping");
            return;
        }

        let results = tx.clone();
        loader.load(Box::new(move |result| {
            let _ = results.send(PollMsg::Loaded(result));
        }));

        thread::sleep(interval);
    });

    rx
}
