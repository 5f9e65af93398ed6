//! Off-thread puzzle generation
//!
//! A worker thread runs the generator and sends its result back over a
//! channel. Only the owner of the [`BackgroundGenerator`] can collect the
//! result, so the game state it feeds keeps a single writer.

use super::engine::{GenerateError, Generated, GeneratorConfig, PuzzleGenerator};
use super::selector::RandomSelector;
use crate::wordlists::Dictionary;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::debug;

type GenerationResult = Result<Generated, GenerateError>;

struct Job {
    cancel: Arc<AtomicBool>,
    receiver: Receiver<GenerationResult>,
}

impl Job {
    fn spawn(dictionary: Arc<Dictionary>, config: GeneratorConfig, seed: Option<u64>) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, receiver) = mpsc::channel();

        let flag = Arc::clone(&cancel);
        thread::spawn(move || {
            let generator = PuzzleGenerator::new(&dictionary, config);
            let mut selector = RandomSelector::from_seed_option(seed);
            let result = generator.search(&mut selector, Some(&flag));
            // The receiver is gone if this job was superseded
            let _ = tx.send(result);
        });

        Self { cancel, receiver }
    }

    fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Runs at most one generation at a time on a worker thread
pub struct BackgroundGenerator {
    dictionary: Arc<Dictionary>,
    config: GeneratorConfig,
    job: Option<Job>,
}

impl BackgroundGenerator {
    pub const fn new(dictionary: Arc<Dictionary>, config: GeneratorConfig) -> Self {
        Self {
            dictionary,
            config,
            job: None,
        }
    }

    /// Whether a generation has been requested and its result not yet taken
    #[inline]
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.job.is_some()
    }

    /// Start generating unless a generation is already in flight
    ///
    /// Returns `false` (and does nothing) if one is in flight.
    pub fn request(&mut self, seed: Option<u64>) -> bool {
        if self.is_generating() {
            debug!("generation already in progress");
            return false;
        }
        self.start(seed);
        true
    }

    /// Cancel any in-flight generation and start a new one
    pub fn restart(&mut self, seed: Option<u64>) {
        self.cancel();
        self.start(seed);
    }

    /// Cancel the in-flight generation, discarding its result
    pub fn cancel(&mut self) {
        if let Some(job) = self.job.take() {
            debug!("cancelling in-flight generation");
            job.cancel();
        }
    }

    /// Collect the result if the worker has finished
    ///
    /// Returns `None` while still generating or when nothing was requested.
    pub fn try_take(&mut self) -> Option<GenerationResult> {
        let job = self.job.as_ref()?;
        let result = match job.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(GenerateError::WorkerLost),
        };
        self.job = None;
        Some(result)
    }

    /// Block until the in-flight generation finishes
    ///
    /// Returns `None` when nothing was requested.
    pub fn wait(&mut self) -> Option<GenerationResult> {
        let job = self.job.take()?;
        Some(job.receiver.recv().unwrap_or(Err(GenerateError::WorkerLost)))
    }

    fn start(&mut self, seed: Option<u64>) {
        debug!(?seed, "starting background generation");
        self.job = Some(Job::spawn(
            Arc::clone(&self.dictionary),
            self.config,
            seed,
        ));
    }
}

impl Drop for BackgroundGenerator {
    fn drop(&mut self) {
        self.cancel();
    }
}
