use crate::controllers::coordinator::events::{RenderEvent, RenderFault};
use crate::controllers::coordinator::frame_data::FrameData;
use crate::controllers::coordinator::ports::FramePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::render_request::RenderRequest;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    // holds at most the single most recent superseded request; writers
    // overwrite, the worker takes - last-writer-wins, never a queue
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter: Arc<dyn FramePresenterPort>,
}

/// Owns the session's single background render slot.
///
/// `submit_request` never blocks: while a job is in flight, newer requests
/// overwrite the pending slot and only the freshest one is rendered next. A
/// superseded job still runs to completion but its result is discarded at
/// delivery time, so the presenter only ever sees the latest request's frame.
///
/// Switching fractal kind is a teardown: drop (or `shutdown`) this
/// coordinator and construct a fresh one.
pub struct RenderCoordinator {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderCoordinator {
    #[must_use]
    pub fn new(presenter: Arc<dyn FramePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Fire-and-forget submission; returns the request's generation number.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut slot = self.shared.latest_request.lock().unwrap();
            if slot.is_some() {
                debug!("generation {} coalesced over a pending request", generation);
            }
            *slot = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Generation of the most recently finished job (frame or fault);
    /// 0 before anything completes.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    /// Stops the worker and waits for it. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut slot = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = slot.take() {
                        break job;
                    }

                    slot = shared.wake.wait(slot).unwrap();
                }
            };

            let started = Instant::now();
            let outcome = render_frame(&request);
            let render_duration = started.elapsed();

            // a kind switch tears the session down; whatever just finished
            // belongs to the old session and must not surface
            if shared.shutdown.load(Ordering::Acquire) {
                return;
            }

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("discarding superseded generation {}", job_generation);
                continue;
            }

            match outcome {
                Ok(pixel_buffer) => {
                    debug!(
                        "generation {} rendered {}x{} in {:?}",
                        job_generation,
                        pixel_buffer.width(),
                        pixel_buffer.height(),
                        render_duration
                    );

                    shared.presenter.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    }));
                }
                Err(error) => {
                    warn!("generation {} failed: {}", job_generation, error);

                    shared.presenter.present(RenderEvent::Fault(RenderFault {
                        generation: job_generation,
                        message: error.to_string(),
                    }));
                }
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for RenderCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
