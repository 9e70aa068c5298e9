//! Cooperative frame loop.
//!
//! Each frame callback gets the time elapsed since the previous frame (zero on the first one)
//! and answers whether the loop should keep going. The host only re-arms the next frame when
//! the answer was `true`; after a `false` the callback is never invoked again.

use std::time::{Duration, Instant};

/// Host primitive: "call me back on the next display refresh".
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    last_frame: Option<Instant>,
    frames: u64,
    stopped: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Number of callbacks invoked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame at `now`. Returns whether the host should schedule another one.
    ///
    /// Once stopped, further ticks do nothing and return `false`.
    pub fn tick<F>(&mut self, now: Instant, mut frame: F) -> bool
    where
        F: FnMut(Duration) -> bool,
    {
        if self.stopped {
            return false;
        }

        let elapsed = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.frames += 1;

        if !frame(elapsed) {
            self.stopped = true;
            return false;
        }
        true
    }

    /// Like `tick`, and re-arms `scheduler` when the loop continues.
    pub fn tick_and_schedule<S, F>(&mut self, now: Instant, scheduler: &mut S, frame: F) -> bool
    where
        S: FrameScheduler + ?Sized,
        F: FnMut(Duration) -> bool,
    {
        let keep_going = self.tick(now, frame);
        if keep_going {
            scheduler.request_frame();
        }
        keep_going
    }

    /// Starts the loop by asking `scheduler` for the first frame.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if !self.stopped {
            scheduler.request_frame();
        }
    }
}

/// Elapsed frame time in milliseconds.
pub fn elapsed_ms(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Scheduler driven by hand; used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Consumes the pending request, if any.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Delivers frames at a fixed `step` until the loop stops or `max_frames` ran.
    /// Returns how many frames were delivered.
    pub fn run<F>(
        &mut self,
        frame_loop: &mut FrameLoop,
        start: Instant,
        step: Duration,
        max_frames: usize,
        mut frame: F,
    ) -> usize
    where
        F: FnMut(Duration) -> bool,
    {
        frame_loop.start(self);

        let mut now = start;
        let mut delivered = 0;
        while delivered < max_frames && self.take_pending() {
            frame_loop.tick_and_schedule(now, self, &mut frame);
            delivered += 1;
            now += step;
        }
        delivered
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}
