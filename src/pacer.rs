/*
 * Frame Pacer Module
 *
 * Blocks the simulation thread until the next tick boundary. The loop may run
 * slower than the target rate under load, but never faster. When a frame
 * overruns, the schedule is re-anchored to "now" instead of bursting through
 * the missed ticks.
 */

use std::time::{Duration, Instant};

pub trait Pacer {
    fn wait(&mut self);
}

pub struct FramePacer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: f32) -> Self {
        Self::with_interval(Duration::from_secs_f32(1.0 / fps))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FramePacer {
    fn wait(&mut self) {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            // First frame: nothing to wait for
            None => {
                self.next_deadline = Some(now + self.interval);
                return;
            }
            Some(deadline) => deadline,
        };

        if now < deadline {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.interval);
        } else {
            log::trace!("frame overran by {:?}", now - deadline);
            self.next_deadline = Some(now + self.interval);
        }
    }
}
