use std::time::{Duration, Instant};

/// The host's frame timing. The render loop calls it once after every tick.
pub trait FrameClock {
    fn wait_for_next_frame(&mut self);
}

/// Sleeps until the first frame boundary that lies at least `min_delay` ahead.
#[derive(Debug)]
pub struct IntervalClock {
    epoch: Instant,
    frame_interval: Duration,
    min_delay: Duration,
}

impl IntervalClock {
    pub fn new(frame_interval: Duration, min_delay: Duration) -> Self {
        Self {
            epoch: Instant::now(),
            frame_interval,
            min_delay,
        }
    }

    /// Next boundary of the frame grid at or after `earliest`.
    pub fn next_boundary(&self, earliest: Instant) -> Instant {
        let interval = self.frame_interval.as_nanos();
        if interval == 0 {
            return earliest;
        }

        let elapsed = earliest.saturating_duration_since(self.epoch).as_nanos();
        let frames = (elapsed + interval - 1) / interval;

        self.epoch + Duration::from_nanos((frames * interval) as u64)
    }
}

impl FrameClock for IntervalClock {
    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        let wake = self.next_boundary(now + self.min_delay);

        std::thread::sleep(wake.saturating_duration_since(now));
    }
}

/// Never waits. For headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateClock;

impl FrameClock for ImmediateClock {
    fn wait_for_next_frame(&mut self) {}
}

impl<T: FrameClock + ?Sized> FrameClock for Box<T> {
    fn wait_for_next_frame(&mut self) {
        (**self).wait_for_next_frame()
    }
}
