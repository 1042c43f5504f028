use std::time::Duration;
use web_time::Instant;

/// Wall-clock game timer: runs while playing, frozen once stopped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Only the first start counts; restarting a stopped watch needs [`Stopwatch::reset`].
    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn stop_at(&mut self, now: Instant) {
        if self.is_running() {
            self.frozen = Some(self.elapsed_at(now));
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.frozen.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match (self.started_at, self.frozen) {
            (_, Some(frozen)) => frozen,
            (Some(started_at), None) => now.saturating_duration_since(started_at),
            (None, None) => Duration::ZERO,
        }
    }
}

/// Formats a duration as `MM:SS`; minutes keep growing past 99.
pub fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
