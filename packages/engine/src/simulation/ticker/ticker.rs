//! Ticker - the single repeating trigger behind play/pause
//!
//! JS drives time: its animation loop calls `tick(now_ms)` with a
//! monotonic timestamp. The ticker decides whether a generation is due.
//! There is exactly one per controller, so arming it twice cannot start
//! a second timer, and a disarmed ticker never fires.

pub(crate) struct Ticker {
    interval_ms: f64,
    armed: bool,
    last_fire_ms: Option<f64>,
}

impl Ticker {
    pub(crate) fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            armed: false,
            last_fire_ms: None,
        }
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.armed
    }

    pub(crate) fn interval_ms(&self) -> u32 {
        self.interval_ms as u32
    }

    pub(crate) fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms as f64;
    }

    /// Returns false if already armed; the running schedule is kept.
    pub(crate) fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        self.last_fire_ms = None;
        true
    }

    /// Returns false if it was not armed.
    pub(crate) fn disarm(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.last_fire_ms = None;
        was_armed
    }

    /// True when a generation is due at `now_ms`.
    ///
    /// The first poll after arming only starts the clock, like a
    /// `setInterval` whose first callback comes one interval later. A
    /// late poll fires once; missed intervals are dropped, not replayed.
    pub(crate) fn poll(&mut self, now_ms: f64) -> bool {
        if !self.armed {
            return false;
        }
        match self.last_fire_ms {
            None => {
                self.last_fire_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last >= self.interval_ms => {
                self.last_fire_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_ticker_never_fires() {
        let mut ticker = Ticker::new(100);
        assert!(!ticker.poll(0.0));
        assert!(!ticker.poll(1_000.0));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut ticker = Ticker::new(100);
        ticker.arm();
        assert!(!ticker.poll(0.0));
        assert!(!ticker.poll(50.0));
        assert!(ticker.poll(100.0));
        assert!(!ticker.poll(150.0));
        assert!(ticker.poll(200.0));
    }

    #[test]
    fn late_poll_does_not_replay_missed_ticks() {
        let mut ticker = Ticker::new(100);
        ticker.arm();
        ticker.poll(0.0);
        assert!(ticker.poll(550.0));
        assert!(!ticker.poll(560.0));
        assert!(ticker.poll(650.0));
    }

    #[test]
    fn arming_twice_keeps_the_schedule() {
        let mut ticker = Ticker::new(100);
        assert!(ticker.arm());
        ticker.poll(0.0);
        assert!(!ticker.arm());
        assert!(ticker.poll(100.0));
    }

    #[test]
    fn disarm_stops_further_fires() {
        let mut ticker = Ticker::new(100);
        ticker.arm();
        ticker.poll(0.0);
        assert!(ticker.disarm());
        assert!(!ticker.poll(100.0));
        assert!(!ticker.disarm());
    }
}
