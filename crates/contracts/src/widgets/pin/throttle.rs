/// Lets a scroll handler run at most once per interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl ScrollThrottle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run: None,
        }
    }

    /// Returns true and records `now_ms` when the interval has elapsed.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last run so the next call passes.
    pub fn reset(&mut self) {
        self.last_run = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes() {
        let mut throttle = ScrollThrottle::new(50);
        assert!(throttle.ready(1000.0));
    }

    #[test]
    fn test_blocks_within_interval() {
        let mut throttle = ScrollThrottle::new(50);
        assert!(throttle.ready(1000.0));
        assert!(!throttle.ready(1020.0));
        assert!(!throttle.ready(1049.9));
        assert!(throttle.ready(1050.0));
        assert!(!throttle.ready(1060.0));
    }

    #[test]
    fn test_zero_interval_never_blocks() {
        let mut throttle = ScrollThrottle::new(0);
        assert!(throttle.ready(1.0));
        assert!(throttle.ready(1.0));
    }

    #[test]
    fn test_reset() {
        let mut throttle = ScrollThrottle::new(50);
        assert!(throttle.ready(1000.0));
        throttle.reset();
        assert!(throttle.ready(1001.0));
    }
}
