use crate::constants::{LAG_ADJUSTED_SEC, LAG_THRESHOLD_SEC};

/// Throttles a faster host clock (requestAnimationFrame) down to a fixed
/// frame rate.
#[derive(Clone, Debug)]
pub struct FrameTicker {
    gap: f64,
    next_time: Option<f64>,
    last_fired: f64,
}

impl FrameTicker {
    pub fn new(fps: f32) -> Self {
        Self {
            gap: 1.0 / f64::from(fps.max(f32::EPSILON)),
            next_time: None,
            last_fired: 0.0,
        }
    }

    pub fn fps(&self) -> f32 {
        (1.0 / self.gap) as f32
    }

    /// Offer the current time in seconds. Returns the seconds elapsed since the
    /// previous fired frame when a frame is due, `None` otherwise. The first
    /// call always fires with zero elapsed time.
    pub fn tick(&mut self, now_sec: f64) -> Option<f32> {
        let Some(next) = self.next_time else {
            self.next_time = Some(now_sec + self.gap);
            self.last_fired = now_sec;
            return Some(0.0);
        };
        if now_sec < next {
            return None;
        }
        // stay on the gap grid unless we fell a whole frame behind
        let mut following = next + self.gap;
        if following <= now_sec {
            following = now_sec + self.gap;
        }
        self.next_time = Some(following);

        let mut elapsed = (now_sec - self.last_fired) as f32;
        self.last_fired = now_sec;
        if elapsed > LAG_THRESHOLD_SEC {
            log::debug!("[ticker] stall of {:.2}s smoothed", elapsed);
            elapsed = LAG_ADJUSTED_SEC;
        }
        Some(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttles_sixty_hz_to_twenty_four() {
        let mut t = FrameTicker::new(24.0);
        let fired = (0..600)
            .filter(|i| t.tick(*i as f64 / 60.0).is_some())
            .count();
        // 10 seconds of 60 Hz input
        assert!((235..=245).contains(&fired), "fired {fired}");
    }

    #[test]
    fn first_tick_fires_immediately() {
        let mut t = FrameTicker::new(24.0);
        assert_eq!(t.tick(12.0), Some(0.0));
        assert_eq!(t.tick(12.01), None);
    }

    #[test]
    fn long_stall_is_smoothed() {
        let mut t = FrameTicker::new(24.0);
        t.tick(0.0);
        assert_eq!(t.tick(5.0), Some(LAG_ADJUSTED_SEC));
        // back on schedule afterwards
        assert_eq!(t.tick(5.01), None);
        assert!(t.tick(5.05).is_some());
    }
}
