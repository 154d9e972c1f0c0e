use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Time elapsed since the clock was created, in seconds.
    ///
    /// Unclamped and monotonic; this is the animation time base.
    pub elapsed: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Builds a snapshot at a fixed elapsed time. Used to drive the harness
    /// without a wall clock (tests, replays).
    pub fn at(elapsed: f64, frame_index: u64) -> Self {
        Self {
            dt: 0.0,
            elapsed,
            now: Instant::now(),
            frame_index,
        }
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls. Elapsed time is not clamped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// - minimum prevents zero-dt behavior from tight loops on some platforms
    /// - maximum prevents simulation explosions after long stalls
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_is_clamped_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(50));
        let t = clock.tick_at(clock.last);
        assert_eq!(t.dt, Duration::from_millis(5).as_secs_f32());
    }

    #[test]
    fn dt_is_clamped_to_maximum_but_elapsed_is_not() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(250));
        let later = clock.start + Duration::from_secs(3);
        let t = clock.tick_at(later);
        assert_eq!(t.dt, 0.25);
        assert_eq!(t.elapsed, 3.0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed >= a.elapsed);
        assert!(a.elapsed >= 0.0);
    }

    #[test]
    fn first_tick_after_slow_setup_counts_from_creation() {
        // Setup work between creating the clock and the first frame is part of elapsed time.
        let mut clock = FrameClock::new();
        let first_frame = clock.start + Duration::from_millis(1500);

        let t = clock.tick_at(first_frame);
        assert_eq!(t.frame_index, 0);
        assert_eq!(t.elapsed, 1.5);
        assert_eq!(t.dt, 0.25);
    }

    #[test]
    fn at_builds_fixed_snapshot() {
        let t = FrameTime::at(2.0, 7);
        assert_eq!(t.elapsed, 2.0);
        assert_eq!(t.frame_index, 7);
        assert_eq!(t.dt, 0.0);
    }
}
