use std::time::Duration;
use tracing::warn;

/// Highest update rate whose step is still at least a nanosecond long.
pub const MAX_UPDATE_HZ: u32 = 1_000_000_000;

/// Converts variable frame times into a whole number of fixed update steps.
pub struct TimeAccumulator {
    backlog: Duration,
    frames: u64,
    steps: u32,
    max_steps: u32,
    period: Duration,
    time_dilation: f32,
}

impl TimeAccumulator {
    /// `update_hz` is clamped to `1..=MAX_UPDATE_HZ`.
    pub fn new(update_hz: u32, max_steps: u32) -> Self {
        TimeAccumulator {
            backlog: Duration::ZERO,
            frames: 0,
            steps: 0,
            max_steps,
            period: Duration::from_secs(1) / update_hz.clamp(1, MAX_UPDATE_HZ),
            time_dilation: 1.0,
        }
    }

    /// Adds one frame's worth of time and works out how many fixed steps are
    /// now due. Time left over after the last whole step carries into the
    /// next frame. When more than `max_steps` are due the whole backlog is
    /// dropped and only `max_steps` run.
    pub fn update(&mut self, frame_time: Duration) {
        self.frames += 1;
        self.backlog += self.dilate(frame_time);

        let due = self.backlog.as_nanos() / self.period.as_nanos();
        match u32::try_from(due) {
            Ok(due) if due <= self.max_steps => {
                self.backlog -= self.period * due;
                self.steps = due;
            }
            _ => {
                warn!(
                    frame = self.frames,
                    frame_time = frame_time.as_secs_f64(),
                    backlog = self.backlog.as_secs_f64(),
                    max_steps = self.max_steps,
                    "falling behind, dropping backlog"
                );
                self.backlog = Duration::ZERO;
                self.steps = self.max_steps;
            }
        }
    }

    fn dilate(&self, frame_time: Duration) -> Duration {
        if self.time_dilation == 1.0 {
            frame_time
        } else {
            frame_time.mul_f64(f64::from(self.time_dilation))
        }
    }

    pub fn step_secs(&self) -> f32 {
        self.period.as_secs_f32()
    }

    pub fn num_steps(&self) -> u32 {
        self.steps
    }

    pub fn frame_number(&self) -> u64 {
        self.frames
    }

    pub fn time_dilation(&self) -> f32 {
        self.time_dilation
    }

    pub fn set_time_dilation(&mut self, time_dilation: f32) {
        self.time_dilation = time_dilation;
    }
}

impl Default for TimeAccumulator {
    fn default() -> Self {
        Self::new(60, 4)
    }
}

#[cfg(test)]
mod test {
    use super::TimeAccumulator;
    use std::time::Duration;

    #[test]
    fn test_one_step_per_matching_frame() {
        let mut accum = TimeAccumulator::default();
        let frame = Duration::from_secs(1) / 60;
        for _ in 0..10 {
            accum.update(frame);
            assert_eq!(1, accum.num_steps());
        }
        assert_eq!(10, accum.frame_number());
    }

    #[test]
    fn test_slow_frames_take_several_steps() {
        let mut accum = TimeAccumulator::new(60, 4);
        accum.update(Duration::from_secs(1) / 30);
        assert_eq!(2, accum.num_steps());
        accum.update(Duration::from_secs(1) / 144);
        assert_eq!(0, accum.num_steps());
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut accum = TimeAccumulator::new(60, 4);
        accum.update(Duration::from_secs(1));
        assert_eq!(4, accum.num_steps());
        // the backlog was dropped, not carried over
        accum.update(Duration::from_millis(1));
        assert_eq!(0, accum.num_steps());
    }

    #[test]
    fn test_time_dilation() {
        let mut accum = TimeAccumulator::new(60, 4);
        accum.set_time_dilation(0.5);
        assert_eq!(0.5, accum.time_dilation());
        let frame = Duration::from_millis(20);
        accum.update(frame);
        assert_eq!(0, accum.num_steps());
        accum.update(frame);
        assert_eq!(1, accum.num_steps());
    }

    #[test]
    fn test_update_rate_is_clamped() {
        let mut accum = TimeAccumulator::new(u32::MAX, 4);
        assert!(accum.step_secs() > 0.0);
        accum.update(Duration::from_millis(16));
        assert_eq!(4, accum.num_steps());

        let accum = TimeAccumulator::new(0, 4);
        assert_eq!(1.0, accum.step_secs());
    }
}
