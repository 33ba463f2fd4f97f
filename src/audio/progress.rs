use std::time::Duration;

/// Where the loaded track is, as the progress bar and seeking see it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    position: Duration,
    duration: Option<Duration>,
}

impl Progress {
    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Back to the start of a freshly loaded track.
    pub fn restart(&mut self, duration: Option<Duration>) {
        self.position = Duration::ZERO;
        self.duration = duration.filter(|d| !d.is_zero());
    }

    /// Playback time update. Ignored while the length is unknown.
    pub fn update(&mut self, position: Duration, duration: Option<Duration>) {
        if let Some(total) = duration.filter(|d| !d.is_zero()) {
            self.position = position.min(total);
            self.duration = Some(total);
        }
    }

    /// Filled share of the bar, `0.0..=1.0`.
    pub fn fill_ratio(&self) -> f64 {
        match self.duration {
            Some(total) if !total.is_zero() => {
                (self.position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Position `p` of the way through, `None` while the length is unknown.
    pub fn fraction_target(&self, p: f64) -> Option<Duration> {
        let total = self.duration.filter(|d| !d.is_zero())?;
        Some(total.mul_f64(p.clamp(0.0, 1.0)))
    }

    /// Position `secs` seconds away, clamped to the track.
    pub fn scrub_target(&self, secs: i64) -> Duration {
        let delta = Duration::from_secs(secs.unsigned_abs());
        let to = if secs < 0 {
            self.position.saturating_sub(delta)
        } else {
            self.position + delta
        };
        match self.duration {
            Some(total) => to.min(total),
            None => to,
        }
    }

    /// A seek was sent; show it before the backend confirms.
    pub fn jump_to(&mut self, to: Duration) {
        self.position = to;
    }
}
