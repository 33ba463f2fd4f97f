use std::time::{Duration, Instant};

use crate::timer::{Fired, TimerSlot, Timers};

use super::model::RecordTimer;

/// Hides the controls after a quiet period while music plays.
pub struct IdleUi {
    delay: Duration,
    slot: TimerSlot,
    hidden: bool,
}

impl IdleUi {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: TimerSlot::default(),
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_waiting(&self) -> bool {
        self.slot.is_armed()
    }

    /// Mouse motion or a key press: show the controls and restart the wait.
    pub fn on_activity(&mut self, timers: &mut Timers<RecordTimer>, now: Instant) {
        self.hidden = false;
        let h = timers.schedule_once(RecordTimer::IdleHide, now, self.delay);
        self.slot.replace(timers, h);
    }

    /// The wait ran out. Hides only if something is playing right now.
    pub fn on_timer(&mut self, fired: &Fired<RecordTimer>, playing: bool) {
        if !self.slot.holds(fired.handle) {
            return;
        }
        self.slot.release(fired.handle);
        if playing {
            self.hidden = true;
        }
    }

    pub fn reset(&mut self, timers: &mut Timers<RecordTimer>) {
        self.slot.clear(timers);
        self.hidden = false;
    }
}
