pub const COUNTER_DURATION_MS: f64 = 2_000.0;

/// Value shown `elapsed_ms` into a linear count from `from` to `to`. Holds at
/// `to` once the duration has passed.
pub fn counter_value(from: u32, to: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if !(duration_ms > 0.0) || elapsed_ms >= duration_ms {
        return to;
    }

    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    let span = f64::from(to) - f64::from(from);
    let value = f64::from(from) + span * progress;

    if to >= from {
        value.floor() as u32
    } else {
        value.ceil() as u32
    }
}

pub fn counter_label(value: u32) -> String {
    format!("{value}+")
}

pub fn is_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

/// Bookkeeping for one animation-frame driven count. The browser side owns
/// the frame callback; this tracks the start time, the outstanding frame
/// request and whether the run was torn down.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterRun {
    from: u32,
    to: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    pending_frame: Option<i32>,
    cancelled: bool,
}

impl CounterRun {
    pub fn new(from: u32, to: u32, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
            pending_frame: None,
            cancelled: false,
        }
    }

    /// Records the id of the frame just requested. Ignored after `cancel`.
    pub fn frame_requested(&mut self, id: Option<i32>) {
        if !self.cancelled {
            self.pending_frame = id;
        }
    }

    /// Handles a frame firing at `timestamp`. Returns the value to show and
    /// whether another frame should be requested.
    pub fn advance(&mut self, timestamp: f64) -> (u32, bool) {
        self.pending_frame = None;
        let start = *self.started_at.get_or_insert(timestamp);
        let elapsed = timestamp - start;

        let value = counter_value(self.from, self.to, elapsed, self.duration_ms);
        let more = !self.cancelled && !is_finished(elapsed, self.duration_ms);
        (value, more)
    }

    /// Stops the run and hands back the frame request that still has to be
    /// cancelled, if any.
    pub fn cancel(&mut self) -> Option<i32> {
        self.cancelled = true;
        self.pending_frame.take()
    }
}
