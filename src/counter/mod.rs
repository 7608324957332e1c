pub mod frame;

use chrono::{DateTime, LocalResult, NaiveTime, TimeZone};

use self::frame::{FrameHandle, FrameScheduler};

/// Shared by every card and every frame
pub static FORMATTER: GroupedFormatter = GroupedFormatter::EN_US;

/// Local midnight of the day containing `now`, in `now`'s timezone.
pub fn start_of_local_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(a, b) => a.min(b),
        // Midnight skipped by a DST jump: fall back to wall-clock time of day
        LocalResult::None => now.clone() - now.time().signed_duration_since(NaiveTime::MIN),
    }
}

/// Events accumulated since local midnight at `rate_per_second`.
///
/// Never stored: every frame recomputes it from the wall clock. Clock jumps
/// (DST, manual adjustment) are not compensated and may make the display
/// jump or regress.
pub fn estimate_since_midnight<Tz: TimeZone>(now: &DateTime<Tz>, rate_per_second: f64) -> u64 {
    let elapsed_ms = now
        .clone()
        .signed_duration_since(start_of_local_day(now))
        .num_milliseconds()
        .max(0);
    let value = (elapsed_ms as f64 / 1000.0 * rate_per_second).floor();
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}

/// Integer formatter with grouped thousands, fixed to one locale.
#[derive(Debug, Clone, Copy)]
pub struct GroupedFormatter {
    separator: char,
}

impl GroupedFormatter {
    pub const EN_US: Self = Self { separator: ',' };

    /// Writes `value` into `out`, replacing its contents. Reuses `out`'s
    /// allocation.
    pub fn format_into(&self, value: u64, out: &mut String) {
        out.clear();
        let mut digits = [0u8; 20];
        let mut len = 0;
        let mut n = value;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in (0..len).rev() {
            out.push(digits[i] as char);
            if i > 0 && i % 3 == 0 {
                out.push(self.separator);
            }
        }
    }

    pub fn format(&self, value: u64) -> String {
        let mut out = String::with_capacity(26);
        self.format_into(value, &mut out);
        out
    }
}

/// Per-card animation loop.
///
/// Holds at most one pending frame. Mounting twice does not start a second
/// loop; changing the rate cancels the pending frame and restarts.
#[derive(Debug)]
pub struct CounterAnimation {
    rate_per_second: f64,
    frame: Option<FrameHandle>,
    display: String,
    scratch: String,
}

impl CounterAnimation {
    pub fn new(rate_per_second: f64) -> Self {
        Self {
            rate_per_second,
            frame: None,
            display: String::new(),
            scratch: String::new(),
        }
    }

    pub fn mount(&mut self, frames: &mut FrameScheduler) {
        if self.frame.is_none() {
            self.frame = Some(frames.request());
        }
    }

    pub fn unmount(&mut self, frames: &mut FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            frames.cancel(handle);
        }
    }

    pub fn set_rate(&mut self, rate_per_second: f64, frames: &mut FrameScheduler) {
        if rate_per_second == self.rate_per_second {
            return;
        }
        let mounted = self.frame.is_some();
        self.unmount(frames);
        self.rate_per_second = rate_per_second;
        if mounted {
            self.mount(frames);
        }
    }

    /// Runs this card's frame if its handle is in `fired`. Returns true when
    /// the display string changed.
    pub fn on_frame<Tz: TimeZone>(
        &mut self,
        fired: &[FrameHandle],
        now: &DateTime<Tz>,
        frames: &mut FrameScheduler,
    ) -> bool {
        match self.frame {
            Some(handle) if fired.contains(&handle) => {}
            _ => return false,
        }

        let value = estimate_since_midnight(now, self.rate_per_second);
        FORMATTER.format_into(value, &mut self.scratch);
        let changed = self.scratch != self.display;
        if changed {
            std::mem::swap(&mut self.scratch, &mut self.display);
        }

        self.frame = Some(frames.request());
        changed
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn rate_per_second(&self) -> f64 {
        self.rate_per_second
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }
}
