//! Teacher attendance window.
//!
//! A window is persisted as `{isActive, startTime, duration}` the moment it
//! opens. Remaining time is always derived from the wall clock
//! (`duration - floor((now - startTime) / 1000)`), never from a decrementing
//! counter, so a reload or a backgrounded tab resumes at the right second.
//!
//! ```text
//! Idle --start--> Active(n) --tick, n == 0--> Completing --finish--> Idle
//! ```
//!
//! An expired record is never reconstructed. Completion clears the record
//! whether or not the send succeeded; a failed send is reported, not retried.

use crate::{
    clock::Clock,
    error::AttendError,
    rules,
    storage::{KeyValueStore, TIMER_KEY, load_json, save_json},
    toast::Toast,
    types::AttendanceResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_WINDOW_SECONDS: u32 = 300;
/// Countdown granularity.
pub const TICK_MS: u32 = 1_000;

pub const SESSION_STARTED: &str = "Attendance session started!";
pub const SESSION_ADOPTED: &str = "An attendance session is already running.";
pub const SENDING: &str = "Sending attendance data...";
pub const SEND_FAILED: &str = "Failed to send attendance";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWindow {
    pub is_active: bool,
    /// Milliseconds since the Unix epoch.
    pub start_time: i64,
    /// Seconds.
    pub duration: u32,
}

impl SessionWindow {
    #[must_use]
    pub const fn open(now_ms: i64, duration: u32) -> Self {
        Self {
            is_active: true,
            start_time: now_ms,
            duration,
        }
    }

    /// Whole seconds since the window opened. Negative if `startTime` is ahead of the clock.
    #[must_use]
    pub fn elapsed_secs(&self, now_ms: i64) -> i64 {
        now_ms
            .saturating_sub(self.start_time)
            .div_euclid(i64::from(TICK_MS))
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.elapsed_secs(now_ms) >= i64::from(self.duration)
    }

    /// Never negative and never above `duration`.
    #[must_use]
    pub fn seconds_remaining(&self, now_ms: i64) -> u32 {
        let remaining = i64::from(self.duration) - self.elapsed_secs(now_ms).max(0);
        u32::try_from(remaining.clamp(0, i64::from(self.duration))).unwrap_or(0)
    }

    /// Live, structurally sound, not before the epoch and not started in the
    /// future beyond one tick.
    #[must_use]
    pub fn is_restorable(&self, now_ms: i64) -> bool {
        self.is_active
            && self.duration > 0
            && self.start_time >= 0
            && self.start_time <= now_ms.saturating_add(i64::from(TICK_MS))
            && !self.is_expired(now_ms)
    }
}

/// Derived countdown view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub seconds_remaining: u32,
    pub duration: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(seconds_remaining: u32, duration: u32) -> Self {
        Self {
            seconds_remaining: seconds_remaining.min(duration),
            duration,
        }
    }

    /// `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }

    /// Elapsed share of the window, in percent, clamped to `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.duration == 0 {
            return 100.0;
        }
        let elapsed = self.duration - self.seconds_remaining;
        (f64::from(elapsed) / f64::from(self.duration) * 100.0).clamp(0.0, 100.0)
    }
}

/// Window length for display: `("5 Minutes", "5-minute")` for 300 s. Lengths
/// that are not whole minutes are given in seconds.
#[must_use]
pub fn window_length_labels(duration: u32) -> (String, String) {
    let (amount, unit) = if duration >= 60 && duration % 60 == 0 {
        (duration / 60, "minute")
    } else {
        (duration, "second")
    };
    let plural = if amount == 1 { "" } else { "s" };
    let title = format!("{}{}", unit[..1].to_uppercase(), &unit[1..]);
    (
        format!("{amount} {title}{plural}"),
        format!("{amount}-{unit}"),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Active { seconds_remaining: u32 },
    Completing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running { seconds_remaining: u32 },
    /// Reported once, on the transition into `Completing`.
    Expired,
    Completing,
}

pub struct AttendanceTimer<S, C> {
    store: S,
    clock: C,
    duration: u32,
    window: Option<SessionWindow>,
    phase: TimerPhase,
}

impl<S: KeyValueStore, C: Clock> AttendanceTimer<S, C> {
    /// Starts `Idle`; call [`Self::restore`] to pick up a persisted window.
    pub fn new(store: S, clock: C, duration: u32) -> Self {
        Self {
            store,
            clock,
            duration: duration.max(1),
            window: None,
            phase: TimerPhase::Idle,
        }
    }

    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub const fn window(&self) -> Option<SessionWindow> {
        self.window
    }

    fn stored_window(&self) -> Option<SessionWindow> {
        let window: SessionWindow = load_json(&self.store, TIMER_KEY)?;
        if window.is_restorable(self.clock.now_ms()) {
            Some(window)
        } else {
            debug!("discarding expired or inactive attendance window");
            self.store.remove(TIMER_KEY);
            None
        }
    }

    fn activate(&mut self, window: SessionWindow) -> TimerPhase {
        let seconds_remaining = window.seconds_remaining(self.clock.now_ms());
        self.window = Some(window);
        self.phase = TimerPhase::Active { seconds_remaining };
        self.phase
    }

    /// Rebuilds an active window from storage after a reload. A no-op unless `Idle`.
    pub fn restore(&mut self) -> TimerPhase {
        if self.phase != TimerPhase::Idle {
            return self.phase;
        }
        match self.stored_window() {
            Some(window) => {
                debug!(start_time = window.start_time, "resuming attendance window");
                self.activate(window)
            }
            None => TimerPhase::Idle,
        }
    }

    /// Opens a fresh window and persists it before returning.
    ///
    /// A live window persisted elsewhere (another tab) is adopted instead of replaced.
    ///
    /// # Errors
    /// [`AttendError::WindowActive`] unless `Idle`; storage errors leave the timer `Idle`.
    pub fn start(&mut self) -> Result<Toast, AttendError> {
        if self.phase != TimerPhase::Idle {
            return Err(AttendError::WindowActive);
        }

        if let Some(existing) = self.stored_window() {
            warn!(
                start_time = existing.start_time,
                "adopting attendance window opened elsewhere"
            );
            self.activate(existing);
            return Ok(Toast::info(SESSION_ADOPTED));
        }

        let window = SessionWindow::open(self.clock.now_ms(), self.duration);
        save_json(&self.store, TIMER_KEY, &window)?;
        debug!(duration = window.duration, "attendance window opened");
        self.activate(window);
        Ok(Toast::success(SESSION_STARTED))
    }

    /// Recomputes the remaining time from the clock.
    pub fn tick(&mut self) -> Tick {
        match (self.phase, self.window) {
            (TimerPhase::Active { .. }, Some(window)) => {
                let seconds_remaining = window.seconds_remaining(self.clock.now_ms());
                if seconds_remaining == 0 {
                    self.phase = TimerPhase::Completing;
                    debug!("attendance window expired");
                    Tick::Expired
                } else {
                    self.phase = TimerPhase::Active { seconds_remaining };
                    Tick::Running { seconds_remaining }
                }
            }
            (TimerPhase::Completing, _) => Tick::Completing,
            _ => Tick::Idle,
        }
    }

    pub fn countdown(&self) -> Option<Countdown> {
        let window = self.window?;
        let seconds_remaining = match self.phase {
            TimerPhase::Active { seconds_remaining } => seconds_remaining,
            TimerPhase::Completing => 0,
            TimerPhase::Idle => return None,
        };
        Some(Countdown::new(seconds_remaining, window.duration))
    }

    /// Closes the window after the send call for an expired window returned,
    /// whatever its outcome.
    pub fn finish(
        &mut self,
        result: Result<AttendanceResponse, AttendError>,
        teacher_email: &str,
    ) -> Toast {
        self.clear();
        match result {
            Ok(response) if response.success => Toast::success(
                response
                    .message
                    .unwrap_or_else(|| rules::attendance_sent_message(teacher_email)),
            ),
            Ok(response) => {
                warn!("attendance send rejected");
                Toast::error(response.message.unwrap_or_else(|| SEND_FAILED.to_string()))
            }
            Err(err) => {
                warn!("attendance send failed: {err}");
                Toast::error(SEND_FAILED)
            }
        }
    }

    /// Drops the window. The persisted record is only removed while it still
    /// belongs to this window, so a newer window from another tab survives.
    pub fn clear(&mut self) {
        if let Some(window) = self.window.take() {
            let stored: Option<SessionWindow> = load_json(&self.store, TIMER_KEY);
            if stored.is_none_or(|stored| stored.start_time == window.start_time) {
                self.store.remove(TIMER_KEY);
            }
        }
        self.phase = TimerPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{AttendanceApi, fake::FakeApi},
        clock::ManualClock,
        storage::MemoryStore,
        toast::Severity,
    };

    const T0: i64 = 1_700_000_000_000;

    fn timer<'a>(
        store: &'a MemoryStore,
        clock: &'a ManualClock,
    ) -> AttendanceTimer<&'a MemoryStore, &'a ManualClock> {
        AttendanceTimer::new(store, clock, DEFAULT_WINDOW_SECONDS)
    }

    fn persist(store: &MemoryStore, window: SessionWindow) -> Result<(), AttendError> {
        save_json(store, TIMER_KEY, &window)
    }

    #[test]
    fn start_persists_a_fresh_window() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);

        let toast = timer.start()?;
        assert_eq!(toast, Toast::success(SESSION_STARTED));
        assert_eq!(
            timer.phase(),
            TimerPhase::Active {
                seconds_remaining: 300
            }
        );
        assert_eq!(
            store.get(TIMER_KEY).as_deref(),
            Some(r#"{"isActive":true,"startTime":1700000000000,"duration":300}"#)
        );
        Ok(())
    }

    #[test]
    fn second_start_is_rejected() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);

        timer.start()?;
        clock.advance_secs(3);
        assert_eq!(timer.start(), Err(AttendError::WindowActive));
        assert_eq!(timer.window().map(|w| w.start_time), Some(T0));
        Ok(())
    }

    #[test]
    fn restore_resumes_mid_countdown() -> Result<(), AttendError> {
        for elapsed in [0_i64, 1, 120, 299] {
            let store = MemoryStore::new();
            persist(&store, SessionWindow::open(T0, 300))?;
            let clock = ManualClock::at(T0 + elapsed * 1000 + 400);

            let mut timer = timer(&store, &clock);
            let expected = u32::try_from(300 - elapsed).unwrap_or_default();
            assert_eq!(
                timer.restore(),
                TimerPhase::Active {
                    seconds_remaining: expected
                }
            );
        }
        Ok(())
    }

    #[test]
    fn restore_discards_expired_window() -> Result<(), AttendError> {
        for elapsed in [300_i64, 301, 10_000] {
            let store = MemoryStore::new();
            persist(&store, SessionWindow::open(T0, 300))?;
            let clock = ManualClock::at(T0 + elapsed * 1000);

            let mut timer = timer(&store, &clock);
            assert_eq!(timer.restore(), TimerPhase::Idle);
            assert!(!store.contains(TIMER_KEY));
        }
        Ok(())
    }

    #[test]
    fn restore_discards_unsound_records() -> Result<(), AttendError> {
        let clock = ManualClock::at(T0);
        let unsound = [
            SessionWindow {
                is_active: false,
                start_time: T0,
                duration: 300,
            },
            SessionWindow {
                is_active: true,
                start_time: T0,
                duration: 0,
            },
            SessionWindow::open(T0 + 60_000, 300),
            SessionWindow::open(-5_000, 300),
        ];
        for window in unsound {
            let store = MemoryStore::new();
            persist(&store, window)?;
            let mut timer = timer(&store, &clock);
            assert_eq!(timer.restore(), TimerPhase::Idle);
            assert!(!store.contains(TIMER_KEY));
        }

        let store = MemoryStore::new();
        store.set(
            TIMER_KEY,
            r#"{"isActive":true,"startTime":-9223372036854775808,"duration":300}"#,
        )?;
        let mut timer = timer(&store, &clock);
        assert_eq!(timer.restore(), TimerPhase::Idle);
        assert!(!store.contains(TIMER_KEY));

        let store = MemoryStore::new();
        store.set(TIMER_KEY, "not json")?;
        let mut timer = self::timer(&store, &clock);
        assert_eq!(timer.restore(), TimerPhase::Idle);
        assert!(!store.contains(TIMER_KEY));
        Ok(())
    }

    #[test]
    fn ticks_follow_wall_clock() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);
        timer.start()?;

        clock.advance_secs(1);
        assert_eq!(
            timer.tick(),
            Tick::Running {
                seconds_remaining: 299
            }
        );

        // Backgrounded tab: no ticks for a while, then one catches up.
        clock.advance_secs(200);
        assert_eq!(
            timer.tick(),
            Tick::Running {
                seconds_remaining: 99
            }
        );

        clock.advance_secs(99);
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.phase(), TimerPhase::Completing);
        assert_eq!(timer.tick(), Tick::Completing);
        Ok(())
    }

    #[test]
    fn countdown_never_goes_negative() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);
        timer.start()?;

        clock.advance_secs(900);
        timer.tick();
        let countdown = timer.countdown();
        assert_eq!(countdown.map(|c| c.display()).as_deref(), Some("00:00"));
        assert_eq!(countdown.map(|c| c.progress_percent()), Some(100.0));
        Ok(())
    }

    #[test]
    fn countdown_formats_minutes_and_seconds() {
        let countdown = Countdown::new(65, 300);
        assert_eq!(countdown.display(), "01:05");
        assert!((countdown.progress_percent() - 78.333).abs() < 0.01);

        assert_eq!(Countdown::new(300, 300).display(), "05:00");
        assert_eq!(Countdown::new(300, 300).progress_percent(), 0.0);
        assert_eq!(Countdown::new(400, 300).seconds_remaining, 300);
    }

    #[test]
    fn elapsed_saturates_on_extreme_clocks() {
        let window = SessionWindow {
            is_active: true,
            start_time: i64::MIN,
            duration: 300,
        };
        assert!(window.is_expired(T0));
        assert_eq!(window.seconds_remaining(T0), 0);
        assert!(!window.is_restorable(i64::MAX));
    }

    #[test]
    fn window_labels_follow_duration() {
        assert_eq!(
            window_length_labels(300),
            ("5 Minutes".to_string(), "5-minute".to_string())
        );
        assert_eq!(
            window_length_labels(60),
            ("1 Minute".to_string(), "1-minute".to_string())
        );
        assert_eq!(
            window_length_labels(90),
            ("90 Seconds".to_string(), "90-second".to_string())
        );
    }

    #[test]
    fn start_while_completing_is_rejected() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);
        timer.start()?;

        clock.advance_secs(300);
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.start(), Err(AttendError::WindowActive));
        assert_eq!(timer.phase(), TimerPhase::Completing);
        assert_eq!(timer.window().map(|w| w.start_time), Some(T0));
        Ok(())
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), AttendError> {
            Err(AttendError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn failed_write_leaves_timer_idle() {
        let clock = ManualClock::at(T0);
        let mut timer = AttendanceTimer::new(ReadOnlyStore, &clock, DEFAULT_WINDOW_SECONDS);

        assert!(matches!(timer.start(), Err(AttendError::Storage(_))));
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.window(), None);
        assert_eq!(timer.countdown(), None);
    }

    #[tokio::test]
    async fn expiry_sends_and_returns_to_idle() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let api = FakeApi::default();
        let mut timer = timer(&store, &clock);
        timer.start()?;

        clock.advance_secs(300);
        assert_eq!(timer.tick(), Tick::Expired);
        let result = api.send_attendance("a@school.edu").await;
        let toast = timer.finish(result, "a@school.edu");

        assert_eq!(
            toast,
            Toast::success("Attendance sent successfully to a@school.edu")
        );
        assert_eq!(*api.sent.borrow(), vec!["a@school.edu".to_string()]);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!store.contains(TIMER_KEY));
        Ok(())
    }

    #[tokio::test]
    async fn failed_send_still_closes_window() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let api = FakeApi::default();
        *api.send_reply.borrow_mut() = Some(Err(AttendError::Network("down".to_string())));
        let mut timer = timer(&store, &clock);
        timer.start()?;

        clock.advance_secs(301);
        assert_eq!(timer.tick(), Tick::Expired);
        let result = api.send_attendance("a@school.edu").await;
        let toast = timer.finish(result, "a@school.edu");

        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert!(!store.contains(TIMER_KEY));
        assert_eq!(api.sent.borrow().len(), 1);

        // A fresh window can be opened afterwards.
        assert_eq!(timer.start()?, Toast::success(SESSION_STARTED));
        Ok(())
    }

    #[test]
    fn rejected_send_is_reported() {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);

        let toast = timer.finish(
            Ok(AttendanceResponse {
                success: false,
                message: None,
            }),
            "a@school.edu",
        );
        assert_eq!(toast, Toast::error(SEND_FAILED));
    }

    #[test]
    fn start_adopts_window_from_another_tab() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut other_tab = timer(&store, &clock);
        other_tab.start()?;

        clock.advance_secs(10);
        let mut this_tab = timer(&store, &clock);
        assert_eq!(this_tab.start()?, Toast::info(SESSION_ADOPTED));
        assert_eq!(this_tab.window().map(|w| w.start_time), Some(T0));
        assert_eq!(
            this_tab.phase(),
            TimerPhase::Active {
                seconds_remaining: 290
            }
        );
        Ok(())
    }

    #[test]
    fn clear_keeps_a_newer_window() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        let clock = ManualClock::at(T0);
        let mut timer = timer(&store, &clock);
        timer.start()?;

        let newer = SessionWindow::open(T0 + 5_000, 300);
        persist(&store, newer)?;
        timer.clear();

        assert_eq!(timer.phase(), TimerPhase::Idle);
        let stored: Option<SessionWindow> = load_json(&store, TIMER_KEY);
        assert_eq!(stored, Some(newer));
        Ok(())
    }
}
