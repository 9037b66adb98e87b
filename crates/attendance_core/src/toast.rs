//! Single-slot transient notifications. A new toast replaces the one on screen;
//! auto-dismiss is keyed by [`ToastId`] so a stale timer cannot clear a newer toast.

/// Milliseconds a toast stays visible unless dismissed.
pub const DEFAULT_TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Shown {
    id: ToastId,
    toast: Toast,
    shown_at: i64,
    lifetime_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Shown>,
    next_id: u64,
    lifetime_ms: u32,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MS)
    }
}

impl ToastSlot {
    #[must_use]
    pub const fn new(lifetime_ms: u32) -> Self {
        Self {
            current: None,
            next_id: 0,
            lifetime_ms,
        }
    }

    #[must_use]
    pub const fn lifetime_ms(&self) -> u32 {
        self.lifetime_ms
    }

    /// Displays `toast`, replacing whatever was shown.
    pub fn show(&mut self, toast: Toast, now_ms: i64) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.current = Some(Shown {
            id,
            toast,
            shown_at: now_ms,
            lifetime_ms: self.lifetime_ms,
        });
        id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Auto-dismiss callback. Returns `false` when `id` has already been replaced.
    pub fn expire(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|shown| shown.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The toast on screen at `now_ms`, if its lifetime has not run out.
    #[must_use]
    pub fn visible(&self, now_ms: i64) -> Option<&Toast> {
        self.current.as_ref().and_then(|shown| {
            let age = now_ms.saturating_sub(shown.shown_at);
            (age < i64::from(shown.lifetime_ms)).then_some(&shown.toast)
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<(ToastId, &Toast)> {
        self.current.as_ref().map(|shown| (shown.id, &shown.toast))
    }
}
