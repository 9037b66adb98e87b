//! Per-view toast handle: one visible notification, replaced by the next one
//! and dismissed after its lifetime. The pending timer is dropped with the
//! view, and a timer only expires the toast it was started for.

use crate::app_lib::platform::BrowserClock;
use attendance_core::{
    Clock,
    toast::{Toast, ToastSlot},
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Toasts {
    slot: RwSignal<ToastSlot>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
            timer: StoredValue::new_local(None),
        }
    }

    pub fn show(&self, toast: Toast) {
        let slot = self.slot;
        let Some(id) = slot.try_update(|current| current.show(toast, BrowserClock.now_ms())) else {
            return;
        };
        let lifetime_ms = slot.with_untracked(ToastSlot::lifetime_ms);

        let timeout = Timeout::new(lifetime_ms, move || {
            let _ = slot.try_update(|current| current.expire(id));
        });
        // Replacing the previous timer cancels it.
        self.timer.set_value(Some(timeout));
    }

    pub fn dismiss(&self) {
        let _ = self.slot.try_update(ToastSlot::dismiss);
        self.timer.set_value(None);
    }

    pub fn current(&self) -> Option<Toast> {
        self.slot
            .with(|slot| slot.current().map(|(_, toast)| toast.clone()))
    }
}
