//! Fixed top-right rendering of the per-view toast slot.

use crate::features::toasts::Toasts;
use attendance_core::toast::Severity;
use leptos::prelude::*;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "bg-green-600",
        Severity::Error => "bg-red-600",
        Severity::Info => "bg-blue-600",
    }
}

#[component]
pub fn ToastView(toasts: Toasts) -> impl IntoView {
    move || {
        toasts.current().map(|toast| {
            view! {
                <div
                    class=format!(
                        "fixed top-4 right-4 z-50 flex items-center gap-3 max-w-sm px-4 py-3 rounded-lg shadow-lg text-white {}",
                        severity_class(toast.severity),
                    )
                    role="status"
                    aria-live="polite"
                >
                    <p class="text-sm font-medium">{toast.message}</p>
                    <button
                        type="button"
                        class="ml-auto text-white/80 hover:text-white"
                        aria-label="Close"
                        on:click=move |_| toasts.dismiss()
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
