//! Inline alert banners. Messages come from [`attendance_core::AttendError`]
//! displays or server messages and are rendered as text.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

/// Renders a styled alert banner with an optional heading.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] message: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let (class, title_class) = match kind {
        AlertKind::Error => (
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            "font-semibold text-red-800 mb-1",
        ),
        AlertKind::Success => (
            "rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-700",
            "font-semibold text-green-800 mb-1",
        ),
        AlertKind::Info => (
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-800",
            "font-semibold text-blue-900 mb-1",
        ),
    };

    view! {
        <div class=class role="alert">
            {title.map(|title| view! { <h3 class=title_class>{title}</h3> })}
            <p>{message}</p>
        </div>
    }
}
