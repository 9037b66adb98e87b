use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let size = if large {
        "h-12 w-12 border-4"
    } else {
        "h-5 w-5 border-2"
    };

    view! {
        <div
            class=format!(
                "inline-block {size} animate-spin rounded-full border-blue-200 border-t-blue-600",
            )
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
