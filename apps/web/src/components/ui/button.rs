use leptos::prelude::*;

/// Primary action button. `on:click` on the component reaches the `<button>`.
#[component]
pub fn Button(
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] full_width: bool,
    children: Children,
) -> impl IntoView {
    let width = if full_width { "w-full" } else { "" };

    view! {
        <button
            type="button"
            class=format!(
                "{width} inline-flex items-center justify-center gap-2 px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-lg transition-colors shadow focus:ring-4 focus:outline-none focus:ring-blue-300",
            )
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-50=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
