use leptos::prelude::*;

/// Centered card on a gradient background, used before sign-in.
#[component]
pub fn CenteredCard(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl p-8">{children()}</div>
        </div>
    }
}

/// Page heading with a muted subtitle.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <header class="text-center mb-6">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{title}</h1>
            <p class="text-gray-600">{subtitle}</p>
        </header>
    }
}
