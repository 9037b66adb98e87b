//! Top navigation for signed-in users.

use crate::features::session::use_session;
use attendance_core::Identity;
use leptos::prelude::*;

#[component]
pub fn ProfileBar(identity: Identity) -> impl IntoView {
    let session = use_session();
    let Identity {
        email,
        name,
        picture,
        role,
    } = identity;

    view! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-5xl mx-auto px-4 py-3 flex items-center gap-3">
                {picture
                    .map(|src| {
                        view! {
                            <img
                                class="w-10 h-10 rounded-full"
                                src=src
                                alt=name.clone()
                                referrerpolicy="no-referrer"
                            />
                        }
                    })}
                <div class="flex-1 min-w-0">
                    <p class="font-semibold text-gray-900 truncate">{name.clone()}</p>
                    <p class="text-sm text-gray-500 truncate">{email}</p>
                </div>
                <span class="hidden sm:inline px-2 py-1 text-xs font-medium uppercase rounded bg-gray-100 text-gray-600">
                    {role.as_str()}
                </span>
                <button
                    type="button"
                    class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-lg"
                    on:click=move |_| session.logout()
                >
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
