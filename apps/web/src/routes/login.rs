use crate::app_lib::{google, poll::PollBudget};
use crate::components::{Alert, AlertKind, CenteredCard, PageHeader, Spinner};
use crate::features::services::{use_api, use_config};
use crate::features::session::use_session;
use attendance_core::{
    identity::{PROVIDER_LOGIN_FAILED, resolve_identity},
    scope::Lifetime,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SIGN_IN_CONTAINER: &str = "google-signin";
/// The GIS script loads `async`; its button is retried until this deadline.
const GIS_POLL_MS: u32 = 250;
const GIS_WAIT_MS: u32 = 10_000;

const REQUIREMENTS: [&str; 3] = [
    "Location must be verified",
    "Valid Google account required",
    "Teachers use @school.edu domain",
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let client_id = use_config().google_client_id;
    let api = StoredValue::new(use_api());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |credential: &Option<String>| {
        let credential = credential.clone();
        let api = api.get_value();
        async move { resolve_identity(&api, credential.as_deref()).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(identity) => session.login(identity),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let lifetime = StoredValue::new_local(Lifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(Lifetime::end);
    });

    let on_credential = move |credential: Option<String>| {
        set_error.set(None);
        login_action.dispatch(credential);
    };

    Effect::new(move |_| {
        let Some(alive) = lifetime.try_with_value(Lifetime::token) else {
            return;
        };
        let client_id = client_id.clone();

        spawn_local(async move {
            let mut budget = PollBudget::new(GIS_POLL_MS, GIS_WAIT_MS);
            while alive.is_alive() {
                if google::render_sign_in(&client_id, SIGN_IN_CONTAINER, on_credential).is_ok() {
                    return;
                }
                match budget.next_delay() {
                    Some(delay) => TimeoutFuture::new(delay).await,
                    None => {
                        set_error.set(Some(PROVIDER_LOGIN_FAILED.to_string()));
                        return;
                    }
                }
            }
        });
    });

    view! {
        <CenteredCard>
            <PageHeader title="Welcome" subtitle="Sign in to mark your attendance" />
            <div class="flex justify-center" id=SIGN_IN_CONTAINER></div>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(
                        view! {
                            <div class="mt-4 flex items-center justify-center gap-2 text-gray-600">
                                <Spinner />
                                <span>"Signing you in..."</span>
                            </div>
                        },
                    )
            }}
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=message />
                            </div>
                        }
                    })
            }}
            <div class="mt-6 rounded-lg bg-blue-50 p-4 text-sm text-blue-900">
                <h3 class="font-semibold mb-2">"Access Requirements:"</h3>
                <ul class="list-disc pl-5 space-y-1">
                    {REQUIREMENTS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
            <p class="mt-6 text-center text-xs text-gray-500">
                "Your location has been verified. You may now sign in."
            </p>
        </CenteredCard>
    }
}
