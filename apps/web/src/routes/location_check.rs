//! Location gate screen. Runs the check on mount and on "Try Again", and
//! hands the verified coordinates to the shell after a short pause.

use crate::app_lib::{geolocation::BrowserGeolocator, platform::LocalStore};
use crate::components::{Alert, AlertKind, Button, CenteredCard, PageHeader, Spinner};
use crate::features::services::{use_api, use_config};
use attendance_core::{
    Coordinates,
    location::{GateStatus, HANDOVER_DELAY_MS, LocationGate},
    scope::Lifetime,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CHECKING: &str = "Checking your location...";

const TIPS: [&str; 3] = [
    "Allow location access in your browser settings",
    "Make sure location services are enabled on your device",
    "Try using a different browser if the issue persists",
];

#[component]
pub fn LocationCheckPage(on_verified: Callback<Coordinates>) -> impl IntoView {
    let policy = use_config().location_policy;
    let api = StoredValue::new(use_api());
    let status = RwSignal::new(GateStatus::Checking(CHECKING.to_string()));
    let retrying = RwSignal::new(false);

    let lifetime = StoredValue::new_local(Lifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(Lifetime::end);
    });

    let run_check = move || {
        let (Some(alive), Some(api)) = (
            lifetime.try_with_value(Lifetime::token),
            api.try_get_value(),
        ) else {
            return;
        };

        spawn_local(async move {
            let gate = LocationGate::new(LocalStore, policy);
            let progress = alive.clone();
            let outcome = gate
                .verify(&BrowserGeolocator, &api, move |checking| {
                    progress.apply(checking, |checking| status.set(checking));
                })
                .await;

            let verified = match &outcome {
                GateStatus::Allowed(coords) => Some(*coords),
                _ => None,
            };
            if !alive.apply(outcome, |outcome| {
                status.set(outcome);
                retrying.set(false);
            }) {
                return;
            }

            if let Some(coords) = verified {
                TimeoutFuture::new(HANDOVER_DELAY_MS).await;
                alive.apply(coords, |coords| on_verified.run(coords));
            }
        });
    };

    run_check();

    let on_retry = move |_| {
        if retrying.get_untracked() {
            return;
        }
        retrying.set(true);
        status.set(GateStatus::Checking(CHECKING.to_string()));
        run_check();
    };

    view! {
        <CenteredCard>
            <PageHeader
                title="Location Verification"
                subtitle="We need to verify your location to grant access"
            />
            {move || match status.get() {
                GateStatus::Checking(message) => {
                    view! {
                        <div class="flex flex-col items-center gap-4 py-6">
                            <Spinner large=true />
                            <p class="text-gray-700">{message}</p>
                        </div>
                    }
                        .into_any()
                }
                allowed @ GateStatus::Allowed(_) => {
                    view! {
                        <div class="flex flex-col items-center gap-3 py-6">
                            <div class="w-16 h-16 flex items-center justify-center rounded-full bg-green-100 text-3xl text-green-600">
                                "✓"
                            </div>
                            <p class="font-semibold text-green-700">{allowed.message().to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
                GateStatus::Denied(message) => {
                    view! { <Alert kind=AlertKind::Error title="Access Denied" message=message /> }
                        .into_any()
                }
                GateStatus::Error(message) => {
                    view! {
                        <div class="space-y-4">
                            <Alert kind=AlertKind::Error title="Location Error" message=message />
                            <ul class="list-disc pl-5 text-sm text-gray-600 space-y-1">
                                {TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || status.with(GateStatus::can_retry)>
                <div class="mt-6">
                    <Button full_width=true disabled=retrying on:click=on_retry>
                        {move || if retrying.get() { "Retrying..." } else { "Try Again" }}
                    </Button>
                </div>
            </Show>
            <p class="mt-6 text-center text-xs text-gray-500">
                "Your location is used to verify you're in an authorized area"
            </p>
        </CenteredCard>
    }
}
