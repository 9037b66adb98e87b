//! Teacher view: opens the attendance window, shows the countdown, and sends
//! the collected attendance once the window runs out.

use crate::app_lib::platform::{BrowserClock, LocalStore};
use crate::components::{CountdownRing, PageHeader, ProfileBar, ToastView};
use crate::features::services::{use_api, use_config};
use crate::features::toasts::Toasts;
use attendance_core::{
    AttendanceApi, Identity,
    scope::Lifetime,
    timer::{
        AttendanceTimer, Countdown, SENDING, TICK_MS, Tick, TimerPhase, window_length_labels,
    },
    toast::Toast,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;


#[component]
pub fn TeacherDashboard(identity: Identity) -> impl IntoView {
    let duration = use_config().window_seconds;
    let api = StoredValue::new(use_api());
    let email = StoredValue::new(identity.email.clone());
    let toasts = Toasts::new();

    let timer = StoredValue::new(AttendanceTimer::new(LocalStore, BrowserClock, duration));
    let phase = RwSignal::new(TimerPhase::Idle);
    let countdown = RwSignal::new(None::<Countdown>);

    let lifetime = StoredValue::new_local(Lifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(Lifetime::end);
    });

    let sync = move || {
        timer.try_with_value(|timer| {
            phase.set(timer.phase());
            countdown.set(timer.countdown());
        });
    };

    let send = move || {
        let (Some(alive), Some(api), Some(email)) = (
            lifetime.try_with_value(Lifetime::token),
            api.try_get_value(),
            email.try_get_value(),
        ) else {
            return;
        };
        toasts.show(Toast::info(SENDING));

        spawn_local(async move {
            let result = api.send_attendance(&email).await;
            alive.apply(result, |result| {
                if let Some(toast) = timer.try_update_value(|timer| timer.finish(result, &email)) {
                    toasts.show(toast);
                }
                sync();
            });
        });
    };

    let on_tick = move || {
        if timer.try_update_value(AttendanceTimer::tick) == Some(Tick::Expired) {
            send();
        }
        sync();
    };

    timer.update_value(|timer| {
        timer.restore();
    });
    sync();

    // Runs for the whole view and is cleared when the view is disposed. Idle ticks are no-ops.
    let _ticker = StoredValue::new_local(Interval::new(TICK_MS, on_tick));

    let on_start = move |_| {
        match timer.try_update_value(AttendanceTimer::start) {
            Some(Ok(toast)) => toasts.show(toast),
            Some(Err(err)) => toasts.show(Toast::error(err.to_string())),
            None => {}
        }
        sync();
    };

    let ring = Signal::derive(move || countdown.get().unwrap_or(Countdown::new(0, duration)));
    let teacher_email = identity.email.clone();
    let (length_title, length_adjective) = window_length_labels(duration);
    let stats = [
        (length_title, "Duration"),
        ("Real-time".to_string(), "Timer"),
        ("Auto".to_string(), "Submit"),
    ];

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <ProfileBar identity=identity />
            <ToastView toasts=toasts />
            <main class="max-w-3xl mx-auto px-4 py-10">
                <PageHeader
                    title="Teacher Dashboard"
                    subtitle="Manage attendance sessions for your students"
                />
                {move || match phase.get() {
                    TimerPhase::Idle => {
                        view! {
                            <section class="bg-white rounded-2xl shadow-xl p-8 text-center">
                                <h2 class="text-2xl font-semibold text-gray-900 mb-3">
                                    "Start Attendance Session"
                                </h2>
                                <p class="text-gray-600 mb-6">
                                    {format!(
                                        "Click the button below to start a {length_adjective} attendance window. Students will be able to mark their attendance during this time.",
                                    )}
                                </p>
                                <button
                                    type="button"
                                    class="px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white text-lg font-semibold rounded-xl shadow"
                                    on:click=on_start
                                >
                                    "Start Attendance"
                                </button>
                                <div class="mt-8 grid grid-cols-3 gap-4">
                                    {stats
                                        .iter()
                                        .map(|(value, label)| {
                                            view! {
                                                <div class="rounded-lg bg-gray-50 p-4">
                                                    <p class="text-lg font-bold text-blue-600">
                                                        {value.clone()}
                                                    </p>
                                                    <p class="text-sm text-gray-500">{*label}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                            .into_any()
                    }
                    TimerPhase::Active { .. } | TimerPhase::Completing => {
                        let teacher_email = teacher_email.clone();
                        view! {
                            <section class="bg-white rounded-2xl shadow-xl p-8 text-center space-y-6">
                                <CountdownRing countdown=ring />
                                <div>
                                    <h2 class="text-2xl font-semibold text-green-700">
                                        "Attendance is Active"
                                    </h2>
                                    <p class="text-gray-600">"Students can now mark their attendance"</p>
                                </div>
                                <div class="rounded-lg bg-blue-50 p-4 text-sm text-blue-900 text-left">
                                    "Attendance will be automatically submitted when the timer reaches zero. The data will be sent to "
                                    <span class="font-semibold">{teacher_email}</span>
                                </div>
                            </section>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
