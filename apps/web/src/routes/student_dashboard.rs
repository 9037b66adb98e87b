//! Student view: marks the signed-in student present once per visit.

use crate::app_lib::platform::{BrowserClock, LocalStore, local_time};
use crate::components::{PageHeader, ProfileBar, Spinner, ToastView};
use crate::features::services::use_api;
use crate::features::toasts::Toasts;
use attendance_core::{
    Identity,
    scope::Lifetime,
    student::{StudentSubmission, SubmissionStatus, mark_present},
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn StudentDashboard(identity: Identity) -> impl IntoView {
    let api = use_api();
    let toasts = Toasts::new();
    let submission = StoredValue::new(StudentSubmission::new());
    let status = RwSignal::new(SubmissionStatus::Marking);

    let lifetime = StoredValue::new_local(Lifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(Lifetime::end);
    });

    let first = submission
        .try_update_value(StudentSubmission::begin)
        .unwrap_or(false);
    if let (true, Some(alive)) = (first, lifetime.try_with_value(Lifetime::token)) {
        let email = identity.email.clone();
        spawn_local(async move {
            let (outcome, toast) = mark_present(&api, &LocalStore, &BrowserClock, &email).await;
            alive.apply((outcome, toast), |(outcome, toast)| {
                let settled = submission.try_update_value(|submission| {
                    submission.settle(outcome);
                    submission.status().clone()
                });
                if let Some(settled) = settled {
                    status.set(settled);
                }
                toasts.show(toast);
            });
        });
    }

    let name = identity.name.clone();
    let email = identity.email.clone();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <ProfileBar identity=identity />
            <ToastView toasts=toasts />
            <main class="max-w-2xl mx-auto px-4 py-10">
                <PageHeader title="Student Dashboard" subtitle="Your attendance status" />
                <section class="bg-white rounded-2xl shadow-xl p-8 text-center">
                    {move || match status.get() {
                        SubmissionStatus::Marking => {
                            view! {
                                <div class="flex flex-col items-center gap-4">
                                    <Spinner large=true />
                                    <h2 class="text-xl font-semibold text-gray-900">
                                        "Marking Your Attendance"
                                    </h2>
                                    <p class="text-gray-600">
                                        "Please wait while we verify your information..."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        SubmissionStatus::Marked { at_ms } => {
                            let details = [
                                ("Student Name", name.clone()),
                                ("Email", email.clone()),
                                ("Status", "Present".to_string()),
                                ("Time", local_time(at_ms)),
                            ];
                            view! {
                                <div class="space-y-6">
                                    <div class="w-16 h-16 mx-auto flex items-center justify-center rounded-full bg-green-100 text-3xl text-green-600">
                                        "✓"
                                    </div>
                                    <div>
                                        <h2 class="text-2xl font-semibold text-green-700">
                                            "Attendance Marked Successfully!"
                                        </h2>
                                        <p class="text-gray-600">
                                            "Your attendance has been recorded for today's session."
                                        </p>
                                    </div>
                                    <dl class="rounded-lg bg-gray-50 p-4 text-left space-y-2">
                                        {details
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="flex justify-between gap-4">
                                                        <dt class="text-gray-500">{label}</dt>
                                                        <dd class="font-medium text-gray-900 truncate">{value}</dd>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </dl>
                                    <p class="text-sm text-gray-500">
                                        "You can close this page now. Your attendance has been submitted."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        SubmissionStatus::Failed(message) => {
                            view! {
                                <div class="space-y-4">
                                    <div class="w-16 h-16 mx-auto flex items-center justify-center rounded-full bg-red-100 text-3xl text-red-600">
                                        "✕"
                                    </div>
                                    <h2 class="text-2xl font-semibold text-red-700">
                                        "Unable to Mark Attendance"
                                    </h2>
                                    <p class="text-gray-600">
                                        "There was an issue marking your attendance. Please try again or contact your teacher."
                                    </p>
                                    <p class="text-sm text-red-600">{message}</p>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
