use attendance_core::timer::Countdown;
use leptos::prelude::*;

const RADIUS: f64 = 88.0;

/// Circular progress ring around the remaining `MM:SS`.
#[component]
pub fn CountdownRing(#[prop(into)] countdown: Signal<Countdown>) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = move || {
        (circumference * (1.0 - countdown.get().progress_percent() / 100.0)).to_string()
    };

    view! {
        <div class="relative w-52 h-52 mx-auto">
            <svg class="w-full h-full -rotate-90" viewBox="0 0 200 200">
                <circle
                    cx="100"
                    cy="100"
                    r=RADIUS.to_string()
                    fill="none"
                    stroke-width="12"
                    class="stroke-gray-200"
                ></circle>
                <circle
                    cx="100"
                    cy="100"
                    r=RADIUS.to_string()
                    fill="none"
                    stroke-width="12"
                    stroke-linecap="round"
                    class="stroke-blue-600 transition-all duration-1000"
                    stroke-dasharray=circumference.to_string()
                    stroke-dashoffset=offset
                ></circle>
            </svg>
            <div class="absolute inset-0 flex flex-col items-center justify-center">
                <span class="text-4xl font-bold text-gray-900 tabular-nums">
                    {move || countdown.get().display()}
                </span>
                <span class="text-sm text-gray-500">"remaining"</span>
            </div>
        </div>
    }
}
