use crate::app_lib::{AppConfig, platform::LocalStore};
use crate::features::services::{provide_services, use_config};
use crate::features::session::{SessionProvider, use_session};
use crate::routes::{LocationCheckPage, LoginPage, StudentDashboard, TeacherDashboard};
use attendance_core::{Coordinates, location::LocationGate, session::Screen};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_services(AppConfig::load());

    view! {
        <SessionProvider>
            <Shell />
        </SessionProvider>
    }
}

/// Picks the screen from the gate result and the session.
#[component]
fn Shell() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let resumed = LocationGate::new(LocalStore, config.location_policy)
        .resume()
        .is_some();
    let location_verified = RwSignal::new(resumed);

    let screen = Memo::new(move |_| {
        let verified = location_verified.get();
        session
            .session
            .with(|current| Screen::select(verified, current))
    });
    let on_verified = Callback::new(move |_: Coordinates| location_verified.set(true));

    move || {
        let identity = session.identity_untracked();
        match (screen.get(), identity) {
            (Screen::TeacherDashboard, Some(identity)) => {
                view! { <TeacherDashboard identity=identity /> }.into_any()
            }
            (Screen::StudentDashboard, Some(identity)) => {
                view! { <StudentDashboard identity=identity /> }.into_any()
            }
            (Screen::LocationCheck, _) => {
                view! { <LocationCheckPage on_verified=on_verified /> }.into_any()
            }
            _ => view! { <LoginPage /> }.into_any(),
        }
    }
}
