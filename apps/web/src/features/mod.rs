//! Application state shared through Leptos context.

pub(crate) mod services;
pub(crate) mod session;
pub(crate) mod toasts;
