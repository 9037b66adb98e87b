//! Shared UI components exported for routes and features.

mod countdown;
mod page;
mod profile_bar;
mod toast;
pub(crate) mod ui;

pub(crate) use countdown::CountdownRing;
pub(crate) use page::{CenteredCard, PageHeader};
pub(crate) use profile_bar::ProfileBar;
pub(crate) use toast::ToastView;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
