use super::ledger::Ledger;
use attendance_core::rules::RoleRules;
use std::time::Duration;

/// Shared by every handler through an `Extension<Arc<AppState>>`.
#[derive(Debug)]
pub struct AppState {
    rules: RoleRules,
    latency: Duration,
    ledger: Ledger,
}

impl AppState {
    #[must_use]
    pub fn new(rules: RoleRules, latency: Duration) -> Self {
        Self {
            rules,
            latency,
            ledger: Ledger::new(),
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &RoleRules {
        &self.rules
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Hold the call for the configured latency, if any.
    pub async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RoleRules::default(), Duration::ZERO)
    }
}
