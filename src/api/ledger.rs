//! In-memory attendance ledger.
//!
//! A mark records one entry per student email; marking again refreshes the
//! entry. Sending drains everything recorded so far.

use attendance_core::Coordinates;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mark {
    pub position: Coordinates,
    pub marked_at_ms: i64,
}

#[derive(Debug, Default)]
pub struct Ledger {
    marks: RwLock<BTreeMap<String, Mark>>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mark. Returns `true` when the email had no entry yet.
    pub async fn mark(&self, email: &str, position: Coordinates, marked_at_ms: i64) -> bool {
        let key = email.trim().to_lowercase();
        let mut marks = self.marks.write().await;
        let fresh = marks
            .insert(
                key,
                Mark {
                    position,
                    marked_at_ms,
                },
            )
            .is_none();
        debug!(fresh, total = marks.len(), "attendance mark recorded");
        fresh
    }

    /// Take every recorded mark, leaving the ledger empty.
    pub async fn drain(&self) -> Vec<(String, Mark)> {
        let mut marks = self.marks.write().await;
        std::mem::take(&mut *marks).into_iter().collect()
    }

    pub async fn len(&self) -> usize {
        self.marks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.marks.read().await.is_empty()
    }
}
