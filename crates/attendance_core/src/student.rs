//! Student attendance submission: one "mark present" call per dashboard
//! activation, using the last verified location. Failure is terminal until the
//! page is reloaded.

use crate::{
    api::AttendanceApi,
    clock::Clock,
    error::AttendError,
    storage::{KeyValueStore, LOCATION_KEY, load_json},
    toast::Toast,
    types::Coordinates,
};
use tracing::{debug, warn};

pub const MARKED: &str = "Attendance marked successfully!";
pub const MARK_FAILED: &str = "Failed to mark attendance";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Marking,
    /// `at_ms` is the client clock at confirmation time.
    Marked { at_ms: i64 },
    Failed(String),
}

impl SubmissionStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Marking)
    }
}

/// Guards the single submission of a dashboard activation.
#[derive(Debug)]
pub struct StudentSubmission {
    status: SubmissionStatus,
    started: bool,
}

impl Default for StudentSubmission {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentSubmission {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SubmissionStatus::Marking,
            started: false,
        }
    }

    /// Returns `true` the first time only.
    pub fn begin(&mut self) -> bool {
        if self.started {
            false
        } else {
            self.started = true;
            true
        }
    }

    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Stores the outcome; a terminal status is never overwritten.
    pub fn settle(&mut self, status: SubmissionStatus) {
        if !self.status.is_terminal() {
            self.status = status;
        }
    }
}

fn stored_location(store: &impl KeyValueStore) -> Option<Coordinates> {
    load_json::<Coordinates>(store, LOCATION_KEY).filter(Coordinates::is_valid)
}

/// Marks `student_email` present at the stored location.
pub async fn mark_present<A, S, C>(
    api: &A,
    store: &S,
    clock: &C,
    student_email: &str,
) -> (SubmissionStatus, Toast)
where
    A: AttendanceApi,
    S: KeyValueStore,
    C: Clock,
{
    let Some(coords) = stored_location(store) else {
        warn!("no verified location stored for attendance");
        let message = AttendError::LocationNotFound.to_string();
        return (
            SubmissionStatus::Failed(message.clone()),
            Toast::error(message),
        );
    };

    match api.mark_attendance(student_email, coords).await {
        Ok(response) if response.success => {
            debug!("attendance marked");
            (
                SubmissionStatus::Marked {
                    at_ms: clock.now_ms(),
                },
                Toast::success(response.message.unwrap_or_else(|| MARKED.to_string())),
            )
        }
        Ok(response) => {
            let message = response.message.unwrap_or_else(|| MARK_FAILED.to_string());
            (
                SubmissionStatus::Failed(message.clone()),
                Toast::error(message),
            )
        }
        Err(err) => {
            warn!("attendance mark failed: {err}");
            let message = err.to_string();
            (
                SubmissionStatus::Failed(message.clone()),
                Toast::error(message),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::fake::FakeApi, clock::ManualClock, storage::MemoryStore, toast::Severity,
        types::AttendanceResponse,
    };

    const NOW: i64 = 1_700_000_123_000;

    #[tokio::test]
    async fn marks_with_stored_location() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        store.set(LOCATION_KEY, r#"{"lat":12.9,"lng":77.6}"#)?;
        let api = FakeApi::default();
        let clock = ManualClock::at(NOW);

        let (status, toast) = mark_present(&api, &store, &clock, "b@gmail.com").await;

        assert_eq!(status, SubmissionStatus::Marked { at_ms: NOW });
        assert_eq!(toast.severity, Severity::Success);
        assert_eq!(
            *api.marked.borrow(),
            vec![("b@gmail.com".to_string(), Coordinates::new(12.9, 77.6))]
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_location_fails_without_calling_api() {
        let store = MemoryStore::new();
        let api = FakeApi::default();
        let clock = ManualClock::at(NOW);

        let (status, toast) = mark_present(&api, &store, &clock, "b@gmail.com").await;

        assert_eq!(
            status,
            SubmissionStatus::Failed("Location not found".to_string())
        );
        assert_eq!(toast, Toast::error("Location not found"));
        assert!(api.marked.borrow().is_empty());
    }

    #[tokio::test]
    async fn corrupted_location_counts_as_missing() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        store.set(LOCATION_KEY, "{\"lat\":")?;
        let api = FakeApi::default();

        let (status, _) =
            mark_present(&api, &store, &ManualClock::at(NOW), "b@gmail.com").await;

        assert!(matches!(status, SubmissionStatus::Failed(_)));
        assert!(!store.contains(LOCATION_KEY));
        Ok(())
    }

    #[tokio::test]
    async fn unsuccessful_response_is_terminal_failure() -> Result<(), AttendError> {
        let store = MemoryStore::new();
        store.set(LOCATION_KEY, r#"{"lat":12.9,"lng":77.6}"#)?;
        let api = FakeApi::default();
        *api.mark_reply.borrow_mut() = Some(Ok(AttendanceResponse {
            success: false,
            message: None,
        }));

        let (status, toast) =
            mark_present(&api, &store, &ManualClock::at(NOW), "b@gmail.com").await;
        assert_eq!(status, SubmissionStatus::Failed(MARK_FAILED.to_string()));
        assert_eq!(toast.severity, Severity::Error);
        Ok(())
    }

    #[test]
    fn submission_runs_once_per_activation() {
        let mut submission = StudentSubmission::new();
        assert!(submission.begin());
        assert!(!submission.begin());

        submission.settle(SubmissionStatus::Failed("offline".to_string()));
        submission.settle(SubmissionStatus::Marked { at_ms: NOW });
        assert_eq!(
            submission.status(),
            &SubmissionStatus::Failed("offline".to_string())
        );
    }
}
