//! Remote calls consumed by the client. The browser implementation speaks JSON
//! over HTTP to the attendance API; tests substitute in-memory fakes.

use crate::{
    error::AttendError,
    types::{AttendanceResponse, Coordinates, LocationCheckResponse, UserRoleResponse},
};
use std::future::Future;

/// The four attendance calls. Futures are not `Send`: the client runs on a
/// single-threaded event loop.
pub trait AttendanceApi {
    fn check_location(
        &self,
        coords: Coordinates,
    ) -> impl Future<Output = Result<LocationCheckResponse, AttendError>>;

    fn check_user_role(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<UserRoleResponse, AttendError>>;

    fn mark_attendance(
        &self,
        student_email: &str,
        coords: Coordinates,
    ) -> impl Future<Output = Result<AttendanceResponse, AttendError>>;

    fn send_attendance(
        &self,
        teacher_email: &str,
    ) -> impl Future<Output = Result<AttendanceResponse, AttendError>>;
}

impl<T: AttendanceApi + ?Sized> AttendanceApi for &T {
    fn check_location(
        &self,
        coords: Coordinates,
    ) -> impl Future<Output = Result<LocationCheckResponse, AttendError>> {
        (**self).check_location(coords)
    }

    fn check_user_role(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<UserRoleResponse, AttendError>> {
        (**self).check_user_role(email)
    }

    fn mark_attendance(
        &self,
        student_email: &str,
        coords: Coordinates,
    ) -> impl Future<Output = Result<AttendanceResponse, AttendError>> {
        (**self).mark_attendance(student_email, coords)
    }

    fn send_attendance(
        &self,
        teacher_email: &str,
    ) -> impl Future<Output = Result<AttendanceResponse, AttendError>> {
        (**self).send_attendance(teacher_email)
    }
}
