mod location_check;
mod login;
mod student_dashboard;
mod teacher_dashboard;

pub(crate) use location_check::LocationCheckPage;
pub(crate) use login::LoginPage;
pub(crate) use student_dashboard::StudentDashboard;
pub(crate) use teacher_dashboard::TeacherDashboard;
