//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page and course catalog
//! - Course detail, lesson player and course creation
//! - Login, signup, password reset and email verification pages

mod course_detail;
mod courses;
mod create_course;
mod forgot_password;
mod home;
mod lesson;
mod login;
mod not_found;
mod reset_password;
mod signup;
mod verification_pending;
mod verify_email;

pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use create_course::CreateCoursePage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use lesson::LessonPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use reset_password::ResetPasswordPage;
pub use signup::SignupPage;
pub use verification_pending::VerificationPendingPage;
pub use verify_email::VerifyEmailPage;
