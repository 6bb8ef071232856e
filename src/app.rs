use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    CourseDetailPage, CoursesPage, CreateCoursePage, ForgotPasswordPage, HomePage, LessonPage,
    LoginPage, NotFoundPage, ResetPasswordPage, SignupPage, VerificationPendingPage,
    VerifyEmailPage,
};
use crate::ui::{Header, provide_auth_context, provide_catalog_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-neutral-950">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session state, checked against the API once hydrated
    provide_auth_context();
    provide_catalog_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/cognify.css"/>
        <Title text="Cognify - Learn without limits"/>

        <Router>
            <Header />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/reset-password/:token") view=ResetPasswordPage />
                    <Route path=path!("/verify-email/:token") view=VerifyEmailPage />
                    <Route path=path!("/verification-pending") view=VerificationPendingPage />
                    <Route path=path!("/courses") view=CoursesPage />
                    <Route path=path!("/courses/create") view=CreateCoursePage />
                    <Route path=path!("/courses/:course_id") view=CourseDetailPage />
                    <Route path=path!("/courses/:course_id/lesson/:lesson_id") view=LessonPage />
                </Routes>
            </main>
        </Router>
    }
}
