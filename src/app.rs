//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast::Toasts;
use crate::net::types::Role;
use crate::pages::{
    admin_complaints::AdminComplaintsPage, admin_dashboard::AdminDashboardPage, admin_settings::AdminSettingsPage,
    admin_workers::AdminWorkersPage, home::HomePage, login::LoginPage, staff_complaint::StaffComplaintPage,
    worker_dashboard::WorkerDashboardPage,
};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The session and API client are provided by `AuthProvider`, which must sit
/// inside the router because the 401 handler navigates.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/helpdesk.css"/>
        <Title text="CMC IT Support"/>

        <Router>
            <AuthProvider>
                <Routes fallback=|| view! { <HomePage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("submit-complaint") view=StaffComplaintPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("login"))
                        view=|| view! { <LoginPage role=Role::Admin/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute required_role=Role::Admin><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("complaints"))
                        view=|| view! { <ProtectedRoute required_role=Role::Admin><AdminComplaintsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("workers"))
                        view=|| view! { <ProtectedRoute required_role=Role::Admin><AdminWorkersPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("settings"))
                        view=|| view! { <ProtectedRoute required_role=Role::Admin><AdminSettingsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("worker"), StaticSegment("login"))
                        view=|| view! { <LoginPage role=Role::Worker/> }
                    />
                    <Route
                        path=(StaticSegment("worker"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute required_role=Role::Worker><WorkerDashboardPage/></ProtectedRoute> }
                    />
                </Routes>
                <Toasts/>
            </AuthProvider>
        </Router>
    }
}
