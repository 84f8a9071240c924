//! Public landing page with one card per portal.

use leptos::prelude::*;

use crate::net::types::Role;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"CMC IT Support Desk"</h1>
                <p>"Report an IT problem or sign in to manage tickets."</p>
            </header>
            <div class="home-page__cards">
                <PortalCard
                    title="Staff"
                    description="Submit a complaint about equipment, network or software."
                    href="/submit-complaint".to_owned()
                    action="Submit Complaint"
                />
                <PortalCard
                    title="Administrator"
                    description="Review complaints, assign tickets and manage workers."
                    href=Role::Admin.login_path()
                    action="Admin Login"
                />
                <PortalCard
                    title="IT Worker"
                    description="See assigned tickets and report progress."
                    href=Role::Worker.login_path()
                    action="Worker Login"
                />
            </div>
        </div>
    }
}

#[component]
fn PortalCard(title: &'static str, description: &'static str, href: String, action: &'static str) -> impl IntoView {
    view! {
        <div class="portal-card">
            <h2>{title}</h2>
            <p>{description}</p>
            <a class="btn btn--primary" href=href>
                {action}
            </a>
        </div>
    }
}
