//! Top navigation for the admin area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::use_auth;
use crate::util::auth::HOME_PATH;

const LINKS: [(&str, &str); 4] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/complaints", "Complaints"),
    ("/admin/workers", "Workers"),
    ("/admin/settings", "Settings"),
];

#[component]
pub fn AdminNavigation() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let admin_name = move || auth.identity().map(|i| i.display_name()).unwrap_or_default();

    let on_logout = move |_| {
        navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        auth.logout();
    };

    view! {
        <nav class="admin-nav">
            <span class="admin-nav__brand">"CMC IT Support"</span>
            <ul class="admin-nav__links">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=move || {
                                        if pathname.get() == href {
                                            "admin-nav__link admin-nav__link--active"
                                        } else {
                                            "admin-nav__link"
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <span class="admin-nav__spacer"></span>
            <span class="admin-nav__self">{admin_name}</span>
            <button class="btn admin-nav__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
