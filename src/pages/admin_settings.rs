//! Admin account settings: profile, password, and new administrators.

use leptos::prelude::*;

use crate::components::account_fields::AccountFields;
use crate::components::admin_navigation::AdminNavigation;
use crate::net::http::use_api;
use crate::net::services::admin;
use crate::net::types::{NewAccount, ProfileUpdate};
use crate::state::auth::use_auth;
use crate::state::toast::{ToastKind, notify};
use crate::util::forms::{validate_new_account, validate_password_change};

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <AdminNavigation/>
            <main class="admin-page__content settings">
                <h1>"Settings"</h1>
                <ProfileSection/>
                <PasswordSection/>
                <CreateAdminSection/>
            </main>
        </div>
    }
}

#[component]
fn ProfileSection() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let initial = auth.state().with_untracked(|s| {
        s.identity().map_or_else(ProfileUpdate::default, |i| ProfileUpdate {
            first_name: i.first_name.clone(),
            last_name: i.last_name.clone(),
            email: i.email.clone(),
        })
    });
    let profile = RwSignal::new(initial);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let update = profile.get_untracked();
        leptos::task::spawn_local(async move {
            match admin::update_profile(api, &update).await {
                Ok(identity) => {
                    auth.update_identity(identity);
                    notify(ToastKind::Success, "Profile updated successfully!");
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to update profile")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="settings__section">
            <h2>"Profile"</h2>
            <form class="settings__form" on:submit=on_submit>
                <label class="dialog__label">
                    "First Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || profile.with(|p| p.first_name.clone())
                        on:input=move |ev| profile.update(|p| p.first_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Last Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || profile.with(|p| p.last_name.clone())
                        on:input=move |ev| profile.update(|p| p.last_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || profile.with(|p| p.email.clone())
                        on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Update Profile" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let api = use_api();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let passwords = match validate_password_change(&current.get_untracked(), &new.get_untracked(), &confirm.get_untracked())
        {
            Ok(passwords) => passwords,
            Err(message) => {
                notify(ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match admin::update_password(api, &passwords).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Password updated successfully!");
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to update password")),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, value: RwSignal<String>, autocomplete: &'static str| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="password"
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="settings__section">
            <h2>"Change Password"</h2>
            <form class="settings__form" on:submit=on_submit>
                {field("Current Password", current, "current-password")}
                {field("New Password", new, "new-password")}
                {field("Confirm New Password", confirm, "new-password")}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Updating..." } else { "Update Password" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn CreateAdminSection() -> impl IntoView {
    let api = use_api();
    let account = RwSignal::new(NewAccount::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let cleaned = match account.with_untracked(validate_new_account) {
            Ok(cleaned) => cleaned,
            Err(message) => {
                notify(ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match admin::register(api, &cleaned).await {
                Ok(()) => {
                    notify(ToastKind::Success, "New admin account created successfully!");
                    account.set(NewAccount::default());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to create admin account")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="settings__section">
            <h2>"Create Admin Account"</h2>
            <form class="settings__form" on:submit=on_submit>
                <AccountFields account=account/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Admin" }}
                </button>
            </form>
        </section>
    }
}
