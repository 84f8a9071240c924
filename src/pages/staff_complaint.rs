//! Public complaint intake form for staff.

use leptos::prelude::*;

use crate::components::alert_modal::{ALERT_AUTO_CLOSE_MS, Alert, AlertModal};
use crate::net::http::use_api;
use crate::net::services::staff;
use crate::net::types::{Complaint, ComplaintForm};
use crate::util::auth::HOME_PATH;
use crate::util::display::{department_label, format_date, or_na, status_badge_class, status_label};
use crate::util::forms::{validate_complaint, validate_lookup_email};

#[component]
pub fn StaffComplaintPage() -> impl IntoView {
    let api = use_api();

    let departments = RwSignal::new(Vec::<String>::new());
    let form = RwSignal::new(ComplaintForm::default());
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<Alert>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match staff::get_departments(api).await {
                Ok(list) => departments.set(list),
                Err(e) => log::warn!("department list failed: {e}"),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let cleaned = match form.with_untracked(validate_complaint) {
            Ok(cleaned) => cleaned,
            Err(message) => {
                alert.set(Some(Alert::error("Missing information", message)));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match staff::submit_complaint(api, &cleaned).await {
                Ok(()) => {
                    form.set(ComplaintForm::default());
                    alert.set(Some(Alert::success(
                        "Complaint submitted",
                        "Your complaint has been received. The IT team will follow up.",
                    )));
                }
                Err(e) => {
                    log::warn!("complaint submission failed: {e}");
                    alert.set(Some(Alert::error(
                        "Submission failed",
                        e.user_message("Could not submit the complaint. Please try again."),
                    )));
                }
            }
            busy.set(false);
        });
    };

    let on_alert_close = Callback::new(move |()| alert.set(None));

    view! {
        <div class="complaint-page">
            <header class="complaint-page__header">
                <a class="complaint-page__back" href=HOME_PATH>
                    "← Home"
                </a>
                <h1>"Submit a Complaint"</h1>
            </header>
            <form class="complaint-form" on:submit=on_submit>
                <label class="complaint-form__label">
                    "Your Name"
                    <input
                        class="complaint-form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.staff_name.clone())
                        on:input=move |ev| form.update(|f| f.staff_name = event_target_value(&ev))
                    />
                </label>
                <label class="complaint-form__label">
                    "Department"
                    <select
                        class="complaint-form__input"
                        prop:value=move || form.with(|f| f.department.clone())
                        on:change=move |ev| form.update(|f| f.department = event_target_value(&ev))
                    >
                        <option value="">"Select a department"</option>
                        {move || {
                            departments
                                .get()
                                .into_iter()
                                .map(|d| {
                                    let label = department_label(&d);
                                    view! { <option value=d>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="complaint-form__label">
                    "Title"
                    <input
                        class="complaint-form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="complaint-form__label">
                    "Description"
                    <textarea
                        class="complaint-form__input complaint-form__input--multiline"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="complaint-form__label">
                    "Location"
                    <input
                        class="complaint-form__input"
                        type="text"
                        placeholder="Building and room"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Complaint" }}
                </button>
            </form>
            <ComplaintTracker/>
            {move || {
                alert
                    .get()
                    .map(|a| {
                        view! { <AlertModal alert=a on_close=on_alert_close auto_close_ms=ALERT_AUTO_CLOSE_MS/> }
                    })
            }}
        </div>
    }
}

/// Lookup of earlier complaints by the submitter's email.
#[component]
fn ComplaintTracker() -> impl IntoView {
    let api = use_api();
    let email = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Vec<Complaint>>);
    let selected = RwSignal::new(None::<Complaint>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validate_lookup_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        selected.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match staff::get_complaints(api, &address).await {
                Ok(list) => results.set(Some(list)),
                Err(e) => error.set(Some(e.user_message("Could not look up complaints."))),
            }
            busy.set(false);
        });
    };

    let open_details = move |id: String| {
        leptos::task::spawn_local(async move {
            match staff::get_complaint(api, &id).await {
                Ok(complaint) => selected.set(Some(complaint)),
                Err(e) => error.set(Some(e.user_message("Could not load the complaint."))),
            }
        });
    };

    view! {
        <section class="complaint-tracker">
            <h2>"Track Your Complaints"</h2>
            <form class="complaint-tracker__form" on:submit=on_search>
                <input
                    class="complaint-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Search"
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="complaint-tracker__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                results
                    .get()
                    .map(|list| {
                        if list.is_empty() {
                            return view! { <p class="complaint-tracker__empty">"No complaints found."</p> }.into_any();
                        }
                        view! {
                            <ul class="complaint-tracker__list">
                                {list
                                    .into_iter()
                                    .map(|c| {
                                        let id = c.id.clone();
                                        view! {
                                            <li class="complaint-tracker__row">
                                                <span>{c.title}</span>
                                                <span class=format!("badge {}", status_badge_class(&c.status))>
                                                    {status_label(&c.status)}
                                                </span>
                                                <button class="btn" on:click=move |_| open_details(id.clone())>
                                                    "Details"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    })
            }}
            {move || {
                selected
                    .get()
                    .map(|c| {
                        let ticket = c.ticket.as_ref().map_or_else(|| "Not yet assigned".to_owned(), |t| t.ticket_number.clone());
                        view! {
                            <dl class="detail-grid complaint-tracker__details">
                                <dt>"Title"</dt>
                                <dd>{c.title}</dd>
                                <dt>"Department"</dt>
                                <dd>{department_label(&c.department)}</dd>
                                <dt>"Status"</dt>
                                <dd>{status_label(&c.status)}</dd>
                                <dt>"Ticket"</dt>
                                <dd>{ticket}</dd>
                                <dt>"Submitted"</dt>
                                <dd>{c.created_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                                <dt>"Description"</dt>
                                <dd>{or_na(c.description.as_deref())}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
