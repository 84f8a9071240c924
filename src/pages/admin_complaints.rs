//! Admin complaint table with details and ticket creation.

#[cfg(test)]
#[path = "admin_complaints_test.rs"]
mod admin_complaints_test;

use leptos::prelude::*;

use crate::components::admin_navigation::AdminNavigation;
use crate::net::http::use_api;
use crate::net::services::admin;
use crate::net::types::{Complaint, NewTicket, TicketPatch, Worker};
use crate::state::toast::{ToastKind, notify};
use crate::util::display::{
    DEFAULT_PRIORITY, PRIORITY_OPTIONS, department_label, format_date, image_url, or_na, status_badge_class,
    status_label,
};

const STATUS_FILTERS: [(&str, &str); 6] = [
    ("", "All"),
    ("PENDING", "Pending"),
    ("ASSIGNED", "Assigned"),
    ("IN_PROGRESS", "In Progress"),
    ("RESOLVED", "Resolved"),
    ("CLOSED", "Closed"),
];

#[component]
pub fn AdminComplaintsPage() -> impl IntoView {
    let api = use_api();
    let complaints = RwSignal::new(Vec::<Complaint>::new());
    let workers = RwSignal::new(Vec::<Worker>::new());
    let loading = RwSignal::new(true);
    let status_filter = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    let details = RwSignal::new(None::<Complaint>);
    let ticket_for = RwSignal::new(None::<Complaint>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match admin::get_complaints(api, &[]).await {
                Ok(list) => complaints.set(list),
                Err(e) => log::warn!("complaint list failed: {e}"),
            }
            match admin::get_workers(api, &[]).await {
                Ok(list) => workers.set(list),
                Err(e) => log::warn!("worker list failed: {e}"),
            }
            loading.set(false);
        });
    });

    let visible = move || complaints.with(|list| filter_by_status(list, &status_filter.get()));

    let on_details_close = Callback::new(move |()| details.set(None));
    let on_ticket_close = Callback::new(move |()| ticket_for.set(None));
    let on_ticket_created = Callback::new(move |()| {
        ticket_for.set(None);
        reload.update(|n| *n += 1);
    });
    let on_ticket_updated = Callback::new(move |()| {
        details.set(None);
        reload.update(|n| *n += 1);
    });
    let on_create_from_details = Callback::new(move |complaint: Complaint| {
        details.set(None);
        ticket_for.set(Some(complaint));
    });

    view! {
        <div class="admin-page">
            <AdminNavigation/>
            <main class="admin-page__content">
                <div class="admin-page__toolbar">
                    <h1>"Complaints"</h1>
                    <select
                        class="admin-page__filter"
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        {STATUS_FILTERS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <Show when=move || !loading.get() fallback=move || view! { <p>"Loading complaints..."</p> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Staff"</th>
                                <th>"Department"</th>
                                <th>"Status"</th>
                                <th>"Ticket"</th>
                                <th>"Date"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|c| (c.id.clone(), c.status.clone(), c.ticket.is_some())
                                children=move |complaint| {
                                    let row = complaint.clone();
                                    let has_ticket = complaint.ticket.is_some();
                                    let for_ticket = complaint.clone();
                                    view! {
                                        <tr>
                                            <td>{complaint.title.clone()}</td>
                                            <td>{complaint.staff_name.clone()}</td>
                                            <td>{department_label(&complaint.department)}</td>
                                            <td>
                                                <span class=format!("badge {}", status_badge_class(&complaint.status))>
                                                    {status_label(&complaint.status)}
                                                </span>
                                            </td>
                                            <td>
                                                {complaint
                                                    .ticket
                                                    .as_ref()
                                                    .map_or_else(|| "—".to_owned(), |t| t.ticket_number.clone())}
                                            </td>
                                            <td>{complaint.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                            <td class="data-table__actions">
                                                <button class="btn" on:click=move |_| details.set(Some(row.clone()))>
                                                    "View"
                                                </button>
                                                <Show when=move || !has_ticket>
                                                    {
                                                        let for_ticket = for_ticket.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn--primary"
                                                                on:click=move |_| ticket_for.set(Some(for_ticket.clone()))
                                                            >
                                                                "Create Ticket"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || visible().is_empty()>
                        <p class="admin-page__empty">"No complaints found."</p>
                    </Show>
                </Show>
            </main>
            {move || {
                details
                    .get()
                    .map(|complaint| {
                        view! {
                            <ComplaintDetailsDialog
                                complaint=complaint
                                workers=workers
                                on_close=on_details_close
                                on_updated=on_ticket_updated
                                on_create_ticket=on_create_from_details
                            />
                        }
                    })
            }}
            {move || {
                ticket_for
                    .get()
                    .map(|complaint| {
                        view! {
                            <CreateTicketDialog
                                complaint=complaint
                                workers=workers
                                on_cancel=on_ticket_close
                                on_created=on_ticket_created
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ComplaintDetailsDialog(
    complaint: Complaint,
    workers: RwSignal<Vec<Worker>>,
    on_close: Callback<()>,
    on_updated: Callback<()>,
    on_create_ticket: Callback<Complaint>,
) -> impl IntoView {
    let for_ticket = complaint.clone();
    let Complaint { staff_name, department, title, description, location, status, created_at, images, ticket, .. } =
        complaint;
    let has_ticket = ticket.is_some();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Complaint Details"</h2>
                <dl class="detail-grid">
                    <dt>"Staff"</dt>
                    <dd>{staff_name}</dd>
                    <dt>"Department"</dt>
                    <dd>{department_label(&department)}</dd>
                    <dt>"Title"</dt>
                    <dd>{title}</dd>
                    <dt>"Location"</dt>
                    <dd>{or_na(location.as_deref())}</dd>
                    <dt>"Status"</dt>
                    <dd>
                        <span class=format!("badge {}", status_badge_class(&status))>{status_label(&status)}</span>
                    </dd>
                    <dt>"Submitted"</dt>
                    <dd>{created_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                    <dt>"Description"</dt>
                    <dd>{or_na(description.as_deref())}</dd>
                </dl>
                <Show when={
                    let count = images.len();
                    move || count > 0
                }>
                    <div class="detail-images">
                        {images
                            .iter()
                            .map(|path| {
                                let src = image_url(path);
                                let href = src.clone();
                                view! {
                                    <a href=href target="_blank" rel="noopener">
                                        <img class="detail-images__thumb" src=src alt="Complaint attachment"/>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>
                {ticket
                    .map(|t| {
                        let current_worker = t.worker.as_ref().map(|w| w.id.clone()).unwrap_or_default();
                        let assignee = t
                            .worker
                            .map_or_else(|| "Unassigned".to_owned(), |w| format!("{} {}", w.first_name, w.last_name));
                        view! {
                            <div class="detail-ticket">
                                <span class="detail-ticket__number">{t.ticket_number}</span>
                                <span class="detail-ticket__worker">{assignee}</span>
                            </div>
                            <ReassignTicket
                                ticket_id=t.id
                                current_worker=current_worker
                                workers=workers
                                on_updated=on_updated
                            />
                        }
                    })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <Show when=move || !has_ticket>
                        {
                            let for_ticket = for_ticket.clone();
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_create_ticket.run(for_ticket.clone())
                                >
                                    "Create Ticket"
                                </button>
                            }
                        }
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Worker and priority change for an existing ticket.
#[component]
fn ReassignTicket(
    ticket_id: String,
    current_worker: String,
    workers: RwSignal<Vec<Worker>>,
    on_updated: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let worker_id = RwSignal::new(current_worker);
    let priority = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        let Some(patch) = reassignment_patch(&worker_id.get_untracked(), &priority.get_untracked()) else {
            notify(ToastKind::Info, "Choose a worker or priority first.");
            return;
        };
        busy.set(true);
        let id = ticket_id.clone();
        leptos::task::spawn_local(async move {
            match admin::update_ticket(api, &id, &patch).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Ticket updated successfully!");
                    on_updated.run(());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to update ticket")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="detail-reassign">
            <select
                class="dialog__input"
                prop:value=move || worker_id.get()
                on:change=move |ev| worker_id.set(event_target_value(&ev))
            >
                <option value="">"Keep current worker"</option>
                {move || {
                    workers
                        .get()
                        .into_iter()
                        .filter(|w| w.is_active)
                        .map(|w| {
                            let label = format!("{} {}", w.first_name, w.last_name);
                            view! { <option value=w.id>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <select
                class="dialog__input"
                prop:value=move || priority.get()
                on:change=move |ev| priority.set(event_target_value(&ev))
            >
                <option value="">"Keep priority"</option>
                {PRIORITY_OPTIONS
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button class="btn" on:click=on_save disabled=move || busy.get()>
                "Save"
            </button>
        </div>
    }
}

#[component]
fn CreateTicketDialog(
    complaint: Complaint,
    workers: RwSignal<Vec<Worker>>,
    on_cancel: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let worker_id = RwSignal::new(String::new());
    let priority = RwSignal::new(DEFAULT_PRIORITY.to_owned());
    let notes = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let complaint_id = complaint.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let ticket = new_ticket(&complaint_id, &worker_id.get_untracked(), &priority.get_untracked(), &notes.get_untracked());
        leptos::task::spawn_local(async move {
            match admin::create_ticket(api, &ticket).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Ticket created successfully!");
                    on_created.run(());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to create ticket")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Create Ticket"</h2>
                <p class="dialog__subtitle">{complaint.title}</p>
                <label class="dialog__label">
                    "Assign Worker"
                    <select
                        class="dialog__input"
                        prop:value=move || worker_id.get()
                        on:change=move |ev| worker_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select Worker (Leave unassigned)"</option>
                        {move || {
                            workers
                                .get()
                                .into_iter()
                                .filter(|w| w.is_active)
                                .map(|w| {
                                    let label = format!("{} {} ({} tickets)", w.first_name, w.last_name, w.ticket_count);
                                    view! { <option value=w.id>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Priority"
                    <select
                        class="dialog__input"
                        prop:value=move || priority.get()
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        {PRIORITY_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Notes"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Ticket"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Complaints matching `status`; an empty filter keeps everything.
fn filter_by_status(complaints: &[Complaint], status: &str) -> Vec<Complaint> {
    complaints.iter().filter(|c| status.is_empty() || c.status == status).cloned().collect()
}

fn new_ticket(complaint_id: &str, worker_id: &str, priority: &str, notes: &str) -> NewTicket {
    let worker_id = worker_id.trim();
    NewTicket {
        complaint_id: complaint_id.to_owned(),
        worker_id: (!worker_id.is_empty()).then(|| worker_id.to_owned()),
        priority: if priority.is_empty() { DEFAULT_PRIORITY.to_owned() } else { priority.to_owned() },
        notes: notes.trim().to_owned(),
    }
}

/// Patch for the reassign form; `None` when nothing was chosen.
fn reassignment_patch(worker_id: &str, priority: &str) -> Option<TicketPatch> {
    let worker_id = worker_id.trim();
    let priority = priority.trim();
    if worker_id.is_empty() && priority.is_empty() {
        return None;
    }
    Some(TicketPatch {
        worker_id: (!worker_id.is_empty()).then(|| worker_id.to_owned()),
        priority: (!priority.is_empty()).then(|| priority.to_owned()),
        ..TicketPatch::default()
    })
}
