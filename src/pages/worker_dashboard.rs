//! Worker landing page: ticket counters, assigned tickets, status updates.

#[cfg(test)]
#[path = "worker_dashboard_test.rs"]
mod worker_dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::use_api;
use crate::net::services::worker;
use crate::net::types::{Identity, Role, Ticket, Worker, WorkerStats};
use crate::state::auth::use_auth;
use crate::state::toast::{ToastKind, notify};
use crate::util::display::{
    WORKER_STATUS_OPTIONS, department_label, image_url, or_na, priority_class, status_badge_class, status_label,
};
use crate::util::forms::{validate_status_update, validate_ticket_note};

#[component]
pub fn WorkerDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let stats = RwSignal::new(WorkerStats::default());
    let tickets = RwSignal::new(Vec::<Ticket>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let updating = RwSignal::new(None::<Ticket>);
    let noting = RwSignal::new(None::<Ticket>);
    let profile = RwSignal::new(None::<Worker>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match worker::get_profile(api).await {
                Ok(me) => profile.set(Some(me)),
                Err(e) => log::warn!("worker profile failed: {e}"),
            }
        });
    });

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match worker::get_tickets(api, &[]).await {
                Ok(list) => tickets.set(list),
                Err(e) => log::warn!("ticket list failed: {e}"),
            }
            match worker::get_stats(api).await {
                Ok(counts) => stats.set(counts),
                Err(e) => log::warn!("worker stats failed: {e}"),
            }
            loading.set(false);
        });
    });

    let welcome = move || profile.with(|p| greeting(p.as_ref(), auth.identity().as_ref()));

    let on_logout = move |_| {
        navigate(&Role::Worker.login_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        auth.logout();
    };

    // Open the status dialog on the latest copy of the ticket.
    let open_update = move |cached: Ticket| {
        leptos::task::spawn_local(async move {
            match worker::get_ticket(api, &cached.id).await {
                Ok(fresh) => updating.set(Some(fresh)),
                Err(e) => {
                    log::warn!("ticket refresh failed: {e}");
                    updating.set(Some(cached));
                }
            }
        });
    };

    let on_update_cancel = Callback::new(move |()| updating.set(None));
    let on_note_cancel = Callback::new(move |()| noting.set(None));
    let on_noted = Callback::new(move |()| noting.set(None));
    let on_updated = Callback::new(move |()| {
        updating.set(None);
        reload.update(|n| *n += 1);
    });

    view! {
        <div class="worker-page">
            <header class="worker-page__header">
                <div>
                    <h1>"Worker Dashboard"</h1>
                    <p class="worker-page__greeting">{welcome}</p>
                </div>
                <button class="btn worker-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading tickets..."</p> }>
                <div class="stat-grid">
                    {move || {
                        stat_cards(&stats.get())
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__value">{value}</span>
                                        <span class="stat-card__label">{label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <section class="ticket-list">
                    <h2>"My Tickets"</h2>
                    <Show when=move || tickets.with(Vec::is_empty)>
                        <p class="ticket-list__empty">"No tickets assigned yet."</p>
                    </Show>
                    <For
                        each=move || tickets.get()
                        key=|t| (t.id.clone(), t.status.clone())
                        children=move |ticket| {
                            let for_update = ticket.clone();
                            let for_note = ticket.clone();
                            view! {
                                <TicketCard
                                    ticket=ticket
                                    on_update=Callback::new(move |()| open_update(for_update.clone()))
                                    on_note=Callback::new(move |()| noting.set(Some(for_note.clone())))
                                />
                            }
                        }
                    />
                </section>
            </Show>
            {move || {
                updating
                    .get()
                    .map(|ticket| {
                        view! { <StatusUpdateDialog ticket=ticket on_cancel=on_update_cancel on_updated=on_updated/> }
                    })
            }}
            {move || {
                noting
                    .get()
                    .map(|ticket| {
                        view! { <TicketNoteDialog ticket=ticket on_cancel=on_note_cancel on_saved=on_noted/> }
                    })
            }}
        </div>
    }
}

#[component]
fn TicketCard(ticket: Ticket, on_update: Callback<()>, on_note: Callback<()>) -> impl IntoView {
    let Ticket { ticket_number, status, priority, notes, complaint, .. } = ticket;
    let images = complaint.images;

    view! {
        <article class="ticket-card">
            <header class="ticket-card__header">
                <span class="ticket-card__number">{ticket_number}</span>
                <span class=format!("badge {}", status_badge_class(&status))>{status_label(&status)}</span>
            </header>
            <h3>{complaint.title}</h3>
            <p class="ticket-card__description">{complaint.description.unwrap_or_default()}</p>
            <dl class="ticket-card__details">
                <dt>"Department"</dt>
                <dd>{department_label(&complaint.department)}</dd>
                <dt>"Priority"</dt>
                <dd>
                    <span class=priority_class(&priority)>{priority.clone()}</span>
                </dd>
                <dt>"Location"</dt>
                <dd>{or_na(complaint.location.as_deref())}</dd>
                <dt>"Staff"</dt>
                <dd>{complaint.staff_name}</dd>
            </dl>
            <div class="ticket-card__images">
                {images
                    .iter()
                    .enumerate()
                    .map(|(idx, path)| {
                        view! { <img class="ticket-card__image" src=image_url(path) alt=format!("Issue {}", idx + 1)/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {notes
                .filter(|n| !n.trim().is_empty())
                .map(|n| {
                    view! {
                        <p class="ticket-card__notes">
                            <strong>"Admin Notes: "</strong>
                            {n}
                        </p>
                    }
                })}
            <div class="ticket-card__actions">
                <button class="btn" on:click=move |_| on_note.run(())>
                    "Add Note"
                </button>
                <button class="btn btn--primary" on:click=move |_| on_update.run(())>
                    "Update Ticket"
                </button>
            </div>
        </article>
    }
}

#[component]
fn StatusUpdateDialog(ticket: Ticket, on_cancel: Callback<()>, on_updated: Callback<()>) -> impl IntoView {
    let api = use_api();
    let status = RwSignal::new(initial_status(&ticket.status).to_owned());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let ticket_id = ticket.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = match validate_status_update(&status.get_untracked(), &message.get_untracked()) {
            Ok(update) => update,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let id = ticket_id.clone();
        leptos::task::spawn_local(async move {
            match worker::update_ticket_status(api, &id, &update).await {
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
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Update Ticket"</h2>
                <p class="dialog__subtitle">{ticket.ticket_number}</p>
                <label class="dialog__label">
                    "Status *"
                    <select
                        class="dialog__input"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {WORKER_STATUS_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Update Message *"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        placeholder="Describe what you've done or the current status..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Submit Update"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Progress note on a ticket without changing its status.
#[component]
fn TicketNoteDialog(ticket: Ticket, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let api = use_api();
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let ticket_id = ticket.id.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let note = match validate_ticket_note(&message.get_untracked()) {
            Ok(note) => note,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let id = ticket_id.clone();
        leptos::task::spawn_local(async move {
            match worker::add_ticket_update(api, &id, &note).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Note added.");
                    on_saved.run(());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to add note")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Add Note"</h2>
                <p class="dialog__subtitle">{ticket.ticket_number}</p>
                <textarea
                    class="dialog__input"
                    rows="4"
                    placeholder="What changed since the last update?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save Note"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Header greeting, preferring the freshly loaded profile over the session.
fn greeting(profile: Option<&Worker>, identity: Option<&Identity>) -> String {
    let name = match (profile, identity) {
        (Some(p), _) => format!("{} {}", p.first_name, p.last_name).trim().to_owned(),
        (None, Some(i)) => i.display_name(),
        (None, None) => String::new(),
    };
    if name.is_empty() { String::new() } else { format!("Welcome back, {name}") }
}

fn stat_cards(stats: &WorkerStats) -> Vec<(&'static str, u64)> {
    vec![
        ("Total Tickets", stats.total),
        ("Pending", stats.pending),
        ("In Progress", stats.in_progress),
        ("Resolved", stats.resolved),
    ]
}

/// Preselected status in the update dialog: the ticket's own status when a
/// worker may set it, else the first option.
fn initial_status(current: &str) -> &str {
    if WORKER_STATUS_OPTIONS.iter().any(|(token, _)| *token == current) {
        current
    } else {
        WORKER_STATUS_OPTIONS[0].0
    }
}
