//! Admin worker roster: create, activate/deactivate, delete.

use leptos::prelude::*;

use crate::components::account_fields::AccountFields;
use crate::components::admin_navigation::AdminNavigation;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::http::use_api;
use crate::net::services::admin;
use crate::net::types::{NewAccount, Worker, WorkerPatch};
use crate::state::toast::{ToastKind, notify};
use crate::util::display::or_na;
use crate::util::forms::validate_new_account;

#[component]
pub fn AdminWorkersPage() -> impl IntoView {
    let api = use_api();
    let workers = RwSignal::new(Vec::<Worker>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u32);
    let show_create = RwSignal::new(false);
    let to_delete = RwSignal::new(None::<Worker>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match admin::get_workers(api, &[]).await {
                Ok(list) => workers.set(list),
                Err(e) => log::warn!("worker list failed: {e}"),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let toggle_active = move |worker: Worker| {
        let patch = WorkerPatch { is_active: Some(!worker.is_active), ..WorkerPatch::default() };
        leptos::task::spawn_local(async move {
            match admin::update_worker(api, &worker.id, &patch).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Worker updated successfully!");
                    refresh();
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to update worker")),
            }
        });
    };

    let on_delete_cancel = Callback::new(move |()| to_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(worker) = to_delete.get_untracked() else {
            return;
        };
        to_delete.set(None);
        leptos::task::spawn_local(async move {
            match admin::delete_worker(api, &worker.id).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Worker deleted successfully!");
                    refresh();
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to delete worker")),
            }
        });
    });
    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_created = Callback::new(move |()| {
        show_create.set(false);
        refresh();
    });

    view! {
        <div class="admin-page">
            <AdminNavigation/>
            <main class="admin-page__content">
                <div class="admin-page__toolbar">
                    <h1>"Workers"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Add Worker"
                    </button>
                </div>
                <Show when=move || !loading.get() fallback=move || view! { <p>"Loading workers..."</p> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                                <th>"Tickets"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || workers.get()
                                key=|w| (w.id.clone(), w.is_active, w.ticket_count)
                                children=move |worker| {
                                    let for_toggle = worker.clone();
                                    let for_delete = worker.clone();
                                    view! {
                                        <tr>
                                            <td>{format!("{} {}", worker.first_name, worker.last_name)}</td>
                                            <td>{worker.email.clone()}</td>
                                            <td>{or_na(worker.phone_number.as_deref())}</td>
                                            <td>
                                                <span class=active_class(worker.is_active)>
                                                    {if worker.is_active { "Active" } else { "Inactive" }}
                                                </span>
                                            </td>
                                            <td>{worker.ticket_count}</td>
                                            <td class="data-table__actions">
                                                <button class="btn" on:click=move |_| toggle_active(for_toggle.clone())>
                                                    {if worker.is_active { "Deactivate" } else { "Activate" }}
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| to_delete.set(Some(for_delete.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=move || workers.with(Vec::is_empty)>
                        <p class="admin-page__empty">"No workers yet."</p>
                    </Show>
                </Show>
            </main>
            <Show when=move || show_create.get()>
                <CreateWorkerDialog on_cancel=on_create_cancel on_created=on_created/>
            </Show>
            {move || {
                to_delete
                    .get()
                    .map(|worker| {
                        view! {
                            <ConfirmDialog
                                title="Delete Worker"
                                message=format!(
                                    "Delete {} {}? Their open tickets will be left unassigned.",
                                    worker.first_name,
                                    worker.last_name,
                                )
                                confirm_label="Delete"
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn CreateWorkerDialog(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let api = use_api();
    let account = RwSignal::new(NewAccount::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let cleaned = match account.with_untracked(validate_new_account) {
            Ok(cleaned) => cleaned,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match admin::create_worker(api, &cleaned).await {
                Ok(()) => {
                    notify(ToastKind::Success, "Worker created successfully!");
                    on_created.run(());
                }
                Err(e) => notify(ToastKind::Error, e.user_message("Failed to create worker")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Create New Worker"</h2>
                <AccountFields account=account/>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create Worker"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn active_class(active: bool) -> &'static str {
    if active { "status-badge status-badge--active" } else { "status-badge status-badge--inactive" }
}
