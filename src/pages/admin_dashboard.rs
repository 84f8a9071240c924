//! Admin landing page with complaint and worker totals.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::admin_navigation::AdminNavigation;
use crate::net::http::use_api;
use crate::net::services::admin;
use crate::net::types::DashboardStats;
use crate::util::display::department_label;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match admin::get_dashboard_stats(api).await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => {
                    log::warn!("dashboard stats failed: {e}");
                    error.set(Some(e.user_message("Could not load dashboard statistics.")));
                }
            }
        });
    });

    view! {
        <div class="admin-page">
            <AdminNavigation/>
            <main class="admin-page__content">
                <h1>"Dashboard"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || stats.get().is_some() fallback=move || view! { <p>"Loading statistics..."</p> }>
                    <div class="stat-grid">
                        {move || {
                            stats
                                .get()
                                .map(|s| stat_cards(&s))
                                .unwrap_or_default()
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
                    <section class="department-list">
                        <h2>"Complaints by Department"</h2>
                        <ul>
                            {move || {
                                stats
                                    .get()
                                    .map(|s| s.complaints_by_department)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|d| {
                                        view! {
                                            <li class="department-list__row">
                                                <span>{department_label(&d.department)}</span>
                                                <span class="department-list__count">{d.count}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>
            </main>
        </div>
    }
}

/// `(label, value)` pairs for the summary cards, in display order.
fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, u64)> {
    let complaints = &stats.stats.complaints;
    let workers = &stats.stats.workers;
    vec![
        ("Total Complaints", complaints.total),
        ("Pending", complaints.pending),
        ("In Progress", complaints.in_progress),
        ("Resolved", complaints.resolved),
        ("Workers", workers.total),
        ("Active Workers", workers.active),
    ]
}
