use super::*;
use crate::net::http::Method;

const BASE: &str = "http://localhost:5000/api/v1";

#[test]
fn login_paths_per_portal() {
    assert_eq!(login_path("admin"), "/admin/login");
    assert_eq!(login_path("worker"), "/worker/login");
}

#[test]
fn login_request_posts_credentials() {
    let credentials = LoginRequest { email: "a@cmc.test".to_owned(), password: "pw".to_owned() };
    let request = login_request("worker", &credentials).unwrap();
    assert_eq!(request.method(), Method::Post);
    assert_eq!(request.url(BASE), "http://localhost:5000/api/v1/worker/login");
}

#[test]
fn resource_paths_format_ids() {
    assert_eq!(admin_ticket_path("t-1"), "/admin/tickets/t-1");
    assert_eq!(admin_worker_path("w-2"), "/admin/workers/w-2");
    assert_eq!(staff_complaint_path("c-3"), "/staff/complaints/c-3");
    assert_eq!(worker_ticket_path("t-4"), "/worker/tickets/t-4");
    assert_eq!(worker_ticket_status_path("t-4"), "/worker/tickets/t-4/status");
    assert_eq!(worker_ticket_updates_path("t-4"), "/worker/tickets/t-4/updates");
}

#[test]
fn resource_ids_are_escaped() {
    assert_eq!(admin_worker_path("../profile"), "/admin/workers/..%2Fprofile");
}

#[test]
fn resource_ids_use_path_escaping() {
    assert_eq!(staff_complaint_path("a b+c"), "/staff/complaints/a%20b+c");
    assert_eq!(worker_ticket_path("50%?x#y"), "/worker/tickets/50%25%3Fx%23y");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    use leptos::prelude::*;

    let owner = Owner::new();
    let api = owner.with(|| {
        let auth = crate::state::auth::AuthController::new();
        ApiClient::new(BASE, auth, RwSignal::new(None))
    });
    let result = block_on_ready(staff::get_departments(api));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that never suspend.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended"),
    }
}
