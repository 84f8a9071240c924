//! Backend endpoints grouped by portal.
//!
//! Every call goes through [`ApiClient`], so bearer credentials and the 401
//! event apply uniformly. Failures come back as [`ApiError`] for the calling
//! screen to render.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest};
use super::types::LoginRequest;

/// Characters escaped inside one path segment: the URL path set plus `/` and
/// `%`, so an id can never add or alter segments.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

fn login_path(portal: &str) -> String {
    format!("/{portal}/login")
}

fn admin_ticket_path(id: &str) -> String {
    format!("/admin/tickets/{}", segment(id))
}

fn admin_worker_path(id: &str) -> String {
    format!("/admin/workers/{}", segment(id))
}

fn staff_complaint_path(id: &str) -> String {
    format!("/staff/complaints/{}", segment(id))
}

fn worker_ticket_path(id: &str) -> String {
    format!("/worker/tickets/{}", segment(id))
}

fn worker_ticket_status_path(id: &str) -> String {
    format!("{}/status", worker_ticket_path(id))
}

fn worker_ticket_updates_path(id: &str) -> String {
    format!("{}/updates", worker_ticket_path(id))
}

fn login_request(portal: &str, credentials: &LoginRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post(login_path(portal)).json(credentials)
}

/// Public complaint intake. No session is needed.
pub mod staff {
    use super::*;
    use crate::net::types::{Complaint, ComplaintData, ComplaintForm, ComplaintList, DepartmentList};

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn submit_complaint(api: ApiClient, form: &ComplaintForm) -> Result<(), ApiError> {
        api.send(ApiRequest::post("/staff/complaints").form(&form.fields())).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_complaints(api: ApiClient, email: &str) -> Result<Vec<Complaint>, ApiError> {
        let request = ApiRequest::get("/staff/complaints").query("email", email);
        api.fetch::<ComplaintList>(request).await.map(|list| list.complaints)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_complaint(api: ApiClient, id: &str) -> Result<Complaint, ApiError> {
        api.fetch::<ComplaintData>(ApiRequest::get(staff_complaint_path(id)))
            .await
            .map(|data| data.complaint)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_departments(api: ApiClient) -> Result<Vec<String>, ApiError> {
        api.fetch::<DepartmentList>(ApiRequest::get("/staff/departments"))
            .await
            .map(|list| list.departments)
    }
}

/// Administrator portal.
pub mod admin {
    use super::*;
    use crate::net::types::{
        AdminData, Complaint, ComplaintList, DashboardStats, Identity, LoginData, NewAccount, NewTicket,
        PasswordUpdate, ProfileUpdate, TicketPatch, Worker, WorkerList, WorkerPatch,
    };

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn register(api: ApiClient, account: &NewAccount) -> Result<(), ApiError> {
        api.send(ApiRequest::post("/admin/register").json(account)?).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials.
    pub async fn login(api: ApiClient, credentials: &LoginRequest) -> Result<LoginData, ApiError> {
        api.fetch(login_request("admin", credentials)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_dashboard_stats(api: ApiClient) -> Result<DashboardStats, ApiError> {
        api.fetch(ApiRequest::get("/admin/dashboard/stats")).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_complaints(api: ApiClient, filters: &[(&str, &str)]) -> Result<Vec<Complaint>, ApiError> {
        let request = ApiRequest::get("/admin/complaints").query_pairs(filters);
        api.fetch::<ComplaintList>(request).await.map(|list| list.complaints)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn create_ticket(api: ApiClient, ticket: &NewTicket) -> Result<(), ApiError> {
        api.send(ApiRequest::post("/admin/tickets").json(ticket)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn update_ticket(api: ApiClient, id: &str, patch: &TicketPatch) -> Result<(), ApiError> {
        api.send(ApiRequest::put(admin_ticket_path(id)).json(patch)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn create_worker(api: ApiClient, account: &NewAccount) -> Result<(), ApiError> {
        api.send(ApiRequest::post("/admin/workers").json(account)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_workers(api: ApiClient, filters: &[(&str, &str)]) -> Result<Vec<Worker>, ApiError> {
        let request = ApiRequest::get("/admin/workers").query_pairs(filters);
        api.fetch::<WorkerList>(request).await.map(|list| list.workers)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn update_worker(api: ApiClient, id: &str, patch: &WorkerPatch) -> Result<(), ApiError> {
        api.send(ApiRequest::put(admin_worker_path(id)).json(patch)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn delete_worker(api: ApiClient, id: &str) -> Result<(), ApiError> {
        api.send(ApiRequest::delete(admin_worker_path(id))).await
    }

    /// Returns the updated administrator profile.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn update_profile(api: ApiClient, profile: &ProfileUpdate) -> Result<Identity, ApiError> {
        api.fetch::<AdminData>(ApiRequest::put("/admin/profile").json(profile)?)
            .await
            .map(|data| data.admin)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn update_password(api: ApiClient, passwords: &PasswordUpdate) -> Result<(), ApiError> {
        api.send(ApiRequest::put("/admin/password").json(passwords)?).await
    }
}

/// Worker portal.
pub mod worker {
    use super::*;
    use crate::net::types::{
        LoginData, StatusUpdate, Ticket, TicketData, TicketList, TicketNote, Worker, WorkerData, WorkerStats,
        WorkerStatsData,
    };

    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials.
    pub async fn login(api: ApiClient, credentials: &LoginRequest) -> Result<LoginData, ApiError> {
        api.fetch(login_request("worker", credentials)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_profile(api: ApiClient) -> Result<Worker, ApiError> {
        api.fetch::<WorkerData>(ApiRequest::get("/worker/profile"))
            .await
            .map(|data| data.worker)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_stats(api: ApiClient) -> Result<WorkerStats, ApiError> {
        api.fetch::<WorkerStatsData>(ApiRequest::get("/worker/stats"))
            .await
            .map(|data| data.stats)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_tickets(api: ApiClient, filters: &[(&str, &str)]) -> Result<Vec<Ticket>, ApiError> {
        let request = ApiRequest::get("/worker/tickets").query_pairs(filters);
        api.fetch::<TicketList>(request).await.map(|list| list.tickets)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn get_ticket(api: ApiClient, id: &str) -> Result<Ticket, ApiError> {
        api.fetch::<TicketData>(ApiRequest::get(worker_ticket_path(id)))
            .await
            .map(|data| data.ticket)
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn update_ticket_status(api: ApiClient, id: &str, update: &StatusUpdate) -> Result<(), ApiError> {
        api.send(ApiRequest::put(worker_ticket_status_path(id)).json(update)?).await
    }

    /// # Errors
    ///
    /// Returns the backend or transport failure.
    pub async fn add_ticket_update(api: ApiClient, id: &str, note: &TicketNote) -> Result<(), ApiError> {
        api.send(ApiRequest::post(worker_ticket_updates_path(id)).json(note)?).await
    }
}
