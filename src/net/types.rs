//! Wire DTOs for the helpdesk REST backend.
//!
//! DESIGN
//! ======
//! The backend owns these shapes; the client only models the fields it reads.
//! Payloads use camelCase JSON and every success body is wrapped in a
//! `{ status, data }` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authorization role carried by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Worker,
}

impl Role {
    /// Wire token for the role (`"ADMIN"` / `"WORKER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Worker => "WORKER",
        }
    }

    /// Parse a persisted or wire role token. Unknown tokens yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ADMIN" => Some(Self::Admin),
            "WORKER" => Some(Self::Worker),
            _ => None,
        }
    }

    /// Login screen for the role, derived from the lower-cased role token.
    pub fn login_path(self) -> String {
        format!("/{}/login", self.as_str().to_ascii_lowercase())
    }

    /// Landing page after a login with no intended destination.
    pub fn dashboard_path(self) -> String {
        format!("/{}/dashboard", self.as_str().to_ascii_lowercase())
    }

    /// Path prefix owned by the role's pages, including the trailing slash.
    pub fn area_prefix(self) -> String {
        format!("/{}/", self.as_str().to_ascii_lowercase())
    }
}

/// Success envelope wrapping every backend payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Profile of the signed-in administrator or worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Role-specific fields the client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// `"First Last"`, trimmed when either half is missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Credentials posted to either login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload. Admin logins name the profile `admin`, worker
/// logins name it `worker`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    #[serde(alias = "admin", alias = "worker")]
    pub identity: Identity,
    pub token: String,
    pub role: Role,
}

/// Complaint filed by a staff member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub staff_name: String,
    pub department: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub ticket: Option<TicketRef>,
}

/// Ticket summary embedded in a complaint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub ticket_number: String,
    #[serde(default)]
    pub worker: Option<WorkerRef>,
}

/// Worker name embedded in a ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Ticket assigned to a worker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub ticket_number: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub complaint: Complaint,
}

/// Worker account as listed for administrators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, rename = "ticket_count", deserialize_with = "deserialize_count")]
    pub ticket_count: u64,
}

/// Complaint counters shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintCounts {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub pending: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub in_progress: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub resolved: u64,
}

/// Worker counters shown on the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WorkerCounts {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub active: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatsBlock {
    #[serde(default)]
    pub complaints: ComplaintCounts,
    #[serde(default)]
    pub workers: WorkerCounts,
}

/// One row of the complaints-by-department breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    #[serde(rename = "_count", default, deserialize_with = "deserialize_count")]
    pub count: u64,
}

/// Payload of `GET /admin/dashboard/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub stats: StatsBlock,
    #[serde(default)]
    pub complaints_by_department: Vec<DepartmentCount>,
}

/// Ticket counters for the signed-in worker.
pub type WorkerStats = ComplaintCounts;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WorkerStatsData {
    #[serde(default)]
    pub stats: WorkerStats,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComplaintList {
    #[serde(default)]
    pub complaints: Vec<Complaint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ComplaintData {
    pub complaint: Complaint,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorkerList {
    #[serde(default)]
    pub workers: Vec<Worker>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorkerData {
    pub worker: Worker,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TicketList {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TicketData {
    pub ticket: Ticket,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DepartmentList {
    #[serde(default)]
    pub departments: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminData {
    pub admin: Identity,
}

/// Text fields of a staff complaint. Image attachments are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintForm {
    pub staff_name: String,
    pub department: String,
    pub title: String,
    pub description: String,
    pub location: String,
}

impl ComplaintForm {
    /// Non-empty `(field, value)` pairs in submission order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("staffName", self.staff_name.as_str()),
            ("department", self.department.as_str()),
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("location", self.location.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }
}

/// Body of `POST /admin/tickets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub complaint_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    pub priority: String,
    pub notes: String,
}

/// Partial body of `PUT /admin/tickets/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body used to create a worker or register an administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Partial body of `PUT /admin/workers/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body of `PUT /admin/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body of `PUT /admin/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub current_password: String,
    pub new_password: String,
}

/// Body of `PUT /worker/tickets/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: String,
    pub message: String,
}

/// Body of `POST /worker/tickets/{id}/updates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TicketNote {
    pub message: String,
}

/// Accept string or integer identifiers; the backend has used both.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= 0.0
                && float.fract() == 0.0
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("count {raw:?} is not an integer"))),
        _ => Err(D::Error::custom("expected count")),
    }
}
