//! Client-side form validation shared by the portal screens.
//!
//! Each validator returns the cleaned request or the inline message the screen
//! shows. Passwords are never trimmed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{ComplaintForm, LoginRequest, NewAccount, PasswordUpdate, StatusUpdate, TicketNote};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// # Errors
///
/// Returns the message to display when a field is missing.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns the message to display when a required field is missing.
pub fn validate_complaint(form: &ComplaintForm) -> Result<ComplaintForm, &'static str> {
    let cleaned = ComplaintForm {
        staff_name: form.staff_name.trim().to_owned(),
        department: form.department.trim().to_owned(),
        title: form.title.trim().to_owned(),
        description: form.description.trim().to_owned(),
        location: form.location.trim().to_owned(),
    };
    if cleaned.staff_name.is_empty() {
        return Err("Enter your name.");
    }
    if cleaned.department.is_empty() {
        return Err("Select a department.");
    }
    if cleaned.title.is_empty() {
        return Err("Enter a complaint title.");
    }
    Ok(cleaned)
}

/// # Errors
///
/// Returns the message to display when the new password is rejected.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<PasswordUpdate, &'static str> {
    if new != confirm {
        return Err("New passwords do not match");
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(PasswordUpdate { current_password: current.to_owned(), new_password: new.to_owned() })
}

/// Validate a worker or administrator account before creation.
///
/// # Errors
///
/// Returns the message to display when a field is missing or too short.
pub fn validate_new_account(account: &NewAccount) -> Result<NewAccount, &'static str> {
    let cleaned = NewAccount {
        email: account.email.trim().to_owned(),
        password: account.password.clone(),
        first_name: account.first_name.trim().to_owned(),
        last_name: account.last_name.trim().to_owned(),
        phone_number: account
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned),
    };
    if cleaned.first_name.is_empty() || cleaned.last_name.is_empty() || cleaned.email.is_empty() {
        return Err("First name, last name and email are required");
    }
    if cleaned.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(cleaned)
}

/// # Errors
///
/// Returns the message to display when the status or message is missing.
pub fn validate_status_update(status: &str, message: &str) -> Result<StatusUpdate, &'static str> {
    if status.trim().is_empty() {
        return Err("Select a status.");
    }
    let message = message.trim();
    if message.is_empty() {
        return Err("Describe the update.");
    }
    Ok(StatusUpdate { status: status.trim().to_owned(), message: message.to_owned() })
}

/// # Errors
///
/// Returns the message to display when the note is blank.
pub fn validate_ticket_note(message: &str) -> Result<TicketNote, &'static str> {
    let message = message.trim();
    if message.is_empty() {
        return Err("Describe the update.");
    }
    Ok(TicketNote { message: message.to_owned() })
}

/// # Errors
///
/// Returns the message to display when the address is blank or malformed.
pub fn validate_lookup_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err("Enter the email address you used."),
    }
}
