use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_input_trims_email_but_not_password() {
    assert_eq!(
        validate_login_input("  admin@cmc.test ", " secret "),
        Ok(LoginRequest { email: "admin@cmc.test".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b", ""), Err("Enter both email and password."));
}

// =============================================================
// Complaint
// =============================================================

fn complaint() -> ComplaintForm {
    ComplaintForm {
        staff_name: " Kwame ".to_owned(),
        department: "IT".to_owned(),
        title: " Projector broken ".to_owned(),
        description: String::new(),
        location: " Hall B ".to_owned(),
    }
}

#[test]
fn complaint_is_trimmed() {
    let cleaned = validate_complaint(&complaint()).unwrap();
    assert_eq!(cleaned.staff_name, "Kwame");
    assert_eq!(cleaned.title, "Projector broken");
    assert_eq!(cleaned.location, "Hall B");
}

#[test]
fn complaint_requires_name_department_and_title() {
    let mut form = complaint();
    form.staff_name = " ".to_owned();
    assert_eq!(validate_complaint(&form), Err("Enter your name."));

    let mut form = complaint();
    form.department = String::new();
    assert_eq!(validate_complaint(&form), Err("Select a department."));

    let mut form = complaint();
    form.title = String::new();
    assert_eq!(validate_complaint(&form), Err("Enter a complaint title."));
}

// =============================================================
// Passwords and accounts
// =============================================================

#[test]
fn password_change_requires_matching_confirmation() {
    assert_eq!(validate_password_change("old", "abcdef", "abcdeg"), Err("New passwords do not match"));
}

#[test]
fn password_change_enforces_minimum_length() {
    assert_eq!(validate_password_change("old", "abc", "abc"), Err("Password must be at least 6 characters"));
    assert_eq!(
        validate_password_change("old", "abcdef", "abcdef"),
        Ok(PasswordUpdate { current_password: "old".to_owned(), new_password: "abcdef".to_owned() })
    );
}

#[test]
fn new_account_drops_blank_phone_and_checks_password() {
    let account = NewAccount {
        email: " w@cmc.test ".to_owned(),
        password: "longenough".to_owned(),
        first_name: "Efua".to_owned(),
        last_name: "Asante".to_owned(),
        phone_number: Some("  ".to_owned()),
    };
    let cleaned = validate_new_account(&account).unwrap();
    assert_eq!(cleaned.email, "w@cmc.test");
    assert!(cleaned.phone_number.is_none());

    let short = NewAccount { password: "12345".to_owned(), ..account.clone() };
    assert_eq!(validate_new_account(&short), Err("Password must be at least 6 characters"));

    let unnamed = NewAccount { first_name: String::new(), ..account };
    assert_eq!(validate_new_account(&unnamed), Err("First name, last name and email are required"));
}

// =============================================================
// Ticket status
// =============================================================

#[test]
fn status_update_requires_status_and_message() {
    assert_eq!(validate_status_update("", "done"), Err("Select a status."));
    assert_eq!(validate_status_update("RESOLVED", "   "), Err("Describe the update."));
    assert_eq!(
        validate_status_update("RESOLVED", " Replaced the cable "),
        Ok(StatusUpdate { status: "RESOLVED".to_owned(), message: "Replaced the cable".to_owned() })
    );
}

#[test]
fn ticket_note_is_trimmed_and_required() {
    assert_eq!(validate_ticket_note("  "), Err("Describe the update."));
    assert_eq!(validate_ticket_note(" Ordered a new toner "), Ok(TicketNote { message: "Ordered a new toner".to_owned() }));
}

// =============================================================
// Complaint lookup
// =============================================================

#[test]
fn lookup_email_needs_user_and_domain() {
    assert_eq!(validate_lookup_email(" ama@cmc.test "), Ok("ama@cmc.test".to_owned()));
    assert_eq!(validate_lookup_email("ama"), Err("Enter the email address you used."));
    assert_eq!(validate_lookup_email("@cmc.test"), Err("Enter the email address you used."));
    assert_eq!(validate_lookup_email(""), Err("Enter the email address you used."));
}
