use super::intake_model::ValidationIssue;
use super::intake_service::IntakeSession;

/// Field keys used by the default intake flow
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ORIGIN: &str = "origin";
    pub const DESTINATION: &str = "destination";
    pub const DEPARTURE_DATE: &str = "departureDate";
    pub const RETURN_DATE: &str = "returnDate";
    pub const SERVICES: &str = "services";
    pub const NOTES: &str = "notes";
}

/// Upper bound on selectable add-on services
pub const MAX_SELECTED_SERVICES: usize = 4;

type Validator = fn(&IntakeSession) -> Vec<ValidationIssue>;

/// One wizard step: stable key, display title and the predicate gating `Next`
#[derive(Debug, Clone)]
pub struct StepDef {
    pub key: &'static str,
    pub title: &'static str,
    pub validate: Validator,
}

/// Ordered step table for the default booking intake flow
pub fn default_steps() -> Vec<StepDef> {
    vec![
        StepDef {
            key: "contact",
            title: "Contact details",
            validate: validate_contact,
        },
        StepDef {
            key: "trip",
            title: "Trip details",
            validate: validate_trip,
        },
        StepDef {
            key: "travelers",
            title: "Travelers",
            validate: validate_travelers,
        },
        StepDef {
            key: "services",
            title: "Add-on services",
            validate: validate_services,
        },
        StepDef {
            key: "review",
            title: "Review & submit",
            validate: validate_review,
        },
    ]
}

fn require_text(
    session: &IntakeSession,
    field: &'static str,
    label: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    let missing = session.field(field).map(|v| v.is_blank()).unwrap_or(true);
    if missing {
        issues.push(ValidationIssue::new(field, format!("{} is required", label)));
    }
}

fn validate_contact(session: &IntakeSession) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_text(session, fields::FULL_NAME, "Full name", &mut issues);
    require_text(session, fields::PHONE, "Phone number", &mut issues);
    require_text(session, fields::EMAIL, "Email", &mut issues);

    if let Some(email) = session.field(fields::EMAIL).and_then(|v| v.as_text()) {
        if !email.trim().is_empty() && !email.contains('@') {
            issues.push(ValidationIssue::new(
                fields::EMAIL,
                "Email does not look valid",
            ));
        }
    }

    issues
}

fn validate_trip(session: &IntakeSession) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    require_text(session, fields::ORIGIN, "Origin", &mut issues);
    require_text(session, fields::DESTINATION, "Destination", &mut issues);

    let departure = session
        .field(fields::DEPARTURE_DATE)
        .and_then(|v| v.as_date());
    if departure.is_none() {
        issues.push(ValidationIssue::new(
            fields::DEPARTURE_DATE,
            "Departure date is required",
        ));
    }

    let return_date = session.field(fields::RETURN_DATE).and_then(|v| v.as_date());
    if let (Some(departure), Some(return_date)) = (departure, return_date) {
        if return_date < departure {
            issues.push(ValidationIssue::new(
                fields::RETURN_DATE,
                "Return date must be on or after the departure date",
            ));
        }
    }

    issues
}

fn validate_travelers(session: &IntakeSession) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (index, participant) in session.composition().iter().enumerate() {
        if participant.display_name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                "composition",
                format!("Traveler {} needs a name", index + 1),
            ));
        }
        if !participant.category.is_set() {
            issues.push(ValidationIssue::new(
                "composition",
                format!(
                    "Traveler {} needs a category before the quote is final",
                    index + 1
                ),
            ));
        }
    }
    issues
}

fn validate_services(session: &IntakeSession) -> Vec<ValidationIssue> {
    let selected = session
        .field(fields::SERVICES)
        .and_then(|v| v.as_choices())
        .map(|choices| choices.len())
        .unwrap_or(0);

    if selected > MAX_SELECTED_SERVICES {
        return vec![ValidationIssue::new(
            fields::SERVICES,
            format!("Choose at most {} add-on services", MAX_SELECTED_SERVICES),
        )];
    }
    Vec::new()
}

/// The final gate re-runs every earlier step so nothing skipped by backward
/// navigation can slip into the submission payload.
fn validate_review(session: &IntakeSession) -> Vec<ValidationIssue> {
    let mut issues = validate_contact(session);
    issues.extend(validate_trip(session));
    issues.extend(validate_travelers(session));
    issues.extend(validate_services(session));
    issues
}
