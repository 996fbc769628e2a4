use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fees::ParticipantCategory;

/// One person covered by a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub display_name: String,
    pub age_years: u32,
    pub category: ParticipantCategory,
    pub nationality: String,
    pub special_needs: Option<String>,
}

impl Participant {
    /// Blank participant as created by the "add traveler" action
    pub fn new(display_name: impl Into<String>) -> Self {
        Participant {
            display_name: display_name.into(),
            age_years: 0,
            category: ParticipantCategory::Unset,
            nationality: String::new(),
            special_needs: None,
        }
    }
}

/// A single form field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Choices(Vec<String>),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            FieldValue::Choices(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::Choices(values) => values.is_empty(),
            FieldValue::Date(_) => false,
        }
    }
}

/// Inline, human-readable validation message for one field.
/// These are values, never errors: the caller decides whether to block or warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationIssue {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of a guarded forward transition
#[derive(Debug, Clone, PartialEq)]
pub enum StepTransition {
    Advanced,
    Blocked(Vec<ValidationIssue>),
}

/// Frozen snapshot of a completed intake session, handed to BookingHandoff.
/// The quoted fee is frozen here; it is never recomputed after submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub submission_id: Uuid,
    pub fields: HashMap<String, FieldValue>,
    pub composition: Vec<Participant>,
    pub quoted_fee: Decimal,
    pub currency: String,
}
