use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::{MIN_PARTY_SIZE, QUOTE_CURRENCY};
use crate::fees::{compute_fee, FeeRuleSet};

use super::intake_model::{
    FieldValue, Participant, StepTransition, SubmissionPayload, ValidationIssue,
};
use super::intake_steps::{default_steps, StepDef};

/// Aggregate state for one customer's intake flow.
///
/// The quoted fee is derived state: every operation that touches the
/// composition recomputes it synchronously through FeeRules, so the displayed
/// total can never lag the displayed party. It is never set directly.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    steps: Vec<StepDef>,
    current: usize,
    fields: HashMap<&'static str, FieldValue>,
    composition: Vec<Participant>,
    quoted_fee: Decimal,
    rules: FeeRuleSet,
    submission_id: Uuid,
    submitted: bool,
}

impl IntakeSession {
    /// Fresh session on the first step, holding the minimum one participant
    pub fn new(rules: FeeRuleSet) -> Self {
        let mut session = IntakeSession {
            steps: default_steps(),
            current: 0,
            fields: HashMap::new(),
            composition: vec![Participant::new("")],
            quoted_fee: Decimal::ZERO,
            rules,
            submission_id: Uuid::new_v4(),
            submitted: false,
        };
        session.recompute_fee();
        session
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDef {
        &self.steps[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_on_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Dedupe key for the eventual submission; fixed for the session's lifetime
    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn quoted_fee(&self) -> Decimal {
        self.quoted_fee
    }

    pub fn composition(&self) -> &[Participant] {
        &self.composition
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Issues for the step the user is currently on
    pub fn validate_current(&self) -> Vec<ValidationIssue> {
        (self.current_step().validate)(self)
    }

    /// Guarded forward transition. When the current step's validator reports
    /// issues the index stays put and the issues are returned for inline
    /// display; nothing is thrown.
    pub fn next(&mut self) -> StepTransition {
        let issues = self.validate_current();
        if !issues.is_empty() {
            debug!(
                "step '{}' blocked with {} issue(s)",
                self.current_step().key,
                issues.len()
            );
            return StepTransition::Blocked(issues);
        }

        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
        StepTransition::Advanced
    }

    /// Backward navigation never validates and never clears entered data
    pub fn back(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn set_field(&mut self, key: &'static str, value: FieldValue) {
        self.fields.insert(key, value);
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.composition.push(participant);
        self.recompute_fee();
    }

    /// Apply an edit to one participant and requote. Returns false when the
    /// index is out of range.
    pub fn update_participant(
        &mut self,
        index: usize,
        update: impl FnOnce(&mut Participant),
    ) -> bool {
        match self.composition.get_mut(index) {
            Some(participant) => {
                update(participant);
                self.recompute_fee();
                true
            }
            None => false,
        }
    }

    /// Removal below the minimum party size is a no-op; the composition never
    /// drops under one participant.
    pub fn remove_participant(&mut self, index: usize) -> bool {
        if self.composition.len() <= MIN_PARTY_SIZE || index >= self.composition.len() {
            return false;
        }
        self.composition.remove(index);
        self.recompute_fee();
        true
    }

    fn recompute_fee(&mut self) {
        self.quoted_fee = compute_fee(&self.composition, &self.rules);
    }

    /// Freeze the session into the payload handed to BookingHandoff.
    ///
    /// Only reachable from the last step with a passing validator; otherwise
    /// the blocking issues come back and the session is untouched. The session
    /// itself stays on the last step so a failed handoff loses nothing.
    pub fn submission_payload(&self) -> Result<SubmissionPayload, Vec<ValidationIssue>> {
        if !self.is_on_last_step() {
            return Err(vec![ValidationIssue::new(
                "step",
                "Submission is only available from the final step",
            )]);
        }

        let issues = self.validate_current();
        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(SubmissionPayload {
            submission_id: self.submission_id,
            fields: self
                .fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            composition: self.composition.clone(),
            quoted_fee: self.quoted_fee,
            currency: QUOTE_CURRENCY.to_string(),
        })
    }

    /// Terminal transition, called by the owner once handoff succeeded
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::ParticipantCategory;
    use crate::intake::intake_steps::fields;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn filled_contact(session: &mut IntakeSession) {
        session.set_field(fields::FULL_NAME, FieldValue::text("Ama Mensah"));
        session.set_field(fields::PHONE, FieldValue::text("+233201234567"));
        session.set_field(fields::EMAIL, FieldValue::text("ama@example.com"));
    }

    #[test]
    fn test_next_blocked_on_unmet_required_fields() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        let before = session.current_index();

        match session.next() {
            StepTransition::Blocked(issues) => assert!(!issues.is_empty()),
            StepTransition::Advanced => panic!("empty contact step must not advance"),
        }
        assert_eq!(session.current_index(), before);
    }

    #[test]
    fn test_back_then_next_preserves_field_values() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        filled_contact(&mut session);
        assert_eq!(session.next(), StepTransition::Advanced);

        session.back();
        assert_eq!(
            session.field(fields::EMAIL).and_then(|v| v.as_text()),
            Some("ama@example.com")
        );
        assert_eq!(session.next(), StepTransition::Advanced);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_remove_last_participant_is_noop() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        assert_eq!(session.composition().len(), 1);
        assert!(!session.remove_participant(0));
        assert_eq!(session.composition().len(), 1);
    }

    #[test]
    fn test_fee_tracks_composition_edits() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        assert_eq!(session.quoted_fee(), Decimal::ZERO);

        session.update_participant(0, |p| p.category = ParticipantCategory::Adult);
        assert_eq!(session.quoted_fee(), dec!(500));

        let mut infant = Participant::new("Baby");
        infant.category = ParticipantCategory::Infant;
        session.add_participant(infant);
        assert_eq!(session.quoted_fee(), dec!(750));

        session.remove_participant(1);
        assert_eq!(session.quoted_fee(), dec!(500));
    }

    #[test]
    fn test_invalid_return_date_blocks_trip_step() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        filled_contact(&mut session);
        session.next();

        session.set_field(fields::ORIGIN, FieldValue::text("ACC"));
        session.set_field(fields::DESTINATION, FieldValue::text("LHR"));
        session.set_field(
            fields::DEPARTURE_DATE,
            FieldValue::Date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()),
        );
        session.set_field(
            fields::RETURN_DATE,
            FieldValue::Date(NaiveDate::from_ymd_opt(2026, 10, 10).unwrap()),
        );

        match session.next() {
            StepTransition::Blocked(issues) => {
                assert!(issues.iter().any(|i| i.field == fields::RETURN_DATE));
            }
            StepTransition::Advanced => panic!("return date before departure must block"),
        }
    }

    #[test]
    fn test_submission_only_from_last_step() {
        let session = IntakeSession::new(FeeRuleSet::default());
        assert!(session.submission_payload().is_err());
    }

    #[test]
    fn test_full_walkthrough_freezes_quote() {
        let mut session = IntakeSession::new(FeeRuleSet::default());
        filled_contact(&mut session);
        assert_eq!(session.next(), StepTransition::Advanced);

        session.set_field(fields::ORIGIN, FieldValue::text("ACC"));
        session.set_field(fields::DESTINATION, FieldValue::text("DXB"));
        session.set_field(
            fields::DEPARTURE_DATE,
            FieldValue::Date(NaiveDate::from_ymd_opt(2026, 12, 1).unwrap()),
        );
        assert_eq!(session.next(), StepTransition::Advanced);

        session.update_participant(0, |p| {
            p.display_name = "Ama Mensah".to_string();
            p.age_years = 34;
            p.category = ParticipantCategory::Adult;
        });
        let mut second = Participant::new("Kofi Mensah");
        second.category = ParticipantCategory::Adult;
        session.add_participant(second);
        assert_eq!(session.next(), StepTransition::Advanced);

        session.set_field(
            fields::SERVICES,
            FieldValue::Choices(vec!["visaSupport".to_string()]),
        );
        assert_eq!(session.next(), StepTransition::Advanced);
        assert!(session.is_on_last_step());

        let payload = session.submission_payload().expect("review step is valid");
        assert_eq!(payload.quoted_fee, dec!(1000));
        assert_eq!(payload.composition.len(), 2);
        assert_eq!(payload.submission_id, session.submission_id());

        session.mark_submitted();
        assert!(session.is_submitted());
    }
}
