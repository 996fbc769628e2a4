use rust_decimal::Decimal;

use crate::intake::Participant;

use super::fees_model::FeeRuleSet;

/// Total quote for a composition under a rule set.
///
/// Total function: it never errors. An empty composition quotes zero and a
/// participant whose category is unset (or missing from the table) contributes
/// zero to the sum; blocking submission while a category is unset is the
/// wizard's job, not this function's.
pub fn compute_fee(composition: &[Participant], rules: &FeeRuleSet) -> Decimal {
    composition
        .iter()
        .map(|participant| rules.rate_for(participant.category))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::fees_model::ParticipantCategory;
    use rust_decimal_macros::dec;

    fn participant(category: ParticipantCategory) -> Participant {
        Participant {
            display_name: "Traveler".to_string(),
            age_years: 30,
            category,
            nationality: "Ghanaian".to_string(),
            special_needs: None,
        }
    }

    #[test]
    fn test_two_adults_and_infant() {
        let composition = vec![
            participant(ParticipantCategory::Adult),
            participant(ParticipantCategory::Adult),
            participant(ParticipantCategory::Infant),
        ];
        let fee = compute_fee(&composition, &FeeRuleSet::default());
        assert_eq!(fee, dec!(1250));
    }

    #[test]
    fn test_empty_composition_quotes_zero() {
        assert_eq!(compute_fee(&[], &FeeRuleSet::default()), Decimal::ZERO);
    }

    #[test]
    fn test_unset_category_bills_zero() {
        let composition = vec![
            participant(ParticipantCategory::Adult),
            participant(ParticipantCategory::Unset),
        ];
        let fee = compute_fee(&composition, &FeeRuleSet::default());
        assert_eq!(fee, dec!(500));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let composition = vec![
            participant(ParticipantCategory::Teen),
            participant(ParticipantCategory::Toddler),
            participant(ParticipantCategory::Infant),
        ];
        let rules = FeeRuleSet::default();
        assert_eq!(
            compute_fee(&composition, &rules),
            compute_fee(&composition, &rules)
        );
    }
}
