use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fees_constants::{INFANT_RATE, STANDARD_RATE};

/// Fee tier a participant is billed under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantCategory {
    Adult,
    Teen,
    Child,
    Toddler,
    Infant,
    /// Not yet chosen on the intake form; bills at zero until set
    #[default]
    Unset,
}

impl ParticipantCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantCategory::Adult => "Adult",
            ParticipantCategory::Teen => "Teen",
            ParticipantCategory::Child => "Child",
            ParticipantCategory::Toddler => "Toddler",
            ParticipantCategory::Infant => "Infant",
            ParticipantCategory::Unset => "Not set",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ParticipantCategory::Unset)
    }
}

/// Mapping from participant category to unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRuleSet {
    pub rates: HashMap<ParticipantCategory, Decimal>,
}

impl FeeRuleSet {
    /// Unit price for a category; categories outside the table bill at zero
    pub fn rate_for(&self, category: ParticipantCategory) -> Decimal {
        self.rates.get(&category).copied().unwrap_or(Decimal::ZERO)
    }
}

impl Default for FeeRuleSet {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert(ParticipantCategory::Adult, STANDARD_RATE);
        rates.insert(ParticipantCategory::Teen, STANDARD_RATE);
        rates.insert(ParticipantCategory::Child, STANDARD_RATE);
        rates.insert(ParticipantCategory::Toddler, STANDARD_RATE);
        rates.insert(ParticipantCategory::Infant, INFANT_RATE);
        FeeRuleSet { rates }
    }
}
