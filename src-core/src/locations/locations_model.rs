use serde::Serialize;

/// Immutable catalog entry for a bookable city/airport
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCode {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    /// Display name the provider uses for this location, when it differs
    pub provider_name: Option<&'static str>,
    /// Lowercase blob of code, city and country, precomputed at load
    #[serde(skip)]
    pub search_terms: String,
}

impl LocationCode {
    pub fn display_label(&self) -> String {
        format!("{} - {}, {}", self.code, self.city, self.country)
    }
}
