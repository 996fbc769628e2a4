use std::sync::OnceLock;

use super::locations_model::LocationCode;

/// Curated seed of travel-relevant locations: (code, city, country, provider name).
/// Order is significant: search results keep insertion order.
const LOCATION_SEED: &[(&str, &str, &str, Option<&str>)] = &[
    ("ACC", "Accra", "Ghana", Some("Kotoka International Airport")),
    ("KMS", "Kumasi", "Ghana", Some("Prempeh I International Airport")),
    ("TML", "Tamale", "Ghana", None),
    ("LOS", "Lagos", "Nigeria", Some("Murtala Muhammed International Airport")),
    ("ABV", "Abuja", "Nigeria", Some("Nnamdi Azikiwe International Airport")),
    ("ABJ", "Abidjan", "Cote d'Ivoire", Some("Felix-Houphouet-Boigny Airport")),
    ("DKR", "Dakar", "Senegal", Some("Blaise Diagne International Airport")),
    ("LFW", "Lome", "Togo", None),
    ("NBO", "Nairobi", "Kenya", Some("Jomo Kenyatta International Airport")),
    ("ADD", "Addis Ababa", "Ethiopia", Some("Bole International Airport")),
    ("JNB", "Johannesburg", "South Africa", Some("O. R. Tambo International Airport")),
    ("CPT", "Cape Town", "South Africa", None),
    ("CAI", "Cairo", "Egypt", Some("Cairo International Airport")),
    ("CMN", "Casablanca", "Morocco", Some("Mohammed V International Airport")),
    ("LHR", "London", "United Kingdom", Some("Heathrow Airport")),
    ("MAN", "Manchester", "United Kingdom", None),
    ("CDG", "Paris", "France", Some("Charles de Gaulle Airport")),
    ("AMS", "Amsterdam", "Netherlands", Some("Schiphol Airport")),
    ("FRA", "Frankfurt", "Germany", None),
    ("BRU", "Brussels", "Belgium", None),
    ("IST", "Istanbul", "Turkey", Some("Istanbul Airport")),
    ("DXB", "Dubai", "United Arab Emirates", Some("Dubai International Airport")),
    ("DOH", "Doha", "Qatar", Some("Hamad International Airport")),
    ("JED", "Jeddah", "Saudi Arabia", Some("King Abdulaziz International Airport")),
    ("JFK", "New York", "United States", Some("John F. Kennedy International Airport")),
    ("IAD", "Washington", "United States", Some("Dulles International Airport")),
    ("ATL", "Atlanta", "United States", None),
    ("YYZ", "Toronto", "Canada", Some("Pearson International Airport")),
    ("GRU", "Sao Paulo", "Brazil", Some("Guarulhos International Airport")),
    ("BOM", "Mumbai", "India", Some("Chhatrapati Shivaji Maharaj Airport")),
    ("DEL", "New Delhi", "India", Some("Indira Gandhi International Airport")),
    ("CAN", "Guangzhou", "China", Some("Baiyun International Airport")),
    ("PEK", "Beijing", "China", Some("Capital International Airport")),
    ("KUL", "Kuala Lumpur", "Malaysia", None),
    ("SIN", "Singapore", "Singapore", Some("Changi Airport")),
];

static CATALOG: OnceLock<Vec<LocationCode>> = OnceLock::new();

fn entries() -> &'static [LocationCode] {
    CATALOG.get_or_init(|| {
        LOCATION_SEED
            .iter()
            .map(|&(code, city, country, provider_name)| LocationCode {
                code,
                city,
                country,
                provider_name,
                search_terms: format!("{} {} {}", code, city, country).to_lowercase(),
            })
            .collect()
    })
}

/// Static lookup of travel-relevant locations. Loaded once at first use and
/// read-only thereafter, so shared references are safe across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCatalog;

impl LocationCatalog {
    pub fn new() -> Self {
        LocationCatalog
    }

    /// Case-insensitive substring match over the precomputed search blob,
    /// capped at `limit`. Results keep catalog insertion order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&'static LocationCode> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        entries()
            .iter()
            .filter(|entry| entry.search_terms.contains(&needle))
            .take(limit)
            .collect()
    }

    /// Exact code lookup, case-insensitive
    pub fn by_code(&self, code: &str) -> Option<&'static LocationCode> {
        let code = code.trim().to_uppercase();
        entries().iter().find(|entry| entry.code == code)
    }

    pub fn len(&self) -> usize {
        entries().len()
    }

    pub fn is_empty(&self) -> bool {
        entries().is_empty()
    }
}
