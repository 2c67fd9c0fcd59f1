//! Continent filters used to narrow the question pool.

use serde::Serialize;

/// Key of the filter that keeps every country.
pub const WORLD: &str = "world";

/// A named subset of countries. An empty code list means no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentFilter {
    /// Stable key sent by the UI (e.g. `"europe"`).
    pub key: &'static str,
    /// Name shown to the player.
    pub display_name: &'static str,
    /// Alpha-2 codes belonging to the continent.
    pub countries: &'static [&'static str],
}

impl ContinentFilter {
    /// Whether this filter keeps every country.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.countries.is_empty()
    }

    /// Whether the filter admits the country with alpha-2 code `cca2`.
    #[must_use]
    pub fn admits(&self, cca2: &str) -> bool {
        self.is_unfiltered() || self.countries.contains(&cca2)
    }
}

/// All continent filters, `world` first.
pub static CONTINENTS: &[ContinentFilter] = &[
    ContinentFilter {
        key: WORLD,
        display_name: "Monde entier",
        countries: &[],
    },
    ContinentFilter {
        key: "europe",
        display_name: "Europe",
        countries: &[
            "FR", "DE", "IT", "ES", "GB", "NO", "SE", "DK", "FI", "NL", "BE", "CH", "AT", "PT",
            "GR", "PL", "CZ", "HU", "RO", "UA", "IE", "IS", "LU", "HR", "RS", "BA", "SI", "SK",
            "BG", "LT", "LV", "EE",
        ],
    },
    ContinentFilter {
        key: "africa",
        display_name: "Afrique",
        countries: &[
            "MA", "DZ", "TN", "LY", "EG", "SD", "ET", "NG", "KE", "ZA", "GH", "CI", "SN", "CM",
            "TZ", "UG", "ZM", "ZW", "BW", "NA", "AO", "MZ", "MG", "CD", "CG", "GA", "GQ", "TD",
            "CF", "ML", "BF", "NE", "MR", "GN", "SL", "LR", "TG", "BJ", "RW", "BI", "MW", "SO",
            "ER", "DJ", "LS", "SZ",
        ],
    },
    ContinentFilter {
        key: "asia",
        display_name: "Asie",
        countries: &[
            "CN", "IN", "RU", "JP", "TR", "IR", "IQ", "SA", "IL", "TH", "VN", "KR", "KP", "ID",
            "MY", "PH", "SG", "AF", "PK", "BD", "LK", "MM", "KH", "LA", "MN", "KZ", "UZ", "JO",
            "LB", "SY", "KW", "AE", "QA", "OM", "YE",
        ],
    },
    ContinentFilter {
        key: "north-america",
        display_name: "Amérique du Nord",
        countries: &[
            "US", "CA", "MX", "GT", "BZ", "SV", "HN", "NI", "CR", "PA", "CU", "JM", "DO", "HT",
            "GL",
        ],
    },
    ContinentFilter {
        key: "south-america",
        display_name: "Amérique du Sud",
        countries: &[
            "BR", "AR", "PE", "CL", "CO", "VE", "EC", "UY", "PY", "BO", "GY", "SR",
        ],
    },
    ContinentFilter {
        key: "oceania",
        display_name: "Océanie",
        countries: &["AU", "NZ"],
    },
];
