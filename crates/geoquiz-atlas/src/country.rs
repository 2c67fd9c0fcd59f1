//! Country reference record.

use serde::Serialize;

/// Common and official names of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryName {
    /// Everyday name shown to the player.
    pub common: &'static str,
    /// Formal state name.
    pub official: &'static str,
}

/// A country the quiz can ask about. Identity is `cca2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Display names.
    pub name: CountryName,
    /// Recorded capital names, preferred spelling first.
    pub capital: &'static [&'static str],
    /// ISO 3166-1 alpha-2 code.
    #[serde(rename = "countryCode2")]
    pub cca2: &'static str,
    /// ISO 3166-1 alpha-3 code.
    #[serde(rename = "countryCode3")]
    pub cca3: &'static str,
}

impl Country {
    /// First recorded capital, or `None` for a country without one.
    #[must_use]
    pub fn primary_capital(&self) -> Option<&'static str> {
        self.capital.first().copied()
    }

    /// Whether `code` names this country by its alpha-2 or alpha-3 code.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.cca2 == code || self.cca3 == code
    }
}
