//! Accepted alternate spellings of capital names.
//!
//! Each row pairs the spelling the country table records with the other
//! spellings a player may reasonably type: English exonyms, local names,
//! transliterations. Rows are written in natural spelling and folded through
//! [`normalize_capital_name`] once, on first use.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::normalize::normalize_capital_name;

const VARIANT_ROWS: &[(&str, &[&str])] = &[
    ("Rome", &["Roma"]),
    ("Londres", &["London"]),
    ("Washington", &["Washington DC", "Washington D.C."]),
    ("Pékin", &["Beijing"]),
    ("New Delhi", &["Nouvelle Delhi"]),
    ("Moscou", &["Moscow"]),
    ("Le Caire", &["Cairo", "Caire"]),
    ("Mexico", &["Mexico City", "Ville de Mexico"]),
    ("Téhéran", &["Tehran"]),
    ("Bagdad", &["Baghdad"]),
    ("Riyad", &["Riyadh"]),
    ("Manille", &["Manila"]),
    ("Singapour", &["Singapore"]),
    ("Copenhague", &["Copenhagen"]),
    ("Bruxelles", &["Brussels"]),
    ("Berne", &["Bern"]),
    ("Vienne", &["Vienna"]),
    ("Lisbonne", &["Lisbon"]),
    ("Athènes", &["Athens"]),
    ("Varsovie", &["Warsaw"]),
    ("Bucarest", &["Bucharest"]),
    ("Kiev", &["Kyiv"]),
    ("Alger", &["Algiers"]),
    ("Addis Abeba", &["Addis Ababa"]),
    ("Addis-Abeba", &["Addis Abeba", "Addis Ababa"]),
    ("Kaboul", &["Kabul"]),
    ("Dacca", &["Dhaka"]),
    ("Oulan Bator", &["Ulaanbaatar"]),
    ("Oulan-Bator", &["Oulan Bator", "Ulaanbaatar"]),
    ("Astana", &["Nur-Sultan"]),
    ("Tachkent", &["Tashkent"]),
    ("Beyrouth", &["Beirut"]),
    ("Damas", &["Damascus"]),
    ("Koweït", &["Kuwait"]),
    ("Abou Dabi", &["Abu Dhabi"]),
    ("Mascate", &["Muscat"]),
    ("La Havane", &["Havana"]),
    ("Saint Domingue", &["Santo Domingo"]),
    ("Saint-Domingue", &["Saint Domingue", "Santo Domingo"]),
    ("Port au Prince", &["Port-au-Prince"]),
    ("Port-au-Prince", &["Port au Prince"]),
    ("Porto Novo", &["Porto-Novo"]),
    ("Porto-Novo", &["Porto Novo"]),
    ("Mogadiscio", &["Mogadishu"]),
];

/// Normalized canonical spelling to the normalized spellings it accepts.
///
/// Every set contains its own key. Rows whose canonical spellings normalize
/// identically are merged.
static VARIANTS: LazyLock<HashMap<String, HashSet<String>>> = LazyLock::new(|| {
    let mut table: HashMap<String, HashSet<String>> = HashMap::new();
    for (canonical, alternates) in VARIANT_ROWS {
        let key = normalize_capital_name(canonical);
        let accepted = table.entry(key.clone()).or_default();
        accepted.insert(key);
        accepted.extend(alternates.iter().map(|alt| normalize_capital_name(alt)));
    }
    table
});

/// Spellings accepted for a normalized canonical capital, if it has any
/// recorded alternates.
#[must_use]
pub fn accepted_variants(normalized_capital: &str) -> Option<&'static HashSet<String>> {
    VARIANTS.get(normalized_capital)
}
