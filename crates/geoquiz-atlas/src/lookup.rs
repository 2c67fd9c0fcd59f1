//! Read-only indexes over the reference tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::continents::{CONTINENTS, ContinentFilter, WORLD};
use crate::countries::COUNTRIES;
use crate::country::Country;

/// Countries indexed by both alpha-2 and alpha-3 code.
static BY_CODE: LazyLock<HashMap<&'static str, &'static Country>> = LazyLock::new(|| {
    COUNTRIES
        .iter()
        .flat_map(|country| [(country.cca2, country), (country.cca3, country)])
        .collect()
});

static BY_CONTINENT: LazyLock<HashMap<&'static str, &'static ContinentFilter>> =
    LazyLock::new(|| CONTINENTS.iter().map(|c| (c.key, c)).collect());

/// Minimum query length, in characters, for name search.
const MIN_SEARCH_LEN: usize = 2;

/// The full country table.
#[must_use]
pub fn countries() -> &'static [Country] {
    COUNTRIES
}

/// All continent filters, `world` first.
#[must_use]
pub fn continents() -> &'static [ContinentFilter] {
    CONTINENTS
}

/// Looks up a country in the full table by alpha-2 or alpha-3 code.
#[must_use]
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    BY_CODE.get(code).copied()
}

/// Finds a country in `pool` by alpha-2 or alpha-3 code.
#[must_use]
pub fn find_country_by_code<'a>(pool: &'a [Country], code: &str) -> Option<&'a Country> {
    pool.iter().find(|country| country.has_code(code))
}

/// Looks up a continent filter by key.
#[must_use]
pub fn continent(key: &str) -> Option<&'static ContinentFilter> {
    BY_CONTINENT.get(key).copied()
}

/// Builds the question pool for a continent key, in table order.
///
/// Returns `None` for an unknown key.
#[must_use]
pub fn countries_for_continent(key: &str) -> Option<Vec<Country>> {
    let filter = continent(key)?;
    Some(
        COUNTRIES
            .iter()
            .filter(|country| filter.admits(country.cca2))
            .copied()
            .collect(),
    )
}

/// Key of the first continent listing `cca2`, or [`WORLD`] if none does.
#[must_use]
pub fn continent_of_country(cca2: &str) -> &'static str {
    CONTINENTS
        .iter()
        .find(|c| c.countries.contains(&cca2))
        .map_or(WORLD, |c| c.key)
}

/// Case-insensitive substring search over common and official names.
///
/// Queries shorter than two characters return nothing.
#[must_use]
pub fn search_countries_by_name(pool: &[Country], query: &str, limit: usize) -> Vec<Country> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_SEARCH_LEN {
        return Vec::new();
    }

    pool.iter()
        .filter(|country| {
            country.name.common.to_lowercase().contains(&query)
                || country.name.official.to_lowercase().contains(&query)
        })
        .take(limit)
        .copied()
        .collect()
}

/// Whether `code` has the shape of an ISO alpha-2 or alpha-3 code.
#[must_use]
pub fn is_valid_country_code(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_uppercase())
}
