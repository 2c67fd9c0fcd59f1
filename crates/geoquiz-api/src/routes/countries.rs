//! Country name search for the map's search box.

use axum::extract::Query;
use axum::{Json, Router, routing::get};
use geoquiz_atlas::lookup::{
    continent_of_country, countries_for_continent, search_countries_by_name,
};
use geoquiz_atlas::{Country, WORLD};
use geoquiz_core::error::DomainError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Results returned when the query gives no limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound on `limit`.
pub const MAX_LIMIT: usize = 50;

/// Query string for GET /.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Name fragment; shorter than two characters matches nothing.
    #[serde(default)]
    pub q: String,
    /// Continent key to search within; the whole world when absent.
    pub continent: Option<String>,
    /// Maximum number of results.
    pub limit: Option<usize>,
}

/// A country as listed in search results. Capitals are not included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    /// Everyday name.
    pub name: &'static str,
    /// Formal state name.
    pub official_name: &'static str,
    /// Alpha-2 code to send when selecting.
    pub code: &'static str,
    /// Alpha-3 code.
    pub code3: &'static str,
    /// Continent key the country belongs to.
    pub continent: &'static str,
}

impl From<Country> for CountryView {
    fn from(country: Country) -> Self {
        Self {
            name: country.name.common,
            official_name: country.name.official,
            code: country.cca2,
            code3: country.cca3,
            continent: continent_of_country(country.cca2),
        }
    }
}

/// GET /?q=&continent=&limit=
#[instrument]
async fn search_countries(
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<CountryView>>, ApiError> {
    let key = query.continent.as_deref().unwrap_or(WORLD);
    let pool = countries_for_continent(key)
        .ok_or_else(|| DomainError::Validation(format!("unknown continent: {key}")))?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let results = search_countries_by_name(&pool, &query.q, limit)
        .into_iter()
        .map(CountryView::from)
        .collect();
    Ok(Json(results))
}

/// Returns the router for country search.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search_countries))
}
