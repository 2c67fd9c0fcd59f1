//! Capital answer validation.

use geoquiz_atlas::Country;

use crate::normalize::normalize_capital_name;
use crate::variants::accepted_variants;

/// Whether `user_answer` names one of `country`'s capitals.
///
/// Accepts an exact match after normalization, then any recorded alternate
/// spelling of a capital. A blank answer never matches.
#[must_use]
pub fn validate_capital_answer(country: &Country, user_answer: &str) -> bool {
    let answer = normalize_capital_name(user_answer);
    if answer.is_empty() {
        return false;
    }

    let capitals: Vec<String> = country
        .capital
        .iter()
        .map(|capital| normalize_capital_name(capital))
        .collect();

    if capitals.iter().any(|capital| *capital == answer) {
        return true;
    }

    capitals
        .iter()
        .filter_map(|capital| accepted_variants(capital))
        .any(|accepted| accepted.contains(&answer))
}

#[cfg(test)]
mod tests {
    use geoquiz_atlas::lookup::{countries, country_by_code};
    use geoquiz_atlas::{Country, CountryName};

    use super::*;

    const FRANCE_LIKE: Country = Country {
        name: CountryName {
            common: "France",
            official: "République française",
        },
        capital: &["Paris"],
        cca2: "FR",
        cca3: "FRA",
    };

    fn country(code: &str) -> &'static Country {
        country_by_code(code).unwrap()
    }

    #[test]
    fn test_every_recorded_capital_validates() {
        for country in countries() {
            for capital in country.capital {
                assert!(
                    validate_capital_answer(country, capital),
                    "{capital} rejected for {}",
                    country.name.common
                );
                assert!(validate_capital_answer(country, &capital.to_uppercase()));
            }
        }
    }

    #[test]
    fn test_case_and_accents_are_ignored() {
        assert!(validate_capital_answer(country("RU"), "MOSCOU"));
        assert!(validate_capital_answer(country("RU"), "moscou"));
        assert!(validate_capital_answer(country("BR"), "brasilia"));
        assert!(validate_capital_answer(country("IR"), "TEHERAN"));
    }

    #[test]
    fn test_known_variants_are_accepted() {
        assert!(validate_capital_answer(country("MX"), "México City"));
        assert!(validate_capital_answer(country("CN"), "Beijing"));
        assert!(validate_capital_answer(country("GB"), "london"));
        assert!(validate_capital_answer(country("US"), "Washington, D.C."));
        assert!(validate_capital_answer(country("UA"), "Kyiv"));
        assert!(validate_capital_answer(country("EG"), "  cairo "));
    }

    #[test]
    fn test_blank_answer_is_rejected() {
        assert!(!validate_capital_answer(&FRANCE_LIKE, ""));
        assert!(!validate_capital_answer(&FRANCE_LIKE, "   "));
        assert!(!validate_capital_answer(&FRANCE_LIKE, "..."));
    }

    #[test]
    fn test_wrong_city_is_rejected() {
        assert!(!validate_capital_answer(&FRANCE_LIKE, "Lyon"));
        assert!(!validate_capital_answer(country("DE"), "Munich"));
    }

    #[test]
    fn test_variant_of_another_country_is_rejected() {
        assert!(!validate_capital_answer(country("FR"), "London"));
        assert!(!validate_capital_answer(country("IT"), "Beijing"));
    }

    #[test]
    fn test_partial_answer_is_rejected() {
        assert!(!validate_capital_answer(country("AR"), "Buenos"));
    }

    #[test]
    fn test_country_without_capital_rejects_everything() {
        let stateless = Country {
            capital: &[],
            ..FRANCE_LIKE
        };
        assert!(!validate_capital_answer(&stateless, "Paris"));
    }
}
