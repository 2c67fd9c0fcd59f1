//! Static country table.
//!
//! Names and capitals use the French spellings the quiz is played in.
//! English and local spellings are accepted through the answer variant table.

use crate::country::{Country, CountryName};

macro_rules! country {
    ($common:literal, $official:literal, [$($capital:literal),+], $cca2:literal, $cca3:literal) => {
        Country {
            name: CountryName {
                common: $common,
                official: $official,
            },
            capital: &[$($capital),+],
            cca2: $cca2,
            cca3: $cca3,
        }
    };
}

/// Every country the quiz can ask about.
pub static COUNTRIES: &[Country] = &[
    country!("France", "République française", ["Paris"], "FR", "FRA"),
    country!("Allemagne", "République fédérale d'Allemagne", ["Berlin"], "DE", "DEU"),
    country!("Italie", "République italienne", ["Rome"], "IT", "ITA"),
    country!("Espagne", "Royaume d'Espagne", ["Madrid"], "ES", "ESP"),
    country!("Royaume-Uni", "Royaume-Uni de Grande-Bretagne et d'Irlande du Nord", ["Londres"], "GB", "GBR"),
    country!("États-Unis", "États-Unis d'Amérique", ["Washington"], "US", "USA"),
    country!("Canada", "Canada", ["Ottawa"], "CA", "CAN"),
    country!("Brésil", "République fédérative du Brésil", ["Brasília"], "BR", "BRA"),
    country!("Argentine", "République argentine", ["Buenos Aires"], "AR", "ARG"),
    country!("Australie", "Commonwealth d'Australie", ["Canberra"], "AU", "AUS"),
    country!("Chine", "République populaire de Chine", ["Pékin"], "CN", "CHN"),
    country!("Inde", "République de l'Inde", ["New Delhi"], "IN", "IND"),
    country!("Russie", "Fédération de Russie", ["Moscou"], "RU", "RUS"),
    country!("Japon", "Japon", ["Tokyo"], "JP", "JPN"),
    country!("Égypte", "République arabe d'Égypte", ["Le Caire"], "EG", "EGY"),
    country!("Afrique du Sud", "République d'Afrique du Sud", ["Pretoria"], "ZA", "ZAF"),
    country!("Nigeria", "République fédérale du Nigeria", ["Abuja"], "NG", "NGA"),
    country!("Kenya", "République du Kenya", ["Nairobi"], "KE", "KEN"),
    country!("Mexique", "États-Unis mexicains", ["Mexico"], "MX", "MEX"),
    country!("Pérou", "République du Pérou", ["Lima"], "PE", "PER"),
    country!("Chili", "République du Chili", ["Santiago"], "CL", "CHL"),
    country!("Colombie", "République de Colombie", ["Bogotá"], "CO", "COL"),
    country!("Venezuela", "République bolivarienne du Venezuela", ["Caracas"], "VE", "VEN"),
    country!("Turquie", "République de Turquie", ["Ankara"], "TR", "TUR"),
    country!("Iran", "République islamique d'Iran", ["Téhéran"], "IR", "IRN"),
    country!("Irak", "République d'Irak", ["Bagdad"], "IQ", "IRQ"),
    country!("Arabie saoudite", "Royaume d'Arabie saoudite", ["Riyad"], "SA", "SAU"),
    country!("Israël", "État d'Israël", ["Jérusalem"], "IL", "ISR"),
    country!("Thaïlande", "Royaume de Thaïlande", ["Bangkok"], "TH", "THA"),
    country!("Vietnam", "République socialiste du Vietnam", ["Hanoï"], "VN", "VNM"),
    country!("Corée du Sud", "République de Corée", ["Séoul"], "KR", "KOR"),
    country!("Corée du Nord", "République populaire démocratique de Corée", ["Pyongyang"], "KP", "PRK"),
    country!("Indonésie", "République d'Indonésie", ["Jakarta"], "ID", "IDN"),
    country!("Malaisie", "Malaisie", ["Kuala Lumpur"], "MY", "MYS"),
    country!("Philippines", "République des Philippines", ["Manille"], "PH", "PHL"),
    country!("Singapour", "République de Singapour", ["Singapour"], "SG", "SGP"),
    country!("Nouvelle-Zélande", "Nouvelle-Zélande", ["Wellington"], "NZ", "NZL"),
    country!("Norvège", "Royaume de Norvège", ["Oslo"], "NO", "NOR"),
    country!("Suède", "Royaume de Suède", ["Stockholm"], "SE", "SWE"),
    country!("Danemark", "Royaume du Danemark", ["Copenhague"], "DK", "DNK"),
    country!("Finlande", "République de Finlande", ["Helsinki"], "FI", "FIN"),
    country!("Pays-Bas", "Royaume des Pays-Bas", ["Amsterdam"], "NL", "NLD"),
    country!("Belgique", "Royaume de Belgique", ["Bruxelles"], "BE", "BEL"),
    country!("Suisse", "Confédération suisse", ["Berne"], "CH", "CHE"),
    country!("Autriche", "République d'Autriche", ["Vienne"], "AT", "AUT"),
    country!("Portugal", "République portugaise", ["Lisbonne"], "PT", "PRT"),
    country!("Grèce", "République hellénique", ["Athènes"], "GR", "GRC"),
    country!("Pologne", "République de Pologne", ["Varsovie"], "PL", "POL"),
    country!("République tchèque", "République tchèque", ["Prague"], "CZ", "CZE"),
    country!("Hongrie", "Hongrie", ["Budapest"], "HU", "HUN"),
    country!("Roumanie", "Roumanie", ["Bucarest"], "RO", "ROU"),
    country!("Ukraine", "Ukraine", ["Kiev"], "UA", "UKR"),
];
