//! Destination catalog offered by the trip form.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
    /// ISO 3166-1 alpha-2.
    pub country_code: &'static str,
}

const fn city(name: &'static str, country: &'static str, country_code: &'static str) -> City {
    City {
        name,
        country,
        country_code,
    }
}

static CITIES: [City; 23] = [
    city("Laghouat", "Algeria", "DZ"),
    city("Lagos", "Nigeria", "NG"),
    city("Doha", "Qatar", "QA"),
    city("Dubai", "United Arab Emirates", "AE"),
    city("Paris", "France", "FR"),
    city("London", "United Kingdom", "GB"),
    city("New York", "United States", "US"),
    city("Tokyo", "Japan", "JP"),
    city("Sydney", "Australia", "AU"),
    city("Cairo", "Egypt", "EG"),
    city("Nairobi", "Kenya", "KE"),
    city("Cape Town", "South Africa", "ZA"),
    city("Accra", "Ghana", "GH"),
    city("Abuja", "Nigeria", "NG"),
    city("Mumbai", "India", "IN"),
    city("Singapore", "Singapore", "SG"),
    city("Barcelona", "Spain", "ES"),
    city("Rome", "Italy", "IT"),
    city("Berlin", "Germany", "DE"),
    city("Istanbul", "Turkey", "TR"),
    city("Bangkok", "Thailand", "TH"),
    city("Bahamas", "The Bahamas", "BS"),
    city("Melbourne", "Australia", "AU"),
];

// Offset from 'A' to REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

impl City {
    pub fn all() -> &'static [City] {
        &CITIES
    }

    /// Case-insensitive substring match on name, country, or country code.
    /// A blank query matches everything.
    pub fn search(query: &str) -> Vec<City> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return CITIES.to_vec();
        }
        CITIES
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.country.to_lowercase().contains(&needle)
                    || c.country_code.to_lowercase().contains(&needle)
            })
            .copied()
            .collect()
    }

    /// "Lagos, Nigeria"; this is what lands in a trip's `destination`.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    pub fn subtitle(&self) -> &'static str {
        if self.country.is_empty() {
            self.name
        } else {
            self.country
        }
    }

    pub fn flag_emoji(&self) -> String {
        self.country_code
            .chars()
            .filter(char::is_ascii_alphabetic)
            .filter_map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(City::search("").len(), City::all().len());
        assert_eq!(City::search("   ").len(), City::all().len());
    }

    #[test]
    fn search_matches_name_country_and_code() {
        let names = |q: &str| City::search(q).iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names("LAG"), vec!["Laghouat", "Lagos"]);
        assert_eq!(names("nigeria"), vec!["Lagos", "Abuja"]);
        assert_eq!(names("za"), vec!["Cape Town"]);
        assert!(names("atlantis").is_empty());
    }

    #[test]
    fn full_name_and_flag() {
        let lagos = City::search("lagos")[0];
        assert_eq!(lagos.full_name(), "Lagos, Nigeria");
        assert_eq!(lagos.subtitle(), "Nigeria");
        assert_eq!(lagos.flag_emoji(), "🇳🇬");
    }
}
