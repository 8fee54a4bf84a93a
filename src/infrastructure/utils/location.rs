//! Country → state → city cascade backing the experience location selectors.

use once_cell::sync::Lazy;

pub static LOCATION_INDEX: Lazy<LocationIndex> = Lazy::new(LocationIndex::builtin);

pub struct LocationIndex {
    countries: Vec<CountryEntry>,
}

struct CountryEntry {
    name: &'static str,
    states: Vec<StateEntry>,
}

struct StateEntry {
    name: &'static str,
    cities: Vec<&'static str>,
}

type CountrySeed = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const SEED: &[CountrySeed] = &[
    (
        "India",
        &[
            ("Delhi", &["New Delhi", "Delhi"]),
            ("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
            ("Karnataka", &["Bangalore", "Mysore"]),
            ("Uttarakhand", &["Dehradun", "Haridwar", "Nainital"]),
            ("Tamil Nadu", &["Chennai", "Coimbatore"]),
            ("Telangana", &["Hyderabad"]),
            ("West Bengal", &["Kolkata"]),
        ],
    ),
    (
        "United States",
        &[
            ("California", &["San Francisco", "Los Angeles", "San Diego"]),
            ("New York", &["New York", "Buffalo"]),
            ("Washington", &["Seattle", "Spokane"]),
            ("Texas", &["Austin", "Houston"]),
        ],
    ),
    (
        "United Kingdom",
        &[
            ("England", &["London", "Manchester", "Cambridge"]),
            ("Scotland", &["Edinburgh", "Glasgow"]),
        ],
    ),
    (
        "Canada",
        &[
            ("Ontario", &["Toronto", "Ottawa"]),
            ("British Columbia", &["Vancouver", "Victoria"]),
        ],
    ),
    (
        "Germany",
        &[
            ("Berlin", &["Berlin"]),
            ("Bavaria", &["Munich", "Nuremberg"]),
        ],
    ),
    (
        "Singapore",
        &[("Central Region", &["Singapore"])],
    ),
];

impl LocationIndex {
    fn builtin() -> Self {
        let countries = SEED
            .iter()
            .map(|&(name, states)| CountryEntry {
                name,
                states: states
                    .iter()
                    .map(|&(state, cities)| StateEntry {
                        name: state,
                        cities: cities.to_vec(),
                    })
                    .collect(),
            })
            .collect();

        LocationIndex { countries }
    }

    pub fn countries(&self) -> Vec<&'static str> {
        self.countries.iter().map(|c| c.name).collect()
    }

    pub fn states(&self, country: &str) -> Vec<&'static str> {
        self.country(country)
            .map(|c| c.states.iter().map(|s| s.name).collect())
            .unwrap_or_default()
    }

    pub fn cities(&self, country: &str, state: &str) -> Vec<&'static str> {
        self.state(country, state)
            .map(|s| s.cities.clone())
            .unwrap_or_default()
    }

    fn country(&self, name: &str) -> Option<&CountryEntry> {
        self.countries.iter().find(|c| c.name == name)
    }

    fn state(&self, country: &str, name: &str) -> Option<&StateEntry> {
        self.country(country)
            .and_then(|c| c.states.iter().find(|s| s.name == name))
    }

    /// Splits a stored `"City, State, Country"` string into its cascade
    /// parts, validated against the index. Parts are assigned from the end
    /// of the string; the first level not found in the table empties itself
    /// and every level below it.
    pub fn split(&self, location: &str) -> (String, String, String) {
        let parts: Vec<&str> = location
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let mut rev = parts.iter().rev();
        let country = rev.next().copied().unwrap_or("");
        let state = rev.next().copied().unwrap_or("");
        let city = rev.next().copied().unwrap_or("");

        if self.country(country).is_none() {
            return (String::new(), String::new(), String::new());
        }
        let Some(entry) = self.state(country, state) else {
            return (country.to_string(), String::new(), String::new());
        };
        if !entry.cities.contains(&city) {
            return (country.to_string(), state.to_string(), String::new());
        }

        (country.to_string(), state.to_string(), city.to_string())
    }

    /// Joins cascade parts back into the `"City, State, Country"` storage
    /// format, leaving out empty levels.
    pub fn compose(&self, country: &str, state: &str, city: &str) -> String {
        [city.trim(), state.trim(), country.trim()]
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
