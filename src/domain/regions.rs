//! Country to continent classification used when importing the gazetteer.
//!
//! The table is ordered; a country listed under several continents belongs to
//! the first one. Countries missing from the table get no region.

/// Continents and the countries assigned to them, in lookup order.
pub static CONTINENTS: &[(&str, &[&str])] = &[
    (
        "Asia",
        &[
            "Japan",
            "Indonesia",
            "India",
            "China",
            "Philippines",
            "Korea, South",
            "Bangladesh",
            "Thailand",
            "Russia",
            "Pakistan",
            "Vietnam",
            "Iran",
            "Iraq",
            "Saudi Arabia",
            "Singapore",
            "Malaysia",
            "South Korea",
            "Afghanistan",
            "Turkey",
            "Israel",
            "Sri Lanka",
            "Jordan",
            "Azerbaijan",
            "Kuwait",
            "Kazakhstan",
            "Nepal",
            "Armenia",
            "Oman",
            "Georgia",
            "Cyprus",
            "Tajikistan",
            "Mongolia",
            "Yemen",
            "Lebanon",
            "Syria",
            "Hong Kong",
            "Macau",
            "Taiwan",
            "Korea, North",
        ],
    ),
    (
        "Africa",
        &[
            "Egypt",
            "Nigeria",
            "South Africa",
            "Kenya",
            "Angola",
            "Ethiopia",
            "Morocco",
            "Algeria",
            "Ghana",
            "Uganda",
            "Tanzania",
            "Sudan",
            "Zimbabwe",
            "Malawi",
            "Mozambique",
            "Namibia",
            "Zambia",
            "Ivory Coast",
            "Senegal",
            "Cameroon",
            "Mauritius",
            "Mali",
            "Madagascar",
            "Botswana",
            "Mauritania",
            "Tunisia",
            "Burkina Faso",
            "Rwanda",
            "Chad",
            "Gabon",
            "Liberia",
            "Sierra Leone",
            "Lesotho",
            "Eswatini",
            "Seychelles",
            "Burundi",
            "Togo",
            "Sao Tome and Principe",
            "Comoros",
            "Central African Republic",
            "Congo (Kinshasa)",
            "Congo (Brazzaville)",
            "Equatorial Guinea",
            "Gambia",
            "Guinea",
            "Guinea-Bissau",
            "Congo",
        ],
    ),
    (
        "North America",
        &[
            "United States",
            "Mexico",
            "Canada",
            "Guatemala",
            "Honduras",
            "El Salvador",
            "Costa Rica",
            "Panama",
            "Cuba",
            "Dominican Republic",
            "Haiti",
            "Jamaica",
            "Trinidad and Tobago",
            "Barbados",
            "Saint Lucia",
            "Saint Kitts and Nevis",
            "Antigua and Barbuda",
            "Bahamas",
            "Belize",
            "Saint Vincent and the Grenadines",
            "Bermuda",
            "Cayman Islands",
            "Puerto Rico",
            "Dominica",
            "Grenada",
            "Saint Barthelemy",
            "Saint Martin",
            "Faroe Islands",
        ],
    ),
    (
        "South America",
        &[
            "Brazil",
            "Argentina",
            "Peru",
            "Colombia",
            "Chile",
            "Ecuador",
            "Bolivia",
            "Paraguay",
            "Suriname",
            "Guyana",
            "Venezuela",
            "Uruguay",
            "French Guiana",
        ],
    ),
    (
        "Europe",
        &[
            "United Kingdom",
            "France",
            "Germany",
            "Italy",
            "Spain",
            "Poland",
            "Ukraine",
            "Romania",
            "Netherlands",
            "Belgium",
            "Greece",
            "Portugal",
            "Czechia",
            "Sweden",
            "Hungary",
            "Belarus",
            "Austria",
            "Switzerland",
            "Norway",
            "Denmark",
            "Finland",
            "Ireland",
            "Croatia",
            "Serbia",
            "Bulgaria",
            "Slovakia",
            "Slovenia",
            "Moldova",
            "Albania",
            "Kosovo",
            "North Macedonia",
            "Georgia",
            "Lithuania",
            "Latvia",
            "Estonia",
            "Armenia",
            "Malta",
            "San Marino",
            "Monaco",
            "Liechtenstein",
            "Andorra",
            "Cyprus",
            "Luxembourg",
            "Vatican City",
            "Faroe Islands",
        ],
    ),
    (
        "Oceania",
        &[
            "Australia",
            "New Zealand",
            "Fiji",
            "Papua New Guinea",
            "Solomon Islands",
            "Vanuatu",
            "Samoa",
            "Kiribati",
            "Tonga",
            "Tuvalu",
            "Palau",
            "Micronesia",
            "Marshall Islands",
            "Nauru",
            "Cook Islands",
            "French Polynesia",
            "New Caledonia",
            "Wallis and Futuna",
            "American Samoa",
            "Cabo Verde",
            "Guam",
        ],
    ),
    (
        "Antarctica",
        &[
            "Antarctica",
        ],
    ),
    (
        "Other",
        &[
            "Burma",
            "Côte d’Ivoire",
            "United Arab Emirates",
            "Uzbekistan",
            "Somalia",
            "Cambodia",
            "Qatar",
            "Libya",
            "Kyrgyzstan",
            "Nicaragua",
            "Turkmenistan",
            "Niger",
            "Eritrea",
            "Laos",
            "Benin",
            "Bahrain",
            "Djibouti",
            "Gaza Strip",
            "Macau",
            "South Sudan",
            "Bosnia and Herzegovina",
            "Gambia, The",
            "Reunion",
            "Bahamas, The",
            "Martinique",
            "Guadeloupe",
            "Timor-Leste",
            "West Bank",
            "Montenegro",
            "Curaçao",
            "Iceland",
            "Maldives",
            "Bhutan",
            "Mayotte",
            "Brunei",
            "Aruba",
            "Gibraltar",
            "Jersey",
            "Isle of Man",
            "Guernsey",
            "Greenland",
            "Micronesia, Federated States of",
            "Virgin Islands, British",
            "Bonaire, Sint Eustatius, and Saba",
            "Saint Pierre and Miquelon",
            "Turks and Caicos Islands",
            "Anguilla",
            "Northern Mariana Islands",
            "Falkland Islands (Islas Malvinas)",
            "Sint Maarten",
            "Svalbard",
            "Christmas Island",
            "Saint Helena, Ascension, and Tristan da Cunha",
            "Niue",
            "Montserrat",
            "Norfolk Island",
            "South Georgia and South Sandwich Islands",
            "Pitcairn Islands",
            "South Georgia And South Sandwich Islands",
            "U.S. Virgin Islands",
        ],
    ),
];

/// Returns the continent for `country`, matching the gazetteer spelling exactly.
pub fn continent_for(country: &str) -> Option<&'static str> {
    CONTINENTS
        .iter()
        .find(|(_, countries)| countries.contains(&country))
        .map(|(continent, _)| *continent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        assert_eq!(continent_for("Ukraine"), Some("Europe"));
        assert_eq!(continent_for("Japan"), Some("Asia"));
        assert_eq!(continent_for("Brazil"), Some("South America"));
        assert_eq!(continent_for("Curaçao"), Some("Other"));
    }

    #[test]
    fn test_first_continent_wins() {
        // Listed under both Asia and Europe.
        assert_eq!(continent_for("Georgia"), Some("Asia"));
        // Listed under both North America and Europe.
        assert_eq!(continent_for("Faroe Islands"), Some("North America"));
    }

    #[test]
    fn test_unknown_country_has_no_region() {
        assert_eq!(continent_for("Atlantis"), None);
        assert_eq!(continent_for("ukraine"), None);
    }
}
