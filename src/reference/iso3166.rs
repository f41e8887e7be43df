// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 country code table.
//!
//! Embedded copy of the ISO 3166-1 assignments: English short name,
//! alpha-2 and alpha-3 codes. Lookups accept any of the three, matched
//! case-insensitively, and always canonicalize to the alpha-3 code.
//!
//! Reference: <https://www.iso.org/iso-3166-country-codes.html>

/// One ISO 3166-1 assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
}

/// The full ISO 3166-1 assignment list, ordered by English short name.
pub const COUNTRIES: &[CountryEntry] = &[
    CountryEntry { name: "Afghanistan", alpha2: "AF", alpha3: "AFG" },
    CountryEntry { name: "Albania", alpha2: "AL", alpha3: "ALB" },
    CountryEntry { name: "Algeria", alpha2: "DZ", alpha3: "DZA" },
    CountryEntry { name: "American Samoa", alpha2: "AS", alpha3: "ASM" },
    CountryEntry { name: "Andorra", alpha2: "AD", alpha3: "AND" },
    CountryEntry { name: "Angola", alpha2: "AO", alpha3: "AGO" },
    CountryEntry { name: "Anguilla", alpha2: "AI", alpha3: "AIA" },
    CountryEntry { name: "Antarctica", alpha2: "AQ", alpha3: "ATA" },
    CountryEntry { name: "Antigua and Barbuda", alpha2: "AG", alpha3: "ATG" },
    CountryEntry { name: "Argentina", alpha2: "AR", alpha3: "ARG" },
    CountryEntry { name: "Armenia", alpha2: "AM", alpha3: "ARM" },
    CountryEntry { name: "Aruba", alpha2: "AW", alpha3: "ABW" },
    CountryEntry { name: "Australia", alpha2: "AU", alpha3: "AUS" },
    CountryEntry { name: "Austria", alpha2: "AT", alpha3: "AUT" },
    CountryEntry { name: "Azerbaijan", alpha2: "AZ", alpha3: "AZE" },
    CountryEntry { name: "Bahamas", alpha2: "BS", alpha3: "BHS" },
    CountryEntry { name: "Bahrain", alpha2: "BH", alpha3: "BHR" },
    CountryEntry { name: "Bangladesh", alpha2: "BD", alpha3: "BGD" },
    CountryEntry { name: "Barbados", alpha2: "BB", alpha3: "BRB" },
    CountryEntry { name: "Belarus", alpha2: "BY", alpha3: "BLR" },
    CountryEntry { name: "Belgium", alpha2: "BE", alpha3: "BEL" },
    CountryEntry { name: "Belize", alpha2: "BZ", alpha3: "BLZ" },
    CountryEntry { name: "Benin", alpha2: "BJ", alpha3: "BEN" },
    CountryEntry { name: "Bermuda", alpha2: "BM", alpha3: "BMU" },
    CountryEntry { name: "Bhutan", alpha2: "BT", alpha3: "BTN" },
    CountryEntry { name: "Bolivia", alpha2: "BO", alpha3: "BOL" },
    CountryEntry { name: "Bonaire, Sint Eustatius and Saba", alpha2: "BQ", alpha3: "BES" },
    CountryEntry { name: "Bosnia and Herzegovina", alpha2: "BA", alpha3: "BIH" },
    CountryEntry { name: "Botswana", alpha2: "BW", alpha3: "BWA" },
    CountryEntry { name: "Bouvet Island", alpha2: "BV", alpha3: "BVT" },
    CountryEntry { name: "Brazil", alpha2: "BR", alpha3: "BRA" },
    CountryEntry { name: "British Indian Ocean Territory", alpha2: "IO", alpha3: "IOT" },
    CountryEntry { name: "Brunei Darussalam", alpha2: "BN", alpha3: "BRN" },
    CountryEntry { name: "Bulgaria", alpha2: "BG", alpha3: "BGR" },
    CountryEntry { name: "Burkina Faso", alpha2: "BF", alpha3: "BFA" },
    CountryEntry { name: "Burundi", alpha2: "BI", alpha3: "BDI" },
    CountryEntry { name: "Cabo Verde", alpha2: "CV", alpha3: "CPV" },
    CountryEntry { name: "Cambodia", alpha2: "KH", alpha3: "KHM" },
    CountryEntry { name: "Cameroon", alpha2: "CM", alpha3: "CMR" },
    CountryEntry { name: "Canada", alpha2: "CA", alpha3: "CAN" },
    CountryEntry { name: "Cayman Islands", alpha2: "KY", alpha3: "CYM" },
    CountryEntry { name: "Central African Republic", alpha2: "CF", alpha3: "CAF" },
    CountryEntry { name: "Chad", alpha2: "TD", alpha3: "TCD" },
    CountryEntry { name: "Chile", alpha2: "CL", alpha3: "CHL" },
    CountryEntry { name: "China", alpha2: "CN", alpha3: "CHN" },
    CountryEntry { name: "Christmas Island", alpha2: "CX", alpha3: "CXR" },
    CountryEntry { name: "Cocos (Keeling) Islands", alpha2: "CC", alpha3: "CCK" },
    CountryEntry { name: "Colombia", alpha2: "CO", alpha3: "COL" },
    CountryEntry { name: "Comoros", alpha2: "KM", alpha3: "COM" },
    CountryEntry { name: "Congo", alpha2: "CG", alpha3: "COG" },
    CountryEntry { name: "Congo, Democratic Republic of the", alpha2: "CD", alpha3: "COD" },
    CountryEntry { name: "Cook Islands", alpha2: "CK", alpha3: "COK" },
    CountryEntry { name: "Costa Rica", alpha2: "CR", alpha3: "CRI" },
    CountryEntry { name: "Cote d'Ivoire", alpha2: "CI", alpha3: "CIV" },
    CountryEntry { name: "Croatia", alpha2: "HR", alpha3: "HRV" },
    CountryEntry { name: "Cuba", alpha2: "CU", alpha3: "CUB" },
    CountryEntry { name: "Curacao", alpha2: "CW", alpha3: "CUW" },
    CountryEntry { name: "Cyprus", alpha2: "CY", alpha3: "CYP" },
    CountryEntry { name: "Czechia", alpha2: "CZ", alpha3: "CZE" },
    CountryEntry { name: "Denmark", alpha2: "DK", alpha3: "DNK" },
    CountryEntry { name: "Djibouti", alpha2: "DJ", alpha3: "DJI" },
    CountryEntry { name: "Dominica", alpha2: "DM", alpha3: "DMA" },
    CountryEntry { name: "Dominican Republic", alpha2: "DO", alpha3: "DOM" },
    CountryEntry { name: "Ecuador", alpha2: "EC", alpha3: "ECU" },
    CountryEntry { name: "Egypt", alpha2: "EG", alpha3: "EGY" },
    CountryEntry { name: "El Salvador", alpha2: "SV", alpha3: "SLV" },
    CountryEntry { name: "Equatorial Guinea", alpha2: "GQ", alpha3: "GNQ" },
    CountryEntry { name: "Eritrea", alpha2: "ER", alpha3: "ERI" },
    CountryEntry { name: "Estonia", alpha2: "EE", alpha3: "EST" },
    CountryEntry { name: "Eswatini", alpha2: "SZ", alpha3: "SWZ" },
    CountryEntry { name: "Ethiopia", alpha2: "ET", alpha3: "ETH" },
    CountryEntry { name: "Falkland Islands (Malvinas)", alpha2: "FK", alpha3: "FLK" },
    CountryEntry { name: "Faroe Islands", alpha2: "FO", alpha3: "FRO" },
    CountryEntry { name: "Fiji", alpha2: "FJ", alpha3: "FJI" },
    CountryEntry { name: "Finland", alpha2: "FI", alpha3: "FIN" },
    CountryEntry { name: "France", alpha2: "FR", alpha3: "FRA" },
    CountryEntry { name: "French Guiana", alpha2: "GF", alpha3: "GUF" },
    CountryEntry { name: "French Polynesia", alpha2: "PF", alpha3: "PYF" },
    CountryEntry { name: "French Southern Territories", alpha2: "TF", alpha3: "ATF" },
    CountryEntry { name: "Gabon", alpha2: "GA", alpha3: "GAB" },
    CountryEntry { name: "Gambia", alpha2: "GM", alpha3: "GMB" },
    CountryEntry { name: "Georgia", alpha2: "GE", alpha3: "GEO" },
    CountryEntry { name: "Germany", alpha2: "DE", alpha3: "DEU" },
    CountryEntry { name: "Ghana", alpha2: "GH", alpha3: "GHA" },
    CountryEntry { name: "Gibraltar", alpha2: "GI", alpha3: "GIB" },
    CountryEntry { name: "Greece", alpha2: "GR", alpha3: "GRC" },
    CountryEntry { name: "Greenland", alpha2: "GL", alpha3: "GRL" },
    CountryEntry { name: "Grenada", alpha2: "GD", alpha3: "GRD" },
    CountryEntry { name: "Guadeloupe", alpha2: "GP", alpha3: "GLP" },
    CountryEntry { name: "Guam", alpha2: "GU", alpha3: "GUM" },
    CountryEntry { name: "Guatemala", alpha2: "GT", alpha3: "GTM" },
    CountryEntry { name: "Guernsey", alpha2: "GG", alpha3: "GGY" },
    CountryEntry { name: "Guinea", alpha2: "GN", alpha3: "GIN" },
    CountryEntry { name: "Guinea-Bissau", alpha2: "GW", alpha3: "GNB" },
    CountryEntry { name: "Guyana", alpha2: "GY", alpha3: "GUY" },
    CountryEntry { name: "Haiti", alpha2: "HT", alpha3: "HTI" },
    CountryEntry { name: "Heard Island and McDonald Islands", alpha2: "HM", alpha3: "HMD" },
    CountryEntry { name: "Holy See", alpha2: "VA", alpha3: "VAT" },
    CountryEntry { name: "Honduras", alpha2: "HN", alpha3: "HND" },
    CountryEntry { name: "Hong Kong", alpha2: "HK", alpha3: "HKG" },
    CountryEntry { name: "Hungary", alpha2: "HU", alpha3: "HUN" },
    CountryEntry { name: "Iceland", alpha2: "IS", alpha3: "ISL" },
    CountryEntry { name: "India", alpha2: "IN", alpha3: "IND" },
    CountryEntry { name: "Indonesia", alpha2: "ID", alpha3: "IDN" },
    CountryEntry { name: "Iran", alpha2: "IR", alpha3: "IRN" },
    CountryEntry { name: "Iraq", alpha2: "IQ", alpha3: "IRQ" },
    CountryEntry { name: "Ireland", alpha2: "IE", alpha3: "IRL" },
    CountryEntry { name: "Isle of Man", alpha2: "IM", alpha3: "IMN" },
    CountryEntry { name: "Israel", alpha2: "IL", alpha3: "ISR" },
    CountryEntry { name: "Italy", alpha2: "IT", alpha3: "ITA" },
    CountryEntry { name: "Jamaica", alpha2: "JM", alpha3: "JAM" },
    CountryEntry { name: "Japan", alpha2: "JP", alpha3: "JPN" },
    CountryEntry { name: "Jersey", alpha2: "JE", alpha3: "JEY" },
    CountryEntry { name: "Jordan", alpha2: "JO", alpha3: "JOR" },
    CountryEntry { name: "Kazakhstan", alpha2: "KZ", alpha3: "KAZ" },
    CountryEntry { name: "Kenya", alpha2: "KE", alpha3: "KEN" },
    CountryEntry { name: "Kiribati", alpha2: "KI", alpha3: "KIR" },
    CountryEntry { name: "Korea, Democratic People's Republic of", alpha2: "KP", alpha3: "PRK" },
    CountryEntry { name: "Korea, Republic of", alpha2: "KR", alpha3: "KOR" },
    CountryEntry { name: "Kuwait", alpha2: "KW", alpha3: "KWT" },
    CountryEntry { name: "Kyrgyzstan", alpha2: "KG", alpha3: "KGZ" },
    CountryEntry { name: "Lao People's Democratic Republic", alpha2: "LA", alpha3: "LAO" },
    CountryEntry { name: "Latvia", alpha2: "LV", alpha3: "LVA" },
    CountryEntry { name: "Lebanon", alpha2: "LB", alpha3: "LBN" },
    CountryEntry { name: "Lesotho", alpha2: "LS", alpha3: "LSO" },
    CountryEntry { name: "Liberia", alpha2: "LR", alpha3: "LBR" },
    CountryEntry { name: "Libya", alpha2: "LY", alpha3: "LBY" },
    CountryEntry { name: "Liechtenstein", alpha2: "LI", alpha3: "LIE" },
    CountryEntry { name: "Lithuania", alpha2: "LT", alpha3: "LTU" },
    CountryEntry { name: "Luxembourg", alpha2: "LU", alpha3: "LUX" },
    CountryEntry { name: "Macao", alpha2: "MO", alpha3: "MAC" },
    CountryEntry { name: "Madagascar", alpha2: "MG", alpha3: "MDG" },
    CountryEntry { name: "Malawi", alpha2: "MW", alpha3: "MWI" },
    CountryEntry { name: "Malaysia", alpha2: "MY", alpha3: "MYS" },
    CountryEntry { name: "Maldives", alpha2: "MV", alpha3: "MDV" },
    CountryEntry { name: "Mali", alpha2: "ML", alpha3: "MLI" },
    CountryEntry { name: "Malta", alpha2: "MT", alpha3: "MLT" },
    CountryEntry { name: "Marshall Islands", alpha2: "MH", alpha3: "MHL" },
    CountryEntry { name: "Martinique", alpha2: "MQ", alpha3: "MTQ" },
    CountryEntry { name: "Mauritania", alpha2: "MR", alpha3: "MRT" },
    CountryEntry { name: "Mauritius", alpha2: "MU", alpha3: "MUS" },
    CountryEntry { name: "Mayotte", alpha2: "YT", alpha3: "MYT" },
    CountryEntry { name: "Mexico", alpha2: "MX", alpha3: "MEX" },
    CountryEntry { name: "Micronesia, Federated States of", alpha2: "FM", alpha3: "FSM" },
    CountryEntry { name: "Moldova", alpha2: "MD", alpha3: "MDA" },
    CountryEntry { name: "Monaco", alpha2: "MC", alpha3: "MCO" },
    CountryEntry { name: "Mongolia", alpha2: "MN", alpha3: "MNG" },
    CountryEntry { name: "Montenegro", alpha2: "ME", alpha3: "MNE" },
    CountryEntry { name: "Montserrat", alpha2: "MS", alpha3: "MSR" },
    CountryEntry { name: "Morocco", alpha2: "MA", alpha3: "MAR" },
    CountryEntry { name: "Mozambique", alpha2: "MZ", alpha3: "MOZ" },
    CountryEntry { name: "Myanmar", alpha2: "MM", alpha3: "MMR" },
    CountryEntry { name: "Namibia", alpha2: "NA", alpha3: "NAM" },
    CountryEntry { name: "Nauru", alpha2: "NR", alpha3: "NRU" },
    CountryEntry { name: "Nepal", alpha2: "NP", alpha3: "NPL" },
    CountryEntry { name: "Netherlands", alpha2: "NL", alpha3: "NLD" },
    CountryEntry { name: "New Caledonia", alpha2: "NC", alpha3: "NCL" },
    CountryEntry { name: "New Zealand", alpha2: "NZ", alpha3: "NZL" },
    CountryEntry { name: "Nicaragua", alpha2: "NI", alpha3: "NIC" },
    CountryEntry { name: "Niger", alpha2: "NE", alpha3: "NER" },
    CountryEntry { name: "Nigeria", alpha2: "NG", alpha3: "NGA" },
    CountryEntry { name: "Niue", alpha2: "NU", alpha3: "NIU" },
    CountryEntry { name: "Norfolk Island", alpha2: "NF", alpha3: "NFK" },
    CountryEntry { name: "North Macedonia", alpha2: "MK", alpha3: "MKD" },
    CountryEntry { name: "Northern Mariana Islands", alpha2: "MP", alpha3: "MNP" },
    CountryEntry { name: "Norway", alpha2: "NO", alpha3: "NOR" },
    CountryEntry { name: "Oman", alpha2: "OM", alpha3: "OMN" },
    CountryEntry { name: "Pakistan", alpha2: "PK", alpha3: "PAK" },
    CountryEntry { name: "Palau", alpha2: "PW", alpha3: "PLW" },
    CountryEntry { name: "Palestine, State of", alpha2: "PS", alpha3: "PSE" },
    CountryEntry { name: "Panama", alpha2: "PA", alpha3: "PAN" },
    CountryEntry { name: "Papua New Guinea", alpha2: "PG", alpha3: "PNG" },
    CountryEntry { name: "Paraguay", alpha2: "PY", alpha3: "PRY" },
    CountryEntry { name: "Peru", alpha2: "PE", alpha3: "PER" },
    CountryEntry { name: "Philippines", alpha2: "PH", alpha3: "PHL" },
    CountryEntry { name: "Pitcairn", alpha2: "PN", alpha3: "PCN" },
    CountryEntry { name: "Poland", alpha2: "PL", alpha3: "POL" },
    CountryEntry { name: "Portugal", alpha2: "PT", alpha3: "PRT" },
    CountryEntry { name: "Puerto Rico", alpha2: "PR", alpha3: "PRI" },
    CountryEntry { name: "Qatar", alpha2: "QA", alpha3: "QAT" },
    CountryEntry { name: "Reunion", alpha2: "RE", alpha3: "REU" },
    CountryEntry { name: "Romania", alpha2: "RO", alpha3: "ROU" },
    CountryEntry { name: "Russian Federation", alpha2: "RU", alpha3: "RUS" },
    CountryEntry { name: "Rwanda", alpha2: "RW", alpha3: "RWA" },
    CountryEntry { name: "Saint Barthelemy", alpha2: "BL", alpha3: "BLM" },
    CountryEntry { name: "Saint Helena, Ascension and Tristan da Cunha", alpha2: "SH", alpha3: "SHN" },
    CountryEntry { name: "Saint Kitts and Nevis", alpha2: "KN", alpha3: "KNA" },
    CountryEntry { name: "Saint Lucia", alpha2: "LC", alpha3: "LCA" },
    CountryEntry { name: "Saint Martin (French part)", alpha2: "MF", alpha3: "MAF" },
    CountryEntry { name: "Saint Pierre and Miquelon", alpha2: "PM", alpha3: "SPM" },
    CountryEntry { name: "Saint Vincent and the Grenadines", alpha2: "VC", alpha3: "VCT" },
    CountryEntry { name: "Samoa", alpha2: "WS", alpha3: "WSM" },
    CountryEntry { name: "San Marino", alpha2: "SM", alpha3: "SMR" },
    CountryEntry { name: "Sao Tome and Principe", alpha2: "ST", alpha3: "STP" },
    CountryEntry { name: "Saudi Arabia", alpha2: "SA", alpha3: "SAU" },
    CountryEntry { name: "Senegal", alpha2: "SN", alpha3: "SEN" },
    CountryEntry { name: "Serbia", alpha2: "RS", alpha3: "SRB" },
    CountryEntry { name: "Seychelles", alpha2: "SC", alpha3: "SYC" },
    CountryEntry { name: "Sierra Leone", alpha2: "SL", alpha3: "SLE" },
    CountryEntry { name: "Singapore", alpha2: "SG", alpha3: "SGP" },
    CountryEntry { name: "Sint Maarten (Dutch part)", alpha2: "SX", alpha3: "SXM" },
    CountryEntry { name: "Slovakia", alpha2: "SK", alpha3: "SVK" },
    CountryEntry { name: "Slovenia", alpha2: "SI", alpha3: "SVN" },
    CountryEntry { name: "Solomon Islands", alpha2: "SB", alpha3: "SLB" },
    CountryEntry { name: "Somalia", alpha2: "SO", alpha3: "SOM" },
    CountryEntry { name: "South Africa", alpha2: "ZA", alpha3: "ZAF" },
    CountryEntry { name: "South Georgia and the South Sandwich Islands", alpha2: "GS", alpha3: "SGS" },
    CountryEntry { name: "South Sudan", alpha2: "SS", alpha3: "SSD" },
    CountryEntry { name: "Spain", alpha2: "ES", alpha3: "ESP" },
    CountryEntry { name: "Sri Lanka", alpha2: "LK", alpha3: "LKA" },
    CountryEntry { name: "Sudan", alpha2: "SD", alpha3: "SDN" },
    CountryEntry { name: "Suriname", alpha2: "SR", alpha3: "SUR" },
    CountryEntry { name: "Svalbard and Jan Mayen", alpha2: "SJ", alpha3: "SJM" },
    CountryEntry { name: "Sweden", alpha2: "SE", alpha3: "SWE" },
    CountryEntry { name: "Switzerland", alpha2: "CH", alpha3: "CHE" },
    CountryEntry { name: "Syrian Arab Republic", alpha2: "SY", alpha3: "SYR" },
    CountryEntry { name: "Taiwan, Province of China", alpha2: "TW", alpha3: "TWN" },
    CountryEntry { name: "Tajikistan", alpha2: "TJ", alpha3: "TJK" },
    CountryEntry { name: "Tanzania, United Republic of", alpha2: "TZ", alpha3: "TZA" },
    CountryEntry { name: "Thailand", alpha2: "TH", alpha3: "THA" },
    CountryEntry { name: "Timor-Leste", alpha2: "TL", alpha3: "TLS" },
    CountryEntry { name: "Togo", alpha2: "TG", alpha3: "TGO" },
    CountryEntry { name: "Tokelau", alpha2: "TK", alpha3: "TKL" },
    CountryEntry { name: "Tonga", alpha2: "TO", alpha3: "TON" },
    CountryEntry { name: "Trinidad and Tobago", alpha2: "TT", alpha3: "TTO" },
    CountryEntry { name: "Tunisia", alpha2: "TN", alpha3: "TUN" },
    CountryEntry { name: "Turkiye", alpha2: "TR", alpha3: "TUR" },
    CountryEntry { name: "Turkmenistan", alpha2: "TM", alpha3: "TKM" },
    CountryEntry { name: "Turks and Caicos Islands", alpha2: "TC", alpha3: "TCA" },
    CountryEntry { name: "Tuvalu", alpha2: "TV", alpha3: "TUV" },
    CountryEntry { name: "Uganda", alpha2: "UG", alpha3: "UGA" },
    CountryEntry { name: "Ukraine", alpha2: "UA", alpha3: "UKR" },
    CountryEntry { name: "United Arab Emirates", alpha2: "AE", alpha3: "ARE" },
    CountryEntry { name: "United Kingdom", alpha2: "GB", alpha3: "GBR" },
    CountryEntry { name: "United States", alpha2: "US", alpha3: "USA" },
    CountryEntry { name: "United States Minor Outlying Islands", alpha2: "UM", alpha3: "UMI" },
    CountryEntry { name: "Uruguay", alpha2: "UY", alpha3: "URY" },
    CountryEntry { name: "Uzbekistan", alpha2: "UZ", alpha3: "UZB" },
    CountryEntry { name: "Vanuatu", alpha2: "VU", alpha3: "VUT" },
    CountryEntry { name: "Venezuela", alpha2: "VE", alpha3: "VEN" },
    CountryEntry { name: "Viet Nam", alpha2: "VN", alpha3: "VNM" },
    CountryEntry { name: "Virgin Islands (British)", alpha2: "VG", alpha3: "VGB" },
    CountryEntry { name: "Virgin Islands (U.S.)", alpha2: "VI", alpha3: "VIR" },
    CountryEntry { name: "Wallis and Futuna", alpha2: "WF", alpha3: "WLF" },
    CountryEntry { name: "Western Sahara", alpha2: "EH", alpha3: "ESH" },
    CountryEntry { name: "Yemen", alpha2: "YE", alpha3: "YEM" },
    CountryEntry { name: "Zambia", alpha2: "ZM", alpha3: "ZMB" },
    CountryEntry { name: "Zimbabwe", alpha2: "ZW", alpha3: "ZWE" },
];

/// Looks up an entry by name, alpha-2 or alpha-3 code, case-insensitively.
pub fn find(query: &str) -> Option<&'static CountryEntry> {
    let q = query.trim();
    COUNTRIES.iter().find(|entry| {
        entry.name.eq_ignore_ascii_case(q)
            || entry.alpha2.eq_ignore_ascii_case(q)
            || entry.alpha3.eq_ignore_ascii_case(q)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve() {
        assert_eq!(find("Germany").map(|e| e.alpha3), Some("DEU"));
        assert_eq!(find("united kingdom").map(|e| e.alpha3), Some("GBR"));
    }

    #[test]
    fn codes_resolve() {
        assert_eq!(find("DE").map(|e| e.alpha3), Some("DEU"));
        assert_eq!(find("deu").map(|e| e.alpha3), Some("DEU"));
        assert_eq!(find("USA").map(|e| e.name), Some("United States"));
    }

    #[test]
    fn unknown_queries_miss() {
        assert!(find("Atlantis").is_none());
        assert!(find("").is_none());
        assert!(find("Deutschland").is_none());
    }

    #[test]
    fn alpha3_codes_are_three_letters() {
        for entry in COUNTRIES {
            assert_eq!(entry.alpha3.len(), 3, "{} has bad alpha3", entry.name);
            assert_eq!(entry.alpha2.len(), 2, "{} has bad alpha2", entry.name);
        }
    }
}
