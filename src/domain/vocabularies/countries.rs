//! ISO 3166 country codes with the subdivision tables used for postal addresses.
//!
//! Generated data; edit the table, not the lookup code in the parent module.

use super::{Country, Subdivision};

pub static COUNTRIES: &[Country] = &[
    Country { code: "AFG", name: "Afghanistan", subdivisions: &[] },
    Country { code: "ALA", name: "Aland Islands", subdivisions: &[] },
    Country { code: "ALB", name: "Albania", subdivisions: &[] },
    Country { code: "DZA", name: "Algeria", subdivisions: &[] },
    Country { code: "ASM", name: "American Samoa", subdivisions: &[] },
    Country { code: "AND", name: "Andorra", subdivisions: &[] },
    Country { code: "AGO", name: "Angola", subdivisions: &[] },
    Country { code: "AIA", name: "Anguilla", subdivisions: &[] },
    Country { code: "ATA", name: "Antarctica", subdivisions: &[] },
    Country { code: "ATG", name: "Antigua and Barbuda", subdivisions: &[] },
    Country { code: "ARG", name: "Argentina", subdivisions: &[] },
    Country { code: "ARM", name: "Armenia", subdivisions: &[] },
    Country { code: "ABW", name: "Aruba", subdivisions: &[] },
    Country { code: "AUS", name: "Australia", subdivisions: &[] },
    Country { code: "AUT", name: "Austria", subdivisions: &[] },
    Country { code: "AZE", name: "Azerbaijan", subdivisions: &[] },
    Country { code: "BHS", name: "Bahamas", subdivisions: &[] },
    Country { code: "BHR", name: "Bahrain", subdivisions: &[] },
    Country { code: "BGD", name: "Bangladesh", subdivisions: &[] },
    Country { code: "BRB", name: "Barbados", subdivisions: &[] },
    Country { code: "BLR", name: "Belarus", subdivisions: &[] },
    Country { code: "BEL", name: "Belgium", subdivisions: &[] },
    Country { code: "BLZ", name: "Belize", subdivisions: &[] },
    Country { code: "BEN", name: "Benin", subdivisions: &[] },
    Country { code: "BMU", name: "Bermuda", subdivisions: &[] },
    Country { code: "BTN", name: "Bhutan", subdivisions: &[] },
    Country { code: "BOL", name: "Bolivia", subdivisions: &[] },
    Country { code: "BIH", name: "Bosnia and Herzegovina", subdivisions: &[] },
    Country { code: "BWA", name: "Botswana", subdivisions: &[] },
    Country { code: "BVT", name: "Bouvet Island", subdivisions: &[] },
    Country { code: "BRA", name: "Brazil", subdivisions: &[] },
    Country { code: "VGB", name: "British Virgin Islands", subdivisions: &[] },
    Country { code: "IOT", name: "British Indian Ocean Territory", subdivisions: &[] },
    Country { code: "BRN", name: "Brunei Darussalam", subdivisions: &[] },
    Country { code: "BGR", name: "Bulgaria", subdivisions: &[] },
    Country { code: "BFA", name: "Burkina Faso", subdivisions: &[] },
    Country { code: "BDI", name: "Burundi", subdivisions: &[] },
    Country { code: "KHM", name: "Cambodia", subdivisions: &[] },
    Country { code: "CMR", name: "Cameroon", subdivisions: &[] },
    Country {
        code: "CAN",
        name: "Canada",
        subdivisions: &[
            Subdivision { code: "AB", name: "Alberta" },
            Subdivision { code: "BC", name: "British Columbia" },
            Subdivision { code: "MB", name: "Manitoba" },
            Subdivision { code: "NB", name: "New Brunswick" },
            Subdivision { code: "NL", name: "Newfoundland and Labrador" },
            Subdivision { code: "NS", name: "Nova Scotia" },
            Subdivision { code: "ON", name: "Ontario" },
            Subdivision { code: "PE", name: "Prince Edward Island" },
            Subdivision { code: "QC", name: "Quebec" },
            Subdivision { code: "SK", name: "Saskatchewan" },
            Subdivision { code: "NT", name: "Northwest Territories" },
            Subdivision { code: "NU", name: "Nunavut" },
            Subdivision { code: "YT", name: "Yukon" },
        ],
    },
    Country { code: "CPV", name: "Cape Verde", subdivisions: &[] },
    Country { code: "CYM", name: "Cayman Islands", subdivisions: &[] },
    Country { code: "CAF", name: "Central African Republic", subdivisions: &[] },
    Country { code: "TCD", name: "Chad", subdivisions: &[] },
    Country { code: "CHL", name: "Chile", subdivisions: &[] },
    Country { code: "CHN", name: "China", subdivisions: &[] },
    Country { code: "HKG", name: "Hong Kong, SAR China", subdivisions: &[] },
    Country { code: "MAC", name: "Macao, SAR China", subdivisions: &[] },
    Country { code: "CXR", name: "Christmas Island", subdivisions: &[] },
    Country { code: "CCK", name: "Cocos (Keeling) Islands", subdivisions: &[] },
    Country { code: "COL", name: "Colombia", subdivisions: &[] },
    Country { code: "COM", name: "Comoros", subdivisions: &[] },
    Country { code: "COG", name: "Congo (Brazzaville)", subdivisions: &[] },
    Country { code: "COD", name: "Congo, (Kinshasa)", subdivisions: &[] },
    Country { code: "COK", name: "Cook Islands", subdivisions: &[] },
    Country { code: "CRI", name: "Costa Rica", subdivisions: &[] },
    Country { code: "CIV", name: "Côte d'Ivoire", subdivisions: &[] },
    Country { code: "HRV", name: "Croatia", subdivisions: &[] },
    Country { code: "CUB", name: "Cuba", subdivisions: &[] },
    Country { code: "CYP", name: "Cyprus", subdivisions: &[] },
    Country { code: "CZE", name: "Czech Republic", subdivisions: &[] },
    Country { code: "DNK", name: "Denmark", subdivisions: &[] },
    Country { code: "DJI", name: "Djibouti", subdivisions: &[] },
    Country { code: "DMA", name: "Dominica", subdivisions: &[] },
    Country { code: "DOM", name: "Dominican Republic", subdivisions: &[] },
    Country { code: "ECU", name: "Ecuador", subdivisions: &[] },
    Country { code: "EGY", name: "Egypt", subdivisions: &[] },
    Country { code: "SLV", name: "El Salvador", subdivisions: &[] },
    Country { code: "GNQ", name: "Equatorial Guinea", subdivisions: &[] },
    Country { code: "ERI", name: "Eritrea", subdivisions: &[] },
    Country { code: "EST", name: "Estonia", subdivisions: &[] },
    Country { code: "ETH", name: "Ethiopia", subdivisions: &[] },
    Country { code: "FLK", name: "Falkland Islands (Malvinas)", subdivisions: &[] },
    Country { code: "FRO", name: "Faroe Islands", subdivisions: &[] },
    Country { code: "FJI", name: "Fiji", subdivisions: &[] },
    Country { code: "FIN", name: "Finland", subdivisions: &[] },
    Country { code: "FRA", name: "France", subdivisions: &[] },
    Country { code: "GUF", name: "French Guiana", subdivisions: &[] },
    Country { code: "PYF", name: "French Polynesia", subdivisions: &[] },
    Country { code: "ATF", name: "French Southern Territories", subdivisions: &[] },
    Country { code: "GAB", name: "Gabon", subdivisions: &[] },
    Country { code: "GMB", name: "Gambia", subdivisions: &[] },
    Country { code: "GEO", name: "Georgia", subdivisions: &[] },
    Country { code: "DEU", name: "Germany", subdivisions: &[] },
    Country { code: "GHA", name: "Ghana", subdivisions: &[] },
    Country { code: "GIB", name: "Gibraltar", subdivisions: &[] },
    Country { code: "GRC", name: "Greece", subdivisions: &[] },
    Country { code: "GRL", name: "Greenland", subdivisions: &[] },
    Country { code: "GRD", name: "Grenada", subdivisions: &[] },
    Country { code: "GLP", name: "Guadeloupe", subdivisions: &[] },
    Country { code: "GUM", name: "Guam", subdivisions: &[] },
    Country { code: "GTM", name: "Guatemala", subdivisions: &[] },
    Country { code: "GGY", name: "Guernsey", subdivisions: &[] },
    Country { code: "GIN", name: "Guinea", subdivisions: &[] },
    Country { code: "GNB", name: "Guinea-Bissau", subdivisions: &[] },
    Country { code: "GUY", name: "Guyana", subdivisions: &[] },
    Country { code: "HTI", name: "Haiti", subdivisions: &[] },
    Country { code: "HMD", name: "Heard and Mcdonald Islands", subdivisions: &[] },
    Country { code: "VAT", name: "Holy See (Vatican City State)", subdivisions: &[] },
    Country { code: "HND", name: "Honduras", subdivisions: &[] },
    Country { code: "HUN", name: "Hungary", subdivisions: &[] },
    Country { code: "ISL", name: "Iceland", subdivisions: &[] },
    Country { code: "IND", name: "India", subdivisions: &[] },
    Country { code: "IDN", name: "Indonesia", subdivisions: &[] },
    Country { code: "IRN", name: "Iran, Islamic Republic of", subdivisions: &[] },
    Country { code: "IRQ", name: "Iraq", subdivisions: &[] },
    Country { code: "IRL", name: "Ireland", subdivisions: &[] },
    Country { code: "IMN", name: "Isle of Man", subdivisions: &[] },
    Country { code: "ISR", name: "Israel", subdivisions: &[] },
    Country { code: "ITA", name: "Italy", subdivisions: &[] },
    Country { code: "JAM", name: "Jamaica", subdivisions: &[] },
    Country { code: "JPN", name: "Japan", subdivisions: &[] },
    Country { code: "JEY", name: "Jersey", subdivisions: &[] },
    Country { code: "JOR", name: "Jordan", subdivisions: &[] },
    Country { code: "KAZ", name: "Kazakhstan", subdivisions: &[] },
    Country { code: "KEN", name: "Kenya", subdivisions: &[] },
    Country { code: "KIR", name: "Kiribati", subdivisions: &[] },
    Country { code: "PRK", name: "Korea (North)", subdivisions: &[] },
    Country { code: "KOR", name: "Korea (South)", subdivisions: &[] },
    Country { code: "KWT", name: "Kuwait", subdivisions: &[] },
    Country { code: "KGZ", name: "Kyrgyzstan", subdivisions: &[] },
    Country { code: "LAO", name: "Lao PDR", subdivisions: &[] },
    Country { code: "LVA", name: "Latvia", subdivisions: &[] },
    Country { code: "LBN", name: "Lebanon", subdivisions: &[] },
    Country { code: "LSO", name: "Lesotho", subdivisions: &[] },
    Country { code: "LBR", name: "Liberia", subdivisions: &[] },
    Country { code: "LBY", name: "Libya", subdivisions: &[] },
    Country { code: "LIE", name: "Liechtenstein", subdivisions: &[] },
    Country { code: "LTU", name: "Lithuania", subdivisions: &[] },
    Country { code: "LUX", name: "Luxembourg", subdivisions: &[] },
    Country { code: "MKD", name: "Macedonia, Republic of", subdivisions: &[] },
    Country { code: "MDG", name: "Madagascar", subdivisions: &[] },
    Country { code: "MWI", name: "Malawi", subdivisions: &[] },
    Country { code: "MYS", name: "Malaysia", subdivisions: &[] },
    Country { code: "MDV", name: "Maldives", subdivisions: &[] },
    Country { code: "MLI", name: "Mali", subdivisions: &[] },
    Country { code: "MLT", name: "Malta", subdivisions: &[] },
    Country { code: "MHL", name: "Marshall Islands", subdivisions: &[] },
    Country { code: "MTQ", name: "Martinique", subdivisions: &[] },
    Country { code: "MRT", name: "Mauritania", subdivisions: &[] },
    Country { code: "MUS", name: "Mauritius", subdivisions: &[] },
    Country { code: "MYT", name: "Mayotte", subdivisions: &[] },
    Country {
        code: "MEX",
        name: "Mexico",
        subdivisions: &[
            Subdivision { code: "CMX", name: "Mexican Federal District" },
            Subdivision { code: "AGU", name: "Aguascalientes" },
            Subdivision { code: "BCN", name: "Baja California" },
            Subdivision { code: "BCS", name: "Baja California Sur" },
            Subdivision { code: "CAM", name: "Campeche" },
            Subdivision { code: "COA", name: "Coahuila" },
            Subdivision { code: "COL", name: "Colima" },
            Subdivision { code: "CHP", name: "Chiapas" },
            Subdivision { code: "CHH", name: "Chihuahua" },
            Subdivision { code: "DUR", name: "Durango" },
            Subdivision { code: "GUA", name: "Guanajuato" },
            Subdivision { code: "GRO", name: "Guerrero" },
            Subdivision { code: "HID", name: "Hidalgo" },
            Subdivision { code: "JAL", name: "Jalisco" },
            Subdivision { code: "MEX", name: "México" },
            Subdivision { code: "MIC", name: "Michoacán" },
            Subdivision { code: "MOR", name: "Morelos" },
            Subdivision { code: "NAY", name: "Nayarit" },
            Subdivision { code: "NLE", name: "Nuevo León" },
            Subdivision { code: "OAX", name: "Oaxaca" },
            Subdivision { code: "PUE", name: "Puebla" },
            Subdivision { code: "QUE", name: "Querétaro" },
            Subdivision { code: "ROO", name: "Quintana Roo" },
            Subdivision { code: "SLP", name: "San Luis Potosí" },
            Subdivision { code: "SIN", name: "Sinaloa" },
            Subdivision { code: "SON", name: "Sonora" },
            Subdivision { code: "TAB", name: "Tabasco" },
            Subdivision { code: "TAM", name: "Tamaulipas" },
            Subdivision { code: "TLA", name: "Tlaxcala" },
            Subdivision { code: "VER", name: "Veracruz" },
            Subdivision { code: "YUC", name: "Yucatán" },
            Subdivision { code: "ZAC", name: "Zacatecas" },
        ],
    },
    Country { code: "FSM", name: "Micronesia, Federated States of", subdivisions: &[] },
    Country { code: "MDA", name: "Moldova", subdivisions: &[] },
    Country { code: "MCO", name: "Monaco", subdivisions: &[] },
    Country { code: "MNG", name: "Mongolia", subdivisions: &[] },
    Country { code: "MNE", name: "Montenegro", subdivisions: &[] },
    Country { code: "MSR", name: "Montserrat", subdivisions: &[] },
    Country { code: "MAR", name: "Morocco", subdivisions: &[] },
    Country { code: "MOZ", name: "Mozambique", subdivisions: &[] },
    Country { code: "MMR", name: "Myanmar", subdivisions: &[] },
    Country { code: "NAM", name: "Namibia", subdivisions: &[] },
    Country { code: "NRU", name: "Nauru", subdivisions: &[] },
    Country { code: "NPL", name: "Nepal", subdivisions: &[] },
    Country { code: "NLD", name: "Netherlands", subdivisions: &[] },
    Country { code: "ANT", name: "Netherlands Antilles", subdivisions: &[] },
    Country { code: "NCL", name: "New Caledonia", subdivisions: &[] },
    Country { code: "NZL", name: "New Zealand", subdivisions: &[] },
    Country { code: "NIC", name: "Nicaragua", subdivisions: &[] },
    Country { code: "NER", name: "Niger", subdivisions: &[] },
    Country { code: "NGA", name: "Nigeria", subdivisions: &[] },
    Country { code: "NIU", name: "Niue", subdivisions: &[] },
    Country { code: "NFK", name: "Norfolk Island", subdivisions: &[] },
    Country { code: "MNP", name: "Northern Mariana Islands", subdivisions: &[] },
    Country { code: "NOR", name: "Norway", subdivisions: &[] },
    Country { code: "OMN", name: "Oman", subdivisions: &[] },
    Country { code: "PAK", name: "Pakistan", subdivisions: &[] },
    Country { code: "PLW", name: "Palau", subdivisions: &[] },
    Country { code: "PSE", name: "Palestinian Territory", subdivisions: &[] },
    Country { code: "PAN", name: "Panama", subdivisions: &[] },
    Country { code: "PNG", name: "Papua New Guinea", subdivisions: &[] },
    Country { code: "PRY", name: "Paraguay", subdivisions: &[] },
    Country { code: "PER", name: "Peru", subdivisions: &[] },
    Country { code: "PHL", name: "Philippines", subdivisions: &[] },
    Country { code: "PCN", name: "Pitcairn", subdivisions: &[] },
    Country { code: "POL", name: "Poland", subdivisions: &[] },
    Country { code: "PRT", name: "Portugal", subdivisions: &[] },
    Country { code: "PRI", name: "Puerto Rico", subdivisions: &[] },
    Country { code: "QAT", name: "Qatar", subdivisions: &[] },
    Country { code: "REU", name: "Réunion", subdivisions: &[] },
    Country { code: "ROU", name: "Romania", subdivisions: &[] },
    Country { code: "RUS", name: "Russian Federation", subdivisions: &[] },
    Country { code: "RWA", name: "Rwanda", subdivisions: &[] },
    Country { code: "BLM", name: "Saint-Barthélemy", subdivisions: &[] },
    Country { code: "SHN", name: "Saint Helena", subdivisions: &[] },
    Country { code: "KNA", name: "Saint Kitts and Nevis", subdivisions: &[] },
    Country { code: "LCA", name: "Saint Lucia", subdivisions: &[] },
    Country { code: "MAF", name: "Saint-Martin (French part)", subdivisions: &[] },
    Country { code: "SPM", name: "Saint Pierre and Miquelon", subdivisions: &[] },
    Country { code: "VCT", name: "Saint Vincent and Grenadines", subdivisions: &[] },
    Country { code: "WSM", name: "Samoa", subdivisions: &[] },
    Country { code: "SMR", name: "San Marino", subdivisions: &[] },
    Country { code: "STP", name: "Sao Tome and Principe", subdivisions: &[] },
    Country { code: "SAU", name: "Saudi Arabia", subdivisions: &[] },
    Country { code: "SEN", name: "Senegal", subdivisions: &[] },
    Country { code: "SRB", name: "Serbia", subdivisions: &[] },
    Country { code: "SYC", name: "Seychelles", subdivisions: &[] },
    Country { code: "SLE", name: "Sierra Leone", subdivisions: &[] },
    Country { code: "SGP", name: "Singapore", subdivisions: &[] },
    Country { code: "SVK", name: "Slovakia", subdivisions: &[] },
    Country { code: "SVN", name: "Slovenia", subdivisions: &[] },
    Country { code: "SLB", name: "Solomon Islands", subdivisions: &[] },
    Country { code: "SOM", name: "Somalia", subdivisions: &[] },
    Country { code: "ZAF", name: "South Africa", subdivisions: &[] },
    Country { code: "SGS", name: "South Georgia and the South Sandwich Islands", subdivisions: &[] },
    Country { code: "SSD", name: "South Sudan", subdivisions: &[] },
    Country { code: "ESP", name: "Spain", subdivisions: &[] },
    Country { code: "LKA", name: "Sri Lanka", subdivisions: &[] },
    Country { code: "SDN", name: "Sudan", subdivisions: &[] },
    Country { code: "SUR", name: "Suriname", subdivisions: &[] },
    Country { code: "SJM", name: "Svalbard and Jan Mayen Islands", subdivisions: &[] },
    Country { code: "SWZ", name: "Swaziland", subdivisions: &[] },
    Country { code: "SWE", name: "Sweden", subdivisions: &[] },
    Country { code: "CHE", name: "Switzerland", subdivisions: &[] },
    Country { code: "SYR", name: "Syrian Arab Republic (Syria)", subdivisions: &[] },
    Country { code: "TWN", name: "Taiwan, Republic of China", subdivisions: &[] },
    Country { code: "TJK", name: "Tajikistan", subdivisions: &[] },
    Country { code: "TZA", name: "Tanzania, United Republic of", subdivisions: &[] },
    Country { code: "THA", name: "Thailand", subdivisions: &[] },
    Country { code: "TLS", name: "Timor-Leste", subdivisions: &[] },
    Country { code: "TGO", name: "Togo", subdivisions: &[] },
    Country { code: "TKL", name: "Tokelau", subdivisions: &[] },
    Country { code: "TON", name: "Tonga", subdivisions: &[] },
    Country { code: "TTO", name: "Trinidad and Tobago", subdivisions: &[] },
    Country { code: "TUN", name: "Tunisia", subdivisions: &[] },
    Country { code: "TUR", name: "Turkey", subdivisions: &[] },
    Country { code: "TKM", name: "Turkmenistan", subdivisions: &[] },
    Country { code: "TCA", name: "Turks and Caicos Islands", subdivisions: &[] },
    Country { code: "TUV", name: "Tuvalu", subdivisions: &[] },
    Country { code: "UGA", name: "Uganda", subdivisions: &[] },
    Country { code: "UKR", name: "Ukraine", subdivisions: &[] },
    Country { code: "ARE", name: "United Arab Emirates", subdivisions: &[] },
    Country { code: "GBR", name: "United Kingdom", subdivisions: &[] },
    Country {
        code: "USA",
        name: "United States of America",
        subdivisions: &[
            Subdivision { code: "AL", name: "Alabama" },
            Subdivision { code: "AK", name: "Alaska" },
            Subdivision { code: "AZ", name: "Arizona" },
            Subdivision { code: "AR", name: "Arkansas" },
            Subdivision { code: "CA", name: "California" },
            Subdivision { code: "CO", name: "Colorado" },
            Subdivision { code: "CT", name: "Connecticut" },
            Subdivision { code: "DE", name: "Delaware" },
            Subdivision { code: "FL", name: "Florida" },
            Subdivision { code: "GA", name: "Georgia" },
            Subdivision { code: "HI", name: "Hawaii" },
            Subdivision { code: "ID", name: "Idaho" },
            Subdivision { code: "IL", name: "Illinois" },
            Subdivision { code: "IN", name: "Indiana" },
            Subdivision { code: "IA", name: "Iowa" },
            Subdivision { code: "KS", name: "Kansas" },
            Subdivision { code: "KY", name: "Kentucky" },
            Subdivision { code: "LA", name: "Louisiana" },
            Subdivision { code: "ME", name: "Maine" },
            Subdivision { code: "MD", name: "Maryland" },
            Subdivision { code: "MA", name: "Massachusetts" },
            Subdivision { code: "MI", name: "Michigan" },
            Subdivision { code: "MN", name: "Minnesota" },
            Subdivision { code: "MS", name: "Mississippi" },
            Subdivision { code: "MO", name: "Missouri" },
            Subdivision { code: "MT", name: "Montana" },
            Subdivision { code: "NE", name: "Nebraska" },
            Subdivision { code: "NV", name: "Nevada" },
            Subdivision { code: "NH", name: "New Hampshire" },
            Subdivision { code: "NJ", name: "New Jersey" },
            Subdivision { code: "NM", name: "New Mexico" },
            Subdivision { code: "NY", name: "New York" },
            Subdivision { code: "NC", name: "North Carolina" },
            Subdivision { code: "ND", name: "North Dakota" },
            Subdivision { code: "OH", name: "Ohio" },
            Subdivision { code: "OK", name: "Oklahoma" },
            Subdivision { code: "OR", name: "Oregon" },
            Subdivision { code: "PA", name: "Pennsylvania" },
            Subdivision { code: "RI", name: "Rhode Island" },
            Subdivision { code: "SC", name: "South Carolina" },
            Subdivision { code: "SD", name: "South Dakota" },
            Subdivision { code: "TN", name: "Tennessee" },
            Subdivision { code: "TX", name: "Texas" },
            Subdivision { code: "UT", name: "Utah" },
            Subdivision { code: "VT", name: "Vermont" },
            Subdivision { code: "VA", name: "Virginia" },
            Subdivision { code: "WA", name: "Washington" },
            Subdivision { code: "WV", name: "West Virginia" },
            Subdivision { code: "WI", name: "Wisconsin" },
            Subdivision { code: "WY", name: "Wyoming" },
            Subdivision { code: "DC", name: "District of Columbia" },
            Subdivision { code: "AS", name: "American Samoa" },
            Subdivision { code: "GU", name: "Guam" },
            Subdivision { code: "MP", name: "Northern Mariana Islands" },
            Subdivision { code: "PR", name: "Puerto Rico" },
            Subdivision { code: "UM", name: "United States Minor Outlying Islands" },
            Subdivision { code: "VI", name: "Virgin Islands, U.S." },
        ],
    },
    Country { code: "UMI", name: "US Minor Outlying Islands", subdivisions: &[] },
    Country { code: "URY", name: "Uruguay", subdivisions: &[] },
    Country { code: "UZB", name: "Uzbekistan", subdivisions: &[] },
    Country { code: "VUT", name: "Vanuatu", subdivisions: &[] },
    Country { code: "VEN", name: "Venezuela (Bolivarian Republic)", subdivisions: &[] },
    Country { code: "VNM", name: "Viet Nam", subdivisions: &[] },
    Country { code: "VIR", name: "Virgin Islands, US", subdivisions: &[] },
    Country { code: "WLF", name: "Wallis and Futuna Islands", subdivisions: &[] },
    Country { code: "ESH", name: "Western Sahara", subdivisions: &[] },
    Country { code: "YEM", name: "Yemen", subdivisions: &[] },
    Country { code: "ZMB", name: "Zambia", subdivisions: &[] },
    Country { code: "ZWE", name: "Zimbabwe", subdivisions: &[] },
];
