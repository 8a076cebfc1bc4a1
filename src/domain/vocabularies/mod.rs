//! Static lookup tables for postal addresses.

mod countries;

pub use countries::COUNTRIES;

/// Country used when a place does not name one.
pub const DEFAULT_COUNTRY: &str = "USA";

/// Region used when a place does not name one.
pub const DEFAULT_REGION: &str = "IL";

/// Locality used when a place does not name one.
pub const DEFAULT_LOCALITY: &str = "Chicago";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub subdivisions: &'static [Subdivision],
}

impl Country {
    pub fn subdivision(&self, code: &str) -> Option<&'static Subdivision> {
        self.subdivisions.iter().find(|s| s.code == code)
    }
}

/// Looks up a country by its three-letter code.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

/// Checks a country/region pair against the vocabulary.
///
/// A region is only checked when the country carries a subdivision table.
pub fn validate_address_codes(country: Option<&str>, region: Option<&str>) -> Result<(), String> {
    let Some(country_code) = country else {
        return Ok(());
    };

    let country = find_country(country_code)
        .ok_or_else(|| format!("unknown country code '{country_code}'"))?;

    if let Some(region_code) = region
        && !country.subdivisions.is_empty()
        && country.subdivision(region_code).is_none()
    {
        return Err(format!(
            "region '{region_code}' is not a subdivision of {}",
            country.name
        ));
    }

    Ok(())
}
